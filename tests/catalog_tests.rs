use std::thread;

use mediaflow::{builtin, Bootstrap, Category, MediatorQuery, PaletteGroup};

#[test]
fn builtin_palette_groups_follow_registration_order() {
    let (catalog, report) = Bootstrap::new().with_builtins().run().expect("bootstrap");
    assert!(report.is_clean());

    let palette = catalog.palette();
    let categories: Vec<_> = palette.iter().map(|group| group.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::FlowController,
            Category::Manipulator,
            Category::Filter,
            Category::Endpoint,
        ]
    );

    let PaletteGroup { label, entries, .. } = &palette[0];
    assert_eq!(label, "Flow Controllers");
    assert_eq!(entries[0].id, "TryBlockMediator");
    assert_eq!(entries[0].name, "TryBlock Mediator");
    assert_eq!(entries[0].icon, "images/TryBlockMediator.gif");

    let total: usize = palette.iter().map(|group| group.entries.len()).sum();
    assert_eq!(total, catalog.len());
}

#[test]
fn palette_is_stable_across_reloads() {
    let first = Bootstrap::new().with_builtins().run().expect("bootstrap").0;
    let second = Bootstrap::new().with_builtins().run().expect("bootstrap").0;
    assert_eq!(first.palette(), second.palette());
}

#[test]
fn form_consumer_reads_parameters() {
    let (catalog, _) = Bootstrap::new().with_builtins().run().expect("bootstrap");
    let log = catalog.lookup("LogMediator").expect("log mediator");
    let names: Vec<_> = log.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["level", "separator", "message"]);
    assert_eq!(log.parameter("level").map(|p| p.display_label()), Some("Log Level"));

    let expected = builtin::manipulators::log();
    assert_eq!(*log, expected);
}

#[test]
fn catalog_is_shared_across_threads() {
    let (catalog, _) = Bootstrap::new().with_builtins().run().expect("bootstrap");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = catalog.clone();
            thread::spawn(move || {
                let via_trait: &dyn MediatorQuery = &catalog;
                via_trait.contains("TryBlockMediator") && !via_trait.contains("Nope")
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread"));
    }
}
