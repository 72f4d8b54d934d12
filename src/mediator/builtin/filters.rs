use crate::mediator::{Category, MediatorDescriptor, Parameter};

pub fn filter() -> MediatorDescriptor {
    MediatorDescriptor::builder("FilterMediator", "Filter Mediator", Category::Filter)
        .description("Routes the message by matching an expression against a pattern")
        .parameter(Parameter::expression("source").required().with_label("Source"))
        .parameter(Parameter::string("regex").required().with_label("Regex"))
        .build()
}

pub fn descriptors() -> Vec<MediatorDescriptor> {
    vec![filter()]
}
