use crate::mediator::{Category, MediatorDescriptor, Parameter, UiHint};

pub fn log() -> MediatorDescriptor {
    MediatorDescriptor::builder("LogMediator", "Log Mediator", Category::Manipulator)
        .description("Logs the current message")
        .parameter(
            Parameter::one_of("level", ["full", "simple", "headers", "custom"])
                .with_default("simple")
                .with_label("Log Level"),
        )
        .parameter(
            Parameter::string("separator")
                .with_default(",")
                .with_label("Log Separator"),
        )
        .parameter(
            Parameter::string("message")
                .with_ui_hint(UiHint::TextArea)
                .with_label("Message"),
        )
        .build()
}

pub fn property() -> MediatorDescriptor {
    MediatorDescriptor::builder("PropertyMediator", "Property Mediator", Category::Manipulator)
        .description("Sets or removes a message property")
        .parameter(Parameter::string("name").required().with_label("Property Name"))
        .parameter(
            Parameter::one_of("action", ["set", "remove"])
                .with_default("set")
                .with_label("Property Action"),
        )
        .parameter(Parameter::expression("value").with_label("Value"))
        .parameter(
            Parameter::one_of("scope", ["default", "transport", "axis2"])
                .with_default("default")
                .with_label("Property Scope"),
        )
        .build()
}

pub fn header() -> MediatorDescriptor {
    MediatorDescriptor::builder("HeaderMediator", "Header Mediator", Category::Manipulator)
        .parameter(Parameter::string("name").required().with_label("Header Name"))
        .parameter(Parameter::expression("value").with_label("Header Value"))
        .build()
}

pub fn descriptors() -> Vec<MediatorDescriptor> {
    vec![log(), property(), header()]
}
