use crate::mediator::{Category, MediatorDescriptor, Parameter, ParameterKind};

pub fn http() -> MediatorDescriptor {
    MediatorDescriptor::builder("HttpEndpoint", "HTTP Endpoint", Category::Endpoint)
        .parameter(Parameter::string("uri").required().with_label("URI Template"))
        .parameter(
            Parameter::one_of("method", ["GET", "POST", "PUT", "DELETE", "PATCH"])
                .with_default("GET")
                .with_label("HTTP Method"),
        )
        .parameter(
            Parameter::new("timeout", ParameterKind::Integer)
                .with_default(60_000)
                .with_label("Timeout (ms)"),
        )
        .build()
}

pub fn descriptors() -> Vec<MediatorDescriptor> {
    vec![http()]
}
