pub mod builtin;
pub mod category;
pub mod descriptor;
pub mod parameter;
pub mod validation;

pub use category::{Category, UnknownCategory};
pub use descriptor::{DescriptorBuilder, DescriptorSpec, MediatorDescriptor};
pub use parameter::{Parameter, ParameterKind, UiHint};
pub use validation::{validate_descriptor, validate_mediator_id};
