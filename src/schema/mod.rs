pub mod error;
pub mod schema;
pub mod validation;

pub use error::SchemaError;
pub use schema::{Schema, SchemaKind};
pub use validation::validate_value;
