use thiserror::Error;

/// Schema 错误类型
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema validation failed: {message}")]
    Validation { message: String, path: Vec<String> },
}
