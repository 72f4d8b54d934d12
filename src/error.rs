use thiserror::Error;

use crate::config::ConfigError;
use crate::flow::FlowError;
use crate::manifest::ManifestError;
use crate::registry::RegistryError;
use crate::schema::SchemaError;

pub type Result<T> = std::result::Result<T, MediaFlowError>;

#[derive(Debug, Error)]
pub enum MediaFlowError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("mediator bootstrap failed: {failures} registration(s) rejected")]
    Bootstrap { failures: usize },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
