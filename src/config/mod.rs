pub mod env;
pub mod registry_config;

pub use env::EnvConfig;
pub use registry_config::{ConfigError, RegistryConfig};
