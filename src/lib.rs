pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod manifest;
pub mod mediator;
pub mod registry;
pub mod schema;
pub mod utils;

pub use cli::{catalog_exports, CatalogExportEntry};
pub use config::{ConfigError, EnvConfig, RegistryConfig};
pub use error::{MediaFlowError, Result};
pub use flow::{
    import_flow, Diagnostic, DiagnosticKind, FlowDocument, FlowError, FlowNode, FlowReport,
    FlowValidator,
};
pub use manifest::{ManifestError, ManifestModule, MediatorManifest, UnloadableManifest};
pub use mediator::{
    builtin, Category, DescriptorBuilder, DescriptorSpec, MediatorDescriptor, Parameter,
    ParameterKind, UiHint,
};
pub use registry::{
    Bootstrap, CategoryIndex, Declaration, MediatorCatalog, MediatorModule, MediatorQuery,
    MediatorRegistry, PaletteEntry, PaletteGroup, RegistrationFailure, RegistrationReport,
    RegistryError, RegistryPhase, SharedRegistry,
};
pub use schema::{validate_value, Schema, SchemaError, SchemaKind};
pub use utils::logging;
