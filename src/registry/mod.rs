pub mod bootstrap;
pub mod catalog;
pub mod error;
pub mod index;
pub mod query;
pub mod registry;
pub mod shared;

pub use bootstrap::{
    register_module, register_modules, Bootstrap, Declaration, MediatorModule,
    RegistrationFailure, RegistrationReport,
};
pub use catalog::{MediatorCatalog, PaletteEntry, PaletteGroup};
pub use error::RegistryError;
pub use index::CategoryIndex;
pub use query::MediatorQuery;
pub use registry::{MediatorRegistry, RegistryPhase};
pub use shared::SharedRegistry;
