pub mod document;
pub mod error;
pub mod validator;

pub use document::{FlowDocument, FlowNode};
pub use error::FlowError;
pub use validator::{import_flow, Diagnostic, DiagnosticKind, FlowReport, FlowValidator};
