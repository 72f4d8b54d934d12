use thiserror::Error;

use super::validator::FlowReport;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("failed to parse flow document: {0}")]
    Parse(String),
    #[error("failed to serialize flow document: {0}")]
    Serialize(String),
    #[error("flow `{}` rejected with {} problem(s)", .0.flow, .0.diagnostics.len())]
    Rejected(FlowReport),
}
