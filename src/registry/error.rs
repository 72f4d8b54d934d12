use thiserror::Error;

/// 注册表错误类型
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("invalid mediator descriptor `{id}`: {reason}")]
    InvalidDescriptor { id: String, reason: String },
    #[error("mediator `{0}` already registered")]
    DuplicateId(String),
    #[error("registry is sealed, cannot register mediator `{0}`")]
    RegistryClosed(String),
    #[error("mediator `{0}` not found")]
    NotFound(String),
    #[error("mediator module `{module}` could not be loaded: {reason}")]
    ModuleUnavailable { module: String, reason: String },
}

impl RegistryError {
    pub fn invalid(id: impl Into<String>, reason: impl Into<String>) -> Self {
        RegistryError::InvalidDescriptor {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// 出错的 mediator ID；模块整体不可用时为模块名
    pub fn mediator_id(&self) -> &str {
        match self {
            RegistryError::InvalidDescriptor { id, .. } => id,
            RegistryError::ModuleUnavailable { module, .. } => module,
            RegistryError::DuplicateId(id)
            | RegistryError::RegistryClosed(id)
            | RegistryError::NotFound(id) => id,
        }
    }
}
