use std::sync::Arc;

use crate::mediator::{Category, MediatorDescriptor};

use super::error::RegistryError;

/// 面向画布、属性表单、序列化层的只读查询接口
pub trait MediatorQuery {
    fn lookup(&self, id: &str) -> Result<Arc<MediatorDescriptor>, RegistryError>;

    fn list_by_category(&self, category: Category) -> Vec<Arc<MediatorDescriptor>>;

    fn list_all(&self) -> Vec<Arc<MediatorDescriptor>>;

    fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_ok()
    }
}
