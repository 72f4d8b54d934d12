use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::mediator::{Category, MediatorDescriptor};

use super::catalog::MediatorCatalog;
use super::error::RegistryError;
use super::query::MediatorQuery;
use super::registry::MediatorRegistry;

/// 多线程宿主使用的注册表
///
/// 注册与 seal 走同一把锁；seal 之后读操作直接访问 catalog，不再加锁。
#[derive(Debug, Default)]
pub struct SharedRegistry {
    inner: Mutex<MediatorRegistry>,
    sealed: OnceLock<MediatorCatalog>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_registry(registry: MediatorRegistry) -> Self {
        let sealed = OnceLock::new();
        if let Some(catalog) = registry.catalog() {
            let _ = sealed.set(catalog);
        }
        Self {
            inner: Mutex::new(registry),
            sealed,
        }
    }

    pub fn register(
        &self,
        descriptor: MediatorDescriptor,
    ) -> Result<Arc<MediatorDescriptor>, RegistryError> {
        if self.sealed.get().is_some() {
            return Err(RegistryError::RegistryClosed(descriptor.id));
        }
        self.inner.lock().register(descriptor)
    }

    pub fn seal(&self) -> MediatorCatalog {
        let mut guard = self.inner.lock();
        self.sealed.get_or_init(|| guard.seal()).clone()
    }

    pub fn catalog(&self) -> Option<MediatorCatalog> {
        self.sealed.get().cloned()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.get().is_some()
    }

    pub fn len(&self) -> usize {
        match self.sealed.get() {
            Some(catalog) => catalog.len(),
            None => self.inner.lock().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MediatorQuery for SharedRegistry {
    fn lookup(&self, id: &str) -> Result<Arc<MediatorDescriptor>, RegistryError> {
        match self.sealed.get() {
            Some(catalog) => catalog.lookup(id),
            None => self.inner.lock().lookup(id),
        }
    }

    fn list_by_category(&self, category: Category) -> Vec<Arc<MediatorDescriptor>> {
        match self.sealed.get() {
            Some(catalog) => catalog.list_by_category(category),
            None => self.inner.lock().list_by_category(category),
        }
    }

    fn list_all(&self) -> Vec<Arc<MediatorDescriptor>> {
        match self.sealed.get() {
            Some(catalog) => catalog.list_all(),
            None => self.inner.lock().list_all(),
        }
    }
}
