use std::collections::HashMap;
use std::sync::Arc;

use crate::mediator::{Category, DescriptorSpec, MediatorDescriptor};

use super::catalog::MediatorCatalog;
use super::error::RegistryError;
use super::index::CategoryIndex;
use super::query::MediatorQuery;

/// 注册表生命周期
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryPhase {
    Open,
    Sealed,
}

/// 注册表与 catalog 共享的数据
#[derive(Clone, Debug, Default)]
pub(crate) struct CatalogState {
    entries: Vec<Arc<MediatorDescriptor>>,
    by_id: HashMap<String, usize>,
    index: CategoryIndex,
}

impl CatalogState {
    fn insert(&mut self, descriptor: Arc<MediatorDescriptor>) {
        self.by_id.insert(descriptor.id.clone(), self.entries.len());
        self.index.insert(Arc::clone(&descriptor));
        self.entries.push(descriptor);
    }

    pub(crate) fn lookup(&self, id: &str) -> Result<Arc<MediatorDescriptor>, RegistryError> {
        self.by_id
            .get(id)
            .map(|&slot| Arc::clone(&self.entries[slot]))
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub(crate) fn list_by_category(&self, category: Category) -> Vec<Arc<MediatorDescriptor>> {
        self.index.get(category).to_vec()
    }

    pub(crate) fn list_all(&self) -> Vec<Arc<MediatorDescriptor>> {
        self.entries.clone()
    }

    pub(crate) fn categories(&self) -> &[Category] {
        self.index.categories()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Mediator 注册表
///
/// 启动阶段由各模块注册描述符，随后 [`seal`](Self::seal) 转为只读并交出
/// [`MediatorCatalog`] 给画布、属性表单和序列化层使用。
#[derive(Debug)]
pub struct MediatorRegistry {
    state: Arc<CatalogState>,
    phase: RegistryPhase,
}

impl Default for MediatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MediatorRegistry {
    pub fn new() -> Self {
        Self {
            state: Arc::new(CatalogState::default()),
            phase: RegistryPhase::Open,
        }
    }

    pub fn register(
        &mut self,
        descriptor: MediatorDescriptor,
    ) -> Result<Arc<MediatorDescriptor>, RegistryError> {
        if self.phase == RegistryPhase::Sealed {
            return Err(RegistryError::RegistryClosed(descriptor.id));
        }
        descriptor.validate()?;
        if self.state.contains(&descriptor.id) {
            return Err(RegistryError::DuplicateId(descriptor.id));
        }

        let descriptor = Arc::new(descriptor);
        Arc::make_mut(&mut self.state).insert(Arc::clone(&descriptor));
        tracing::debug!(
            mediator = %descriptor.id,
            category = %descriptor.category,
            "mediator registered"
        );
        Ok(descriptor)
    }

    /// 注册清单形态的描述符，未知分类视为无效描述符
    pub fn register_spec(
        &mut self,
        spec: DescriptorSpec,
    ) -> Result<Arc<MediatorDescriptor>, RegistryError> {
        if self.phase == RegistryPhase::Sealed {
            return Err(RegistryError::RegistryClosed(spec.id));
        }
        self.register(MediatorDescriptor::try_from(spec)?)
    }

    pub fn lookup(&self, id: &str) -> Result<Arc<MediatorDescriptor>, RegistryError> {
        self.state.lookup(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.state.contains(id)
    }

    pub fn list_by_category(&self, category: Category) -> Vec<Arc<MediatorDescriptor>> {
        self.state.list_by_category(category)
    }

    pub fn list_all(&self) -> Vec<Arc<MediatorDescriptor>> {
        self.state.list_all()
    }

    pub fn categories(&self) -> &[Category] {
        self.state.categories()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn phase(&self) -> RegistryPhase {
        self.phase
    }

    pub fn is_sealed(&self) -> bool {
        self.phase == RegistryPhase::Sealed
    }

    /// 关闭注册，之后的 `register` 返回 `RegistryClosed`。重复调用返回同一份 catalog。
    pub fn seal(&mut self) -> MediatorCatalog {
        if self.phase == RegistryPhase::Open {
            self.phase = RegistryPhase::Sealed;
            tracing::info!(mediators = self.state.len(), "mediator registry sealed");
        }
        MediatorCatalog::from_state(Arc::clone(&self.state))
    }

    /// 仅在 sealed 之后可用
    pub fn catalog(&self) -> Option<MediatorCatalog> {
        self.is_sealed()
            .then(|| MediatorCatalog::from_state(Arc::clone(&self.state)))
    }
}

impl MediatorQuery for MediatorRegistry {
    fn lookup(&self, id: &str) -> Result<Arc<MediatorDescriptor>, RegistryError> {
        MediatorRegistry::lookup(self, id)
    }

    fn list_by_category(&self, category: Category) -> Vec<Arc<MediatorDescriptor>> {
        MediatorRegistry::list_by_category(self, category)
    }

    fn list_all(&self) -> Vec<Arc<MediatorDescriptor>> {
        MediatorRegistry::list_all(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mediator::Parameter;

    fn try_block() -> MediatorDescriptor {
        MediatorDescriptor::builder("TryBlockMediator", "TryBlock Mediator", Category::FlowController)
            .build()
    }

    #[test]
    fn catalog_unavailable_until_sealed() {
        let mut registry = MediatorRegistry::new();
        registry.register(try_block()).expect("register");
        assert!(registry.catalog().is_none());

        let catalog = registry.seal();
        assert!(registry.catalog().is_some());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn sealing_twice_is_harmless() {
        let mut registry = MediatorRegistry::new();
        registry.register(try_block()).expect("register");
        let first = registry.seal();
        let second = registry.seal();
        assert_eq!(first.list_all(), second.list_all());
        assert_eq!(registry.phase(), RegistryPhase::Sealed);
    }

    #[test]
    fn closed_check_runs_before_validation() {
        let mut registry = MediatorRegistry::new();
        registry.seal();
        let invalid = MediatorDescriptor::builder("Bad", "Bad", Category::Filter)
            .parameter(Parameter::string("x"))
            .parameter(Parameter::string("x"))
            .build();
        assert_eq!(
            registry.register(invalid),
            Err(RegistryError::RegistryClosed("Bad".to_string()))
        );
    }

    #[test]
    fn registration_after_seal_leaves_catalog_unchanged() {
        let mut registry = MediatorRegistry::new();
        let catalog = registry.seal();
        assert!(registry.register(try_block()).is_err());
        assert!(catalog.is_empty());
        assert!(registry.is_empty());
    }
}
