use std::sync::Arc;

use serde::Serialize;

use crate::mediator::{Category, MediatorDescriptor};

use super::error::RegistryError;
use super::query::MediatorQuery;
use super::registry::CatalogState;

/// 只读 catalog，可廉价克隆后交给各 UI 组件
#[derive(Clone, Debug)]
pub struct MediatorCatalog {
    state: Arc<CatalogState>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PaletteEntry {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PaletteGroup {
    pub category: Category,
    pub label: String,
    pub entries: Vec<PaletteEntry>,
}

impl MediatorCatalog {
    pub(crate) fn from_state(state: Arc<CatalogState>) -> Self {
        Self { state }
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

    /// Palette 数据：按分类分组，组内保持注册顺序
    pub fn palette(&self) -> Vec<PaletteGroup> {
        self.categories()
            .iter()
            .map(|&category| PaletteGroup {
                category,
                label: category.label().to_string(),
                entries: self
                    .state
                    .list_by_category(category)
                    .iter()
                    .map(|descriptor| PaletteEntry {
                        id: descriptor.id.clone(),
                        name: descriptor.display_name.clone(),
                        icon: descriptor.icon.clone(),
                        description: descriptor.description.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

impl MediatorQuery for MediatorCatalog {
    fn lookup(&self, id: &str) -> Result<Arc<MediatorDescriptor>, RegistryError> {
        MediatorCatalog::lookup(self, id)
    }

    fn list_by_category(&self, category: Category) -> Vec<Arc<MediatorDescriptor>> {
        MediatorCatalog::list_by_category(self, category)
    }

    fn list_all(&self) -> Vec<Arc<MediatorDescriptor>> {
        MediatorCatalog::list_all(self)
    }

    fn contains(&self, id: &str) -> bool {
        MediatorCatalog::contains(self, id)
    }
}
