use std::collections::HashMap;
use std::sync::Arc;

use crate::mediator::{Category, MediatorDescriptor};

/// 按分类分组的只读视图，随注册增量维护
#[derive(Clone, Debug, Default)]
pub struct CategoryIndex {
    buckets: HashMap<Category, Vec<Arc<MediatorDescriptor>>>,
    order: Vec<Category>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptors<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = Arc<MediatorDescriptor>>,
    {
        let mut index = Self::new();
        for descriptor in descriptors {
            index.insert(descriptor);
        }
        index
    }

    pub fn insert(&mut self, descriptor: Arc<MediatorDescriptor>) {
        let category = descriptor.category;
        let bucket = self.buckets.entry(category).or_default();
        if bucket.is_empty() {
            self.order.push(category);
        }
        bucket.push(descriptor);
    }

    pub fn get(&self, category: Category) -> &[Arc<MediatorDescriptor>] {
        self.buckets
            .get(&category)
            .map(|bucket| bucket.as_slice())
            .unwrap_or(&[])
    }

    /// 非空分类，按首次出现顺序
    pub fn categories(&self) -> &[Category] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
