//! 内置 mediator 模块，按分类组织

pub mod endpoints;
pub mod filters;
pub mod flow_controllers;
pub mod manipulators;

use crate::mediator::MediatorDescriptor;
use crate::registry::{Declaration, MediatorModule};

/// 一组编译期内置的描述符
pub struct BuiltinModule {
    name: &'static str,
    descriptors: fn() -> Vec<MediatorDescriptor>,
}

impl BuiltinModule {
    pub const fn new(name: &'static str, descriptors: fn() -> Vec<MediatorDescriptor>) -> Self {
        Self { name, descriptors }
    }
}

impl MediatorModule for BuiltinModule {
    fn name(&self) -> &str {
        self.name
    }

    fn declare(&self) -> Vec<Declaration> {
        (self.descriptors)().into_iter().map(Ok).collect()
    }
}

/// 全部内置模块，顺序即 palette 的默认顺序
pub fn modules() -> Vec<BuiltinModule> {
    vec![
        BuiltinModule::new("builtin.flow-controllers", flow_controllers::descriptors),
        BuiltinModule::new("builtin.manipulators", manipulators::descriptors),
        BuiltinModule::new("builtin.filters", filters::descriptors),
        BuiltinModule::new("builtin.endpoints", endpoints::descriptors),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_descriptors_are_valid_and_unique() {
        let mut ids = HashSet::new();
        for module in modules() {
            for declaration in module.declare() {
                let descriptor = declaration.expect("builtin declarations are infallible");
                descriptor.validate().expect("builtin descriptor should validate");
                assert!(ids.insert(descriptor.id.clone()), "duplicate id {}", descriptor.id);
            }
        }
        assert!(ids.contains("TryBlockMediator"));
    }
}
