use crate::mediator::{Category, MediatorDescriptor};

/// try/catch 形式的流程控制节点，无可配置参数
pub fn try_block() -> MediatorDescriptor {
    MediatorDescriptor::builder("TryBlockMediator", "TryBlock Mediator", Category::FlowController)
        .icon("images/TryBlockMediator.gif")
        .build()
}

pub fn descriptors() -> Vec<MediatorDescriptor> {
    vec![try_block()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_block_matches_published_metadata() {
        let descriptor = try_block();
        assert_eq!(descriptor.id, "TryBlockMediator");
        assert_eq!(descriptor.display_name, "TryBlock Mediator");
        assert_eq!(descriptor.icon, "images/TryBlockMediator.gif");
        assert!(descriptor.parameters.is_empty());
        assert_eq!(descriptor.category, Category::FlowController);
    }
}
