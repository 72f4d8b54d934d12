use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::FlowError;

/// 持久化的流程文档
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<FlowNode>,
}

/// 流程中放置的一个 mediator 实例
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    /// 序列化标签，即 mediator 描述符的 ID
    pub mediator: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
    /// 流程控制类节点（如 try 块）内嵌的子节点
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FlowNode>,
}

impl FlowDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn with_node(mut self, node: FlowNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn from_json(content: &str) -> Result<Self, FlowError> {
        serde_json::from_str(content).map_err(|err| FlowError::Parse(err.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, FlowError> {
        serde_json::to_string_pretty(self).map_err(|err| FlowError::Serialize(err.to_string()))
    }

    /// 深度优先统计全部节点
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[FlowNode]) -> usize {
            nodes.iter().map(|node| 1 + count(&node.children)).sum()
        }
        count(&self.nodes)
    }
}

impl FlowNode {
    pub fn new(id: impl Into<String>, mediator: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mediator: mediator.into(),
            properties: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: FlowNode) -> Self {
        self.children.push(child);
        self
    }
}
