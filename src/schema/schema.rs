use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 属性值的 Schema 类型
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaKind {
    Boolean,
    Integer,
    Number,
    String,
    Enum {
        values: Vec<String>,
    },
    Object {
        properties: HashMap<String, Schema>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        required: Vec<String>,
        #[serde(default = "Schema::allow_additional")]
        additional: bool,
    },
}

/// 导出给表单生成器和序列化层的 Schema
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: SchemaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Schema {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            name: None,
            kind,
            description: None,
            default: None,
        }
    }

    /// 不允许额外属性的对象 Schema
    pub fn closed_object(properties: HashMap<String, Schema>, required: Vec<String>) -> Self {
        Self::new(SchemaKind::Object {
            properties,
            required,
            additional: false,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: Option<Value>) -> Self {
        self.default = default;
        self
    }

    fn allow_additional() -> bool {
        true
    }
}
