use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::registry::RegistryError;
use crate::schema::{Schema, SchemaError, SchemaKind, validate_value};

use super::category::Category;
use super::parameter::{Parameter, ParameterKind};

/// 一种 mediator 的元数据（不是画布上的实例）
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediatorDescriptor {
    pub id: String,
    #[serde(rename = "name", alias = "displayName")]
    pub display_name: String,
    pub icon: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MediatorDescriptor {
    pub fn builder(
        id: impl Into<String>,
        display_name: impl Into<String>,
        category: Category,
    ) -> DescriptorBuilder {
        DescriptorBuilder::new(id, display_name, category)
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|parameter| parameter.name == name)
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        super::validation::validate_descriptor(self)
    }

    /// 由参数列表生成属性对象的 Schema
    pub fn parameter_schema(&self) -> Schema {
        let properties: HashMap<String, Schema> = self
            .parameters
            .iter()
            .map(|parameter| (parameter.name.clone(), parameter_value_schema(parameter)))
            .collect();
        let required = self
            .parameters
            .iter()
            .filter(|parameter| parameter.required)
            .map(|parameter| parameter.name.clone())
            .collect();

        Schema::closed_object(properties, required)
            .with_name(self.id.clone())
            .with_description(self.display_name.clone())
    }

    /// 校验某个节点实例的属性
    pub fn validate_properties(&self, properties: &Map<String, Value>) -> Result<(), SchemaError> {
        let value = Value::Object(properties.clone());
        validate_value(&self.parameter_schema(), &value, &mut Vec::new())
    }
}

fn parameter_value_schema(parameter: &Parameter) -> Schema {
    let kind = match &parameter.kind {
        ParameterKind::String | ParameterKind::Expression => SchemaKind::String,
        ParameterKind::Integer => SchemaKind::Integer,
        ParameterKind::Number => SchemaKind::Number,
        ParameterKind::Boolean => SchemaKind::Boolean,
        ParameterKind::Enum { options } => SchemaKind::Enum {
            values: options.clone(),
        },
    };
    let schema = Schema::new(kind)
        .with_name(parameter.name.clone())
        .with_default(parameter.default.clone());
    match &parameter.description {
        Some(description) => schema.with_description(description.clone()),
        None => schema,
    }
}

#[derive(Clone, Debug)]
pub struct DescriptorBuilder {
    descriptor: MediatorDescriptor,
}

impl DescriptorBuilder {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, category: Category) -> Self {
        let id = id.into();
        Self {
            descriptor: MediatorDescriptor {
                icon: format!("images/{id}.gif"),
                id,
                display_name: display_name.into(),
                parameters: Vec::new(),
                category,
                description: None,
            },
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.descriptor.icon = icon.into();
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.descriptor.parameters.push(parameter);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.descriptor.description = Some(description.into());
        self
    }

    pub fn build(self) -> MediatorDescriptor {
        self.descriptor
    }
}

/// 清单文件里的描述符形态，`category` 保持原始字符串，注册前再解析
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DescriptorSpec {
    pub id: String,
    #[serde(rename = "name", alias = "displayName")]
    pub display_name: String,
    pub icon: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TryFrom<DescriptorSpec> for MediatorDescriptor {
    type Error = RegistryError;

    fn try_from(spec: DescriptorSpec) -> Result<Self, Self::Error> {
        let category = spec
            .category
            .parse::<Category>()
            .map_err(|err| RegistryError::invalid(&spec.id, err.to_string()))?;
        Ok(MediatorDescriptor {
            id: spec.id,
            display_name: spec.display_name,
            icon: spec.icon,
            parameters: spec.parameters,
            category,
            description: spec.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn log_mediator() -> MediatorDescriptor {
        MediatorDescriptor::builder("LogMediator", "Log Mediator", Category::Manipulator)
            .parameter(
                Parameter::one_of("level", ["full", "simple", "headers", "custom"])
                    .with_default("simple"),
            )
            .parameter(Parameter::string("message").required())
            .build()
    }

    #[test]
    fn builder_derives_icon_from_id() {
        let descriptor = log_mediator();
        assert_eq!(descriptor.icon, "images/LogMediator.gif");
        assert_eq!(descriptor.parameters.len(), 2);
    }

    #[test]
    fn spec_with_unknown_category_is_invalid() {
        let spec = DescriptorSpec {
            id: "RouterMediator".to_string(),
            display_name: "Router".to_string(),
            icon: "images/RouterMediator.gif".to_string(),
            parameters: Vec::new(),
            category: "router".to_string(),
            description: None,
        };
        let err = MediatorDescriptor::try_from(spec).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDescriptor { ref id, .. } if id == "RouterMediator"));
    }

    #[test]
    fn properties_validate_against_parameters() {
        let descriptor = log_mediator();

        let ok = json!({ "level": "full", "message": "hello" });
        assert!(descriptor.validate_properties(ok.as_object().unwrap()).is_ok());

        let missing = json!({ "level": "full" });
        assert!(descriptor.validate_properties(missing.as_object().unwrap()).is_err());

        let bad_option = json!({ "level": "verbose", "message": "hello" });
        let err = descriptor
            .validate_properties(bad_option.as_object().unwrap())
            .unwrap_err();
        match err {
            SchemaError::Validation { path, .. } => assert_eq!(path, vec!["level".to_string()]),
        }

        let unknown = json!({ "message": "hello", "colour": "red" });
        assert!(descriptor.validate_properties(unknown.as_object().unwrap()).is_err());
    }

    #[test]
    fn decodes_original_wire_shape() {
        let descriptor: MediatorDescriptor = serde_json::from_value(json!({
            "id": "TryBlockMediator",
            "name": "TryBlock Mediator",
            "icon": "images/TryBlockMediator.gif",
            "parameters": [],
            "category": "flow-controller"
        }))
        .expect("decode");
        assert_eq!(descriptor.display_name, "TryBlock Mediator");
        assert_eq!(descriptor.category, Category::FlowController);
    }
}
