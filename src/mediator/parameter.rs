use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 参数值类型
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterKind {
    String,
    Integer,
    Number,
    Boolean,
    /// 运行时求值的表达式（XPath、JSONPath 等），设计期按字符串处理
    Expression,
    Enum { options: Vec<String> },
}

impl ParameterKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterKind::String => "string",
            ParameterKind::Integer => "integer",
            ParameterKind::Number => "number",
            ParameterKind::Boolean => "boolean",
            ParameterKind::Expression => "expression",
            ParameterKind::Enum { .. } => "enum",
        }
    }

    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ParameterKind::String | ParameterKind::Expression => value.is_string(),
            ParameterKind::Integer => value.is_i64() || value.is_u64(),
            ParameterKind::Number => value.is_number(),
            ParameterKind::Boolean => value.is_boolean(),
            ParameterKind::Enum { options } => value
                .as_str()
                .map(|candidate| options.iter().any(|option| option == candidate))
                .unwrap_or(false),
        }
    }

    fn default_hint(&self) -> UiHint {
        match self {
            ParameterKind::String => UiHint::Text,
            ParameterKind::Integer | ParameterKind::Number => UiHint::Number,
            ParameterKind::Boolean => UiHint::Checkbox,
            ParameterKind::Expression => UiHint::Code,
            ParameterKind::Enum { .. } => UiHint::Dropdown,
        }
    }
}

/// 属性表单控件提示，具体控件由表单生成器决定
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiHint {
    Text,
    TextArea,
    Dropdown,
    Checkbox,
    Number,
    Code,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(flatten)]
    pub kind: ParameterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, rename = "uiHint", alias = "ui_hint", skip_serializing_if = "Option::is_none")]
    pub ui_hint: Option<UiHint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            required: false,
            ui_hint: None,
            label: None,
            description: None,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::String)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Integer)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Boolean)
    }

    pub fn expression(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Expression)
    }

    pub fn one_of<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            ParameterKind::Enum {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_ui_hint(mut self, hint: UiHint) -> Self {
        self.ui_hint = Some(hint);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 表单显示用标签，未设置时回退到参数名
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// 显式提示优先，否则按类型推导
    pub fn effective_ui_hint(&self) -> UiHint {
        self.ui_hint.unwrap_or_else(|| self.kind.default_hint())
    }
}
