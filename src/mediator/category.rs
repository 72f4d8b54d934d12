use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mediator 分类，用于 palette 分组
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    FlowController,
    Transformer,
    Filter,
    Manipulator,
    Endpoint,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::FlowController,
        Category::Transformer,
        Category::Filter,
        Category::Manipulator,
        Category::Endpoint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FlowController => "flow-controller",
            Category::Transformer => "transformer",
            Category::Filter => "filter",
            Category::Manipulator => "manipulator",
            Category::Endpoint => "endpoint",
        }
    }

    /// Palette 分组标题
    pub fn label(&self) -> &'static str {
        match self {
            Category::FlowController => "Flow Controllers",
            Category::Transformer => "Transformers",
            Category::Filter => "Filters",
            Category::Manipulator => "Manipulators",
            Category::Endpoint => "Endpoints",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kebab_and_snake_case() {
        assert_eq!("flow-controller".parse::<Category>(), Ok(Category::FlowController));
        assert_eq!("flow_controller".parse::<Category>(), Ok(Category::FlowController));
        assert_eq!(" Endpoint ".parse::<Category>(), Ok(Category::Endpoint));
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "router".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("router".to_string()));
    }

    #[test]
    fn display_matches_serde_tag() {
        for category in Category::ALL {
            let encoded = serde_json::to_value(category).expect("serialize");
            assert_eq!(encoded, serde_json::json!(category.to_string()));
        }
    }
}
