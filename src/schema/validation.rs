use serde_json::Value;

use super::error::SchemaError;
use super::schema::{Schema, SchemaKind};

fn mismatch(message: impl Into<String>, path: &[String]) -> SchemaError {
    SchemaError::Validation {
        message: message.into(),
        path: path.to_vec(),
    }
}

/// 验证值是否符合 Schema，`path` 记录出错位置
pub fn validate_value(
    schema: &Schema,
    value: &Value,
    path: &mut Vec<String>,
) -> Result<(), SchemaError> {
    match &schema.kind {
        SchemaKind::Boolean if !value.is_boolean() => Err(mismatch("expected boolean", path)),
        SchemaKind::Integer if !(value.is_i64() || value.is_u64()) => {
            Err(mismatch("expected integer", path))
        }
        SchemaKind::Number if !value.is_number() => Err(mismatch("expected number", path)),
        SchemaKind::String if !value.is_string() => Err(mismatch("expected string", path)),
        SchemaKind::Enum { values } => {
            let matched = value
                .as_str()
                .is_some_and(|candidate| values.iter().any(|allowed| allowed == candidate));
            if matched {
                Ok(())
            } else {
                Err(mismatch(
                    format!("expected one of [{}]", values.join(", ")),
                    path,
                ))
            }
        }
        SchemaKind::Object {
            properties,
            required,
            additional,
        } => {
            let object = value
                .as_object()
                .ok_or_else(|| mismatch("expected object", path))?;

            if let Some(missing) = required.iter().find(|key| !object.contains_key(*key)) {
                let mut missing_path = path.clone();
                missing_path.push(missing.clone());
                return Err(mismatch(
                    format!("missing required property `{missing}`"),
                    &missing_path,
                ));
            }

            for (key, val) in object {
                path.push(key.clone());
                match properties.get(key) {
                    Some(sub_schema) => validate_value(sub_schema, val, path)?,
                    None if !additional => {
                        return Err(mismatch(format!("unexpected property `{key}`"), path));
                    }
                    None => {}
                }
                path.pop();
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
