use std::collections::HashSet;

use crate::registry::RegistryError;

use super::descriptor::MediatorDescriptor;
use super::parameter::{Parameter, ParameterKind};

/// 校验 mediator ID：非空，且只包含字母、数字、下划线、点和短横线
pub fn validate_mediator_id(id: &str) -> Result<(), RegistryError> {
    if id.trim().is_empty() {
        return Err(RegistryError::invalid(id, "mediator id must not be empty"));
    }

    if let Some(bad) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
    {
        return Err(RegistryError::invalid(
            id,
            format!("mediator id contains invalid character `{bad}`"),
        ));
    }

    Ok(())
}

/// 注册前的描述符校验
pub fn validate_descriptor(descriptor: &MediatorDescriptor) -> Result<(), RegistryError> {
    validate_mediator_id(&descriptor.id)?;

    if descriptor.display_name.trim().is_empty() {
        return Err(RegistryError::invalid(
            &descriptor.id,
            "display name must not be empty",
        ));
    }

    let mut seen = HashSet::new();
    for parameter in &descriptor.parameters {
        if parameter.name.trim().is_empty() {
            return Err(RegistryError::invalid(
                &descriptor.id,
                "parameter name must not be empty",
            ));
        }
        if !seen.insert(parameter.name.as_str()) {
            return Err(RegistryError::invalid(
                &descriptor.id,
                format!("duplicate parameter `{}`", parameter.name),
            ));
        }
        validate_parameter(parameter).map_err(|reason| {
            RegistryError::invalid(
                &descriptor.id,
                format!("parameter `{}`: {reason}", parameter.name),
            )
        })?;
    }

    Ok(())
}

fn validate_parameter(parameter: &Parameter) -> Result<(), String> {
    if let ParameterKind::Enum { options } = &parameter.kind {
        if options.is_empty() {
            return Err("enum parameter needs at least one option".to_string());
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = options.iter().find(|option| !seen.insert(option.as_str())) {
            return Err(format!("duplicate option `{duplicate}`"));
        }
    }

    if let Some(default) = &parameter.default {
        if !parameter.kind.accepts(default) {
            return Err(format!(
                "default value {default} does not match type `{}`",
                parameter.kind.type_name()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mediator::Category;

    fn descriptor_with(parameters: Vec<Parameter>) -> MediatorDescriptor {
        let mut descriptor =
            MediatorDescriptor::builder("CallMediator", "Call Mediator", Category::Endpoint).build();
        descriptor.parameters = parameters;
        descriptor
    }

    #[test]
    fn test_validate_mediator_id() {
        assert!(validate_mediator_id("").is_err());
        assert!(validate_mediator_id("   ").is_err());
        assert!(validate_mediator_id("TryBlockMediator").is_ok());
        assert!(validate_mediator_id("acme.http-call_v2").is_ok());
        assert!(validate_mediator_id("Try Block").is_err());
        assert!(validate_mediator_id("try@block").is_err());
    }

    #[test]
    fn rejects_duplicate_parameter_names() {
        let descriptor = descriptor_with(vec![
            Parameter::integer("timeout"),
            Parameter::integer("timeout"),
        ]);
        let err = validate_descriptor(&descriptor).unwrap_err();
        assert!(err.to_string().contains("duplicate parameter `timeout`"));
    }

    #[test]
    fn rejects_mismatched_default() {
        let descriptor = descriptor_with(vec![Parameter::integer("timeout").with_default("soon")]);
        assert!(validate_descriptor(&descriptor).is_err());
    }

    #[test]
    fn rejects_empty_enum() {
        let options: Vec<String> = Vec::new();
        let descriptor = descriptor_with(vec![Parameter::one_of("method", options)]);
        assert!(validate_descriptor(&descriptor).is_err());
    }

    #[test]
    fn rejects_duplicate_enum_options() {
        let descriptor = descriptor_with(vec![Parameter::one_of("method", ["GET", "POST", "GET"])]);
        let err = validate_descriptor(&descriptor).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDescriptor { ref id, .. } if id == "CallMediator"));
        assert!(err.to_string().contains("duplicate option `GET`"));
    }

    #[test]
    fn rejects_blank_display_name() {
        let mut descriptor = descriptor_with(Vec::new());
        descriptor.display_name = " ".to_string();
        assert!(validate_descriptor(&descriptor).is_err());
    }

    #[test]
    fn accepts_well_formed_descriptor() {
        let descriptor = descriptor_with(vec![
            Parameter::string("uri").required(),
            Parameter::one_of("method", ["GET", "POST"]).with_default("GET"),
            Parameter::integer("timeout").with_default(30),
        ]);
        assert!(validate_descriptor(&descriptor).is_ok());
    }
}
