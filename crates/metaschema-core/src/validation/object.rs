//! Validator for `type: "object"` schema nodes
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use crate::document::{Document, Mapping};
use crate::validation::base::{ValidationContext, ValidationHelpers};
use crate::validation::dispatch::validate_schema;
use crate::validation::error::{ErrorKind, ValidationError, ValidationResult};
use crate::validation::keywords::{assert_declared_type, guard, SchemaType};
use crate::validation::pattern::check_pattern;
use tracing::trace;

/// Validate an object schema node and every sub-schema it owns.
///
/// # Panics
///
/// Panics if the node declares a `type` other than `"object"`.
pub fn validate_object(schema: &Mapping, context: &ValidationContext) -> ValidationResult<()> {
    guard(schema, SchemaType::Object, context)?;

    for (keyword, value) in schema.iter() {
        match keyword {
            "additionalProperties" => additional_properties(value, context)?,
            "properties" => properties(value, context)?,
            "patternProperties" => pattern_properties(value, context)?,
            "propertyNames" => property_names(value, context)?,
            "maxProperties" | "minProperties" => {
                ValidationHelpers::expect_count(value, keyword, &context.child(keyword))?;
            }
            "required" => required(value, context)?,
            "type" => assert_declared_type(value, SchemaType::Object),
            _ => {}
        }
    }

    Ok(())
}

fn additional_properties(value: &Document, context: &ValidationContext) -> ValidationResult<()> {
    match value {
        Document::Bool(_) => Ok(()),
        Document::Mapping(_) => validate_schema(value, &context.subschema("additionalProperties")),
        other => Err(context.child("additionalProperties").violation(
            ErrorKind::InvalidValue,
            "additionalProperties must be a boolean or a schema",
            "additionalProperties",
            "boolean or schema",
            other.kind(),
        )),
    }
}

fn properties(value: &Document, context: &ValidationContext) -> ValidationResult<()> {
    let context = context.child("properties");
    let properties = value.as_mapping().ok_or_else(|| {
        context.violation(
            ErrorKind::InvalidValue,
            "properties must be a mapping of property names to schemas",
            "properties",
            "object",
            value.kind(),
        )
    })?;

    for (name, schema) in properties.iter() {
        trace!(path = %context.path, property = name, "validating property schema");
        validate_schema(schema, &context.subschema(name))?;
    }

    Ok(())
}

fn pattern_properties(value: &Document, context: &ValidationContext) -> ValidationResult<()> {
    let context = context.child("patternProperties");
    let patterns = value.as_mapping().ok_or_else(|| {
        context.violation(
            ErrorKind::InvalidValue,
            "patternProperties must be a mapping of property name patterns to schemas",
            "patternProperties",
            "object",
            value.kind(),
        )
    })?;

    for (pattern, schema) in patterns.iter() {
        check_pattern(pattern, "patternProperties", &context)?;
        validate_schema(schema, &context.subschema(pattern))?;
    }

    Ok(())
}

fn property_names(value: &Document, context: &ValidationContext) -> ValidationResult<()> {
    let context = context.subschema("propertyNames");
    let Some(schema) = value.as_mapping() else {
        return Err(property_names_error(value, &context));
    };

    match schema.get("type") {
        Some(Document::String(ty)) if ty == "string" => validate_schema(value, &context),
        Some(_) => Err(property_names_error(value, &context)),
        None => {
            // "type": "string" is implied
            let mut implied = schema.clone();
            implied.insert("type", Document::String("string".to_string()));
            validate_schema(&Document::Mapping(implied), &context)
        }
    }
}

fn property_names_error(value: &Document, context: &ValidationContext) -> ValidationError {
    context.violation(
        ErrorKind::InvalidValue,
        "propertyNames must be a schema with type string",
        "propertyNames",
        "schema with type string",
        value.to_string(),
    )
}

fn required(value: &Document, context: &ValidationContext) -> ValidationResult<()> {
    let names = value.as_sequence();
    let all_strings = names.is_some_and(|names| names.iter().all(|name| name.as_str().is_some()));
    if all_strings {
        return Ok(());
    }

    Err(context.child("required").violation(
        ErrorKind::InvalidValue,
        "required must be a list of property names",
        "required",
        "array of strings",
        value.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationConfig;
    use serde_json::json;

    fn check(value: serde_json::Value) -> ValidationResult<()> {
        let mut schema = Mapping::new();
        schema.insert("type", Document::String("object".into()));
        if let Document::Mapping(extra) = Document::from(value) {
            for (k, v) in extra.iter() {
                schema.insert(k, v.clone());
            }
        }
        validate_object(&schema, &ValidationContext::new(ValidationConfig::default()))
    }

    #[test]
    fn test_valid_keywords() {
        let cases = [
            json!({"additionalProperties": true}),
            json!({"additionalProperties": {"type": "string"}}),
            json!({"patternProperties": {"^S_": {"type": "string"}}}),
            json!({"propertyNames": {"type": "string", "enum": ["a", "b"]}}),
            json!({"propertyNames": {"enum": ["a", "b"]}}),
            json!({"maxProperties": 999}),
            json!({"minProperties": 1}),
            json!({"required": ["foo"]}),
            json!({"required": []}),
            json!({"properties": {"name": {"type": "string"}, "age": {"type": "integer"}}}),
        ];
        for case in cases {
            assert!(check(case.clone()).is_ok(), "expected {} to be valid", case);
        }
    }

    #[test]
    fn test_invalid_keywords() {
        let cases = [
            json!({"additionalProperties": 123}),
            json!({"patternProperties": "a string"}),
            json!({"patternProperties": {"\\z": {"type": "string"}}}),
            json!({"patternProperties": {"^S_": "a string"}}),
            json!({"propertyNames": {"type": "boolean"}}),
            json!({"propertyNames": {"type": 7}}),
            json!({"propertyNames": true}),
            json!({"maxProperties": "999"}),
            json!({"maxProperties": -1}),
            json!({"maxProperties": 0}),
            json!({"minProperties": "1"}),
            json!({"minProperties": -1}),
            json!({"required": "foo"}),
            json!({"required": ["foo", 1]}),
            json!({"properties": ["name"]}),
        ];
        for case in cases {
            assert!(check(case.clone()).is_err(), "expected {} to be invalid", case);
        }
    }

    #[test]
    fn test_implied_property_names_type_is_a_string_schema() {
        // maxLength is a string keyword, so the injected type must be honoured
        assert!(check(json!({"propertyNames": {"maxLength": 8}})).is_ok());

        let error = check(json!({"propertyNames": {"minimum": 1}})).unwrap_err();
        assert_eq!(error.kind, ErrorKind::UnknownKeyword);
        assert_eq!(error.path, "$.propertyNames");
    }

    #[test]
    fn test_error_paths_point_at_nested_node() {
        let error = check(json!({"properties": {"address": {"type": "object", "properties": {"zip": {"type": "strin"}}}}}))
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidType);
        assert_eq!(error.path, "$.properties.address.properties.zip.type");
    }

    #[test]
    #[should_panic(expected = "'type' must be 'object'")]
    fn test_invalid_type() {
        let schema = Document::from(json!({"type": "string"}));
        let _ = validate_object(schema.as_mapping().unwrap(), &ValidationContext::new(ValidationConfig::default()));
    }
}
