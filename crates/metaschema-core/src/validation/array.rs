//! Validator for `type: "array"` schema nodes
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use crate::document::{Document, Mapping};
use crate::validation::base::{ValidationContext, ValidationHelpers};
use crate::validation::dispatch::validate_schema;
use crate::validation::error::{ErrorKind, ValidationResult};
use crate::validation::keywords::{assert_declared_type, guard, SchemaType};

/// Validate an array schema node and every sub-schema it owns.
///
/// # Panics
///
/// Panics if the node declares a `type` other than `"array"`.
pub fn validate_array(schema: &Mapping, context: &ValidationContext) -> ValidationResult<()> {
    guard(schema, SchemaType::Array, context)?;

    for (keyword, value) in schema.iter() {
        match keyword {
            "contains" | "items" => {
                ValidationHelpers::expect_schema(value, keyword, &context.child(keyword))?;
                validate_schema(value, &context.subschema(keyword))?;
            }
            "maxContains" | "maxItems" | "minContains" | "minItems" => {
                ValidationHelpers::expect_count(value, keyword, &context.child(keyword))?;
            }
            "prefixItems" => prefix_items(value, context)?,
            "uniqueItems" => {
                ValidationHelpers::expect_bool(value, keyword, &context.child(keyword))?;
            }
            "type" => assert_declared_type(value, SchemaType::Array),
            _ => {}
        }
    }

    Ok(())
}

fn prefix_items(value: &Document, context: &ValidationContext) -> ValidationResult<()> {
    let context = context.child("prefixItems");
    let schemas = value.as_sequence().ok_or_else(|| {
        context.violation(
            ErrorKind::InvalidValue,
            "prefixItems must be a list of schemas",
            "prefixItems",
            "array of schemas",
            value.kind(),
        )
    })?;

    for (index, schema) in schemas.iter().enumerate() {
        validate_schema(schema, &context.subschema_index(index))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationConfig;
    use serde_json::json;

    fn check(value: serde_json::Value) -> ValidationResult<()> {
        let document = Document::from(value);
        validate_array(document.as_mapping().unwrap(), &ValidationContext::new(ValidationConfig::default()))
    }

    #[test]
    fn test_valid_keywords() {
        assert!(check(json!({"type": "array"})).is_ok());
        assert!(check(json!({"type": "array", "items": {"type": "string"}})).is_ok());
        assert!(check(json!({"type": "array", "contains": {"type": "integer"}, "minContains": 1, "maxContains": 3})).is_ok());
        assert!(check(json!({"type": "array", "minItems": 1, "maxItems": 10, "uniqueItems": true})).is_ok());
        assert!(check(json!({"type": "array", "prefixItems": [{"type": "string"}, {"type": "null"}]})).is_ok());
    }

    #[test]
    fn test_invalid_keywords() {
        assert!(check(json!({"type": "array", "items": true})).is_err());
        assert!(check(json!({"type": "array", "items": [{"type": "string"}]})).is_err());
        assert!(check(json!({"type": "array", "contains": "integer"})).is_err());
        assert!(check(json!({"type": "array", "minItems": 0})).is_err());
        assert!(check(json!({"type": "array", "maxContains": 2.5})).is_err());
        assert!(check(json!({"type": "array", "uniqueItems": "yes"})).is_err());
        assert!(check(json!({"type": "array", "prefixItems": {"type": "string"}})).is_err());
        assert!(check(json!({"type": "array", "additionalItems": false})).is_err());
    }

    #[test]
    fn test_prefix_items_error_path() {
        let error = check(json!({"type": "array", "prefixItems": [{"type": "string"}, {"type": "string", "minimum": 1}]}))
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::UnknownKeyword);
        assert_eq!(error.path, "$.prefixItems[1]");
    }

    #[test]
    fn test_items_must_be_a_schema() {
        let error = check(json!({"type": "array", "items": 5})).unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidValue);
        assert_eq!(error.message, "items must be a schema");
        assert_eq!(error.path, "$.items");
    }

    #[test]
    #[should_panic(expected = "'type' must be 'array'")]
    fn test_invalid_type() {
        let _ = check(json!({"type": "object"}));
    }
}
