//! Dispatcher: the recursion target for every schema node
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use crate::document::Document;
use crate::validation::array::validate_array;
use crate::validation::base::ValidationContext;
use crate::validation::error::{ErrorKind, ValidationResult};
use crate::validation::keywords::SchemaType;
use crate::validation::numeric::{validate_integer, validate_number};
use crate::validation::object::validate_object;
use crate::validation::scalar::{validate_boolean, validate_null};
use crate::validation::string::validate_string;
use tracing::trace;

/// Validate a schema node of any declared type.
///
/// Fails with [`ErrorKind::TooDeep`] past the configured depth,
/// [`ErrorKind::NotAnObject`] if `schema` is not a mapping and
/// [`ErrorKind::InvalidType`] if `type` is missing or unrecognised. Otherwise
/// the node is handed to the validator for its type.
pub fn validate_schema(schema: &Document, context: &ValidationContext) -> ValidationResult<()> {
    if context.depth > context.config.max_depth {
        return Err(context.violation(
            ErrorKind::TooDeep,
            format!("Schema nesting exceeds the maximum depth of {}", context.config.max_depth),
            "max_depth",
            format!("at most {} nested schemas", context.config.max_depth),
            context.depth.to_string(),
        ));
    }

    let Some(mapping) = schema.as_mapping() else {
        return Err(context.violation(
            ErrorKind::NotAnObject,
            format!("Expected a schema object, found {}", schema.kind()),
            "schema",
            "object",
            schema.kind(),
        ));
    };

    let Some(type_value) = mapping.get("type") else {
        return Err(context.violation(
            ErrorKind::InvalidType,
            "Missing 'type' keyword",
            "type",
            "'type' keyword to be present",
            "keyword is missing",
        ));
    };

    let ty = SchemaType::resolve(type_value, context)?;
    trace!(path = %context.path, depth = context.depth, schema_type = %ty, "dispatching schema node");

    match ty {
        SchemaType::Object => validate_object(mapping, context),
        SchemaType::Array => validate_array(mapping, context),
        SchemaType::String => validate_string(mapping, context),
        SchemaType::Number => validate_number(mapping, context),
        SchemaType::Integer => validate_integer(mapping, context),
        SchemaType::Boolean => validate_boolean(mapping, context),
        SchemaType::Null => validate_null(mapping, context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationConfig;
    use serde_json::json;

    fn check(value: serde_json::Value) -> ValidationResult<()> {
        validate_schema(&Document::from(value), &ValidationContext::new(ValidationConfig::default()))
    }

    #[test]
    fn test_routes_every_type() {
        for ty in SchemaType::ALL {
            assert!(check(json!({"type": ty.as_str()})).is_ok(), "type {} should be accepted", ty);
        }
    }

    #[test]
    fn test_non_mapping_is_rejected() {
        for value in [json!([]), json!("object"), json!(1), json!(null), json!(true)] {
            let error = check(value).unwrap_err();
            assert_eq!(error.kind, ErrorKind::NotAnObject);
        }
    }

    #[test]
    fn test_missing_type() {
        let error = check(json!({"title": "untyped"})).unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidType);
        assert_eq!(error.message, "Missing 'type' keyword");
    }

    #[test]
    fn test_depth_limit() {
        let config = ValidationConfig::default().with_max_depth(2);
        let context = ValidationContext::new(config);

        let ok = Document::from(json!({"type": "array", "items": {"type": "array", "items": {"type": "string"}}}));
        assert!(validate_schema(&ok, &context).is_ok());

        let deep = Document::from(json!({
            "type": "array",
            "items": {"type": "array", "items": {"type": "array", "items": {"type": "string"}}}
        }));
        let error = validate_schema(&deep, &context).unwrap_err();
        assert_eq!(error.kind, ErrorKind::TooDeep);
        assert_eq!(error.path, "$.items.items.items");
    }
}
