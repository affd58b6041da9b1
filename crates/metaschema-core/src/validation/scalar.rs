//! Validators for `type: "boolean"` and `type: "null"` schema nodes.
//! Neither type has keywords of its own.
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use crate::document::Mapping;
use crate::validation::base::ValidationContext;
use crate::validation::error::ValidationResult;
use crate::validation::keywords::{assert_declared_type, guard, SchemaType};

/// # Panics
///
/// Panics if the node declares a `type` other than `"boolean"`.
pub fn validate_boolean(schema: &Mapping, context: &ValidationContext) -> ValidationResult<()> {
    validate_type_only(schema, SchemaType::Boolean, context)
}

/// # Panics
///
/// Panics if the node declares a `type` other than `"null"`.
pub fn validate_null(schema: &Mapping, context: &ValidationContext) -> ValidationResult<()> {
    validate_type_only(schema, SchemaType::Null, context)
}

fn validate_type_only(schema: &Mapping, ty: SchemaType, context: &ValidationContext) -> ValidationResult<()> {
    guard(schema, ty, context)?;
    if let Some(value) = schema.get("type") {
        assert_declared_type(value, ty);
    }
    Ok(())
}
