//! Validators for `type: "number"` and `type: "integer"` schema nodes
//!
//! Both types share one keyword set. Bounds are integers unless
//! `ValidationConfig::allow_fractional_bounds` is set.
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use crate::document::{Document, Mapping};
use crate::validation::base::{ValidationContext, ValidationHelpers};
use crate::validation::error::{ErrorKind, ValidationResult};
use crate::validation::keywords::{assert_declared_type, guard, SchemaType};

/// Validate a number schema node.
///
/// # Panics
///
/// Panics if the node declares a `type` other than `"number"`.
pub fn validate_number(schema: &Mapping, context: &ValidationContext) -> ValidationResult<()> {
    validate_numeric(schema, SchemaType::Number, context)
}

/// Validate an integer schema node.
///
/// # Panics
///
/// Panics if the node declares a `type` other than `"integer"`.
pub fn validate_integer(schema: &Mapping, context: &ValidationContext) -> ValidationResult<()> {
    validate_numeric(schema, SchemaType::Integer, context)
}

fn validate_numeric(schema: &Mapping, ty: SchemaType, context: &ValidationContext) -> ValidationResult<()> {
    guard(schema, ty, context)?;

    for (keyword, value) in schema.iter() {
        let keyword_context = context.child(keyword);
        match keyword {
            "exclusiveMaximum" | "exclusiveMinimum" | "maximum" | "minimum" => {
                ValidationHelpers::expect_bound(value, keyword, &keyword_context)?;
            }
            "multipleOf" => multiple_of(value, &keyword_context)?,
            "type" => assert_declared_type(value, ty),
            _ => {}
        }
    }

    Ok(())
}

fn multiple_of(value: &Document, context: &ValidationContext) -> ValidationResult<()> {
    let fractional = context.config.allow_fractional_bounds;
    let positive = match value {
        Document::Integer(n) => *n > 0,
        Document::Float(x) if fractional => x.is_finite() && *x > 0.0,
        _ => false,
    };
    if positive {
        return Ok(());
    }

    let (expected, wording) = if fractional {
        ("number > 0", "a positive number")
    } else {
        ("integer > 0", "a positive integer")
    };
    Err(context.violation(
        ErrorKind::InvalidValue,
        format!("multipleOf must be {}", wording),
        "multipleOf",
        expected,
        value.to_string(),
    ))
}
