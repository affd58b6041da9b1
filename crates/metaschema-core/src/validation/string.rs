//! Validator for `type: "string"` schema nodes
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use crate::document::Mapping;
use crate::validation::base::{ValidationContext, ValidationHelpers};
use crate::validation::error::ValidationResult;
use crate::validation::keywords::{assert_declared_type, guard, SchemaType};
use crate::validation::pattern::check_pattern;

/// Validate a string schema node.
///
/// `format` values are not checked against a list of known formats.
///
/// # Panics
///
/// Panics if the node declares a `type` other than `"string"`.
pub fn validate_string(schema: &Mapping, context: &ValidationContext) -> ValidationResult<()> {
    guard(schema, SchemaType::String, context)?;

    for (keyword, value) in schema.iter() {
        let keyword_context = context.child(keyword);
        match keyword {
            "format" => {
                ValidationHelpers::expect_string(value, keyword, &keyword_context)?;
            }
            "minLength" | "maxLength" => {
                ValidationHelpers::expect_count(value, keyword, &keyword_context)?;
            }
            "pattern" => {
                let pattern = ValidationHelpers::expect_string(value, keyword, &keyword_context)?;
                check_pattern(pattern, keyword, &keyword_context)?;
            }
            "type" => assert_declared_type(value, SchemaType::String),
            _ => {}
        }
    }

    Ok(())
}
