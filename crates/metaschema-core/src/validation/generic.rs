//! Annotation keywords shared by every schema type
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use crate::document::{Document, Mapping};
use crate::validation::base::{ValidationContext, ValidationHelpers};
use crate::validation::error::{ErrorKind, ValidationResult};
use crate::validation::keywords::SchemaType;

/// Check the shape of every generic keyword present in `schema`, then check
/// that literal values agree with the declared `type`.
pub fn check_generic_keywords(schema: &Mapping, context: &ValidationContext) -> ValidationResult<()> {
    for (keyword, value) in schema.iter() {
        let keyword_context = context.child(keyword);
        match keyword {
            "title" | "description" => {
                ValidationHelpers::expect_string(value, keyword, &keyword_context)?;
            }
            "deprecated" | "readOnly" | "writeOnly" => {
                ValidationHelpers::expect_bool(value, keyword, &keyword_context)?;
            }
            "enum" | "examples" => {
                ValidationHelpers::expect_sequence(value, keyword, &keyword_context)?;
            }
            _ => {}
        }
    }

    let Some(type_value) = schema.get("type") else {
        return Ok(());
    };
    let ty = SchemaType::resolve(type_value, context)?;

    for keyword in ["const", "default"] {
        if let Some(value) = schema.get(keyword) {
            check_literal(value, ty, keyword, &context.child(keyword))?;
        }
    }

    for keyword in ["enum", "examples"] {
        if let Some(values) = schema.get(keyword) {
            let keyword_context = context.child(keyword);
            let values = ValidationHelpers::expect_sequence(values, keyword, &keyword_context)?;
            for (index, value) in values.iter().enumerate() {
                check_literal(value, ty, keyword, &keyword_context.child_index(index))?;
            }
        }
    }

    Ok(())
}

fn check_literal(
    value: &Document,
    ty: SchemaType,
    keyword: &str,
    context: &ValidationContext,
) -> ValidationResult<()> {
    if ty.admits(value) {
        return Ok(());
    }

    Err(context.violation(
        ErrorKind::TypeMismatch,
        format!(
            "{} value {} does not match type '{}'",
            keyword, value, ty
        ),
        format!("{}_type", keyword),
        ty.as_str(),
        value.kind(),
    ))
}
