//! Base validation trait and common utilities
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use crate::document::{Document, Mapping};
use crate::validation::error::{ErrorKind, ValidationError, ValidationErrors, ValidationResult};
use crate::validation::ValidationConfig;

/// Validation context for passing path and limits down the recursion
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Current keyword path
    pub path: String,
    /// Number of schema nodes between the root and the current node
    pub depth: usize,
    /// Active configuration
    pub config: ValidationConfig,
}

impl ValidationContext {
    /// Create a root context
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            path: "$".to_string(),
            depth: 0,
            config,
        }
    }

    /// Create a child context with updated path, at the same schema depth
    pub fn child<P: AsRef<str>>(&self, path_segment: P) -> Self {
        Self {
            path: format!("{}.{}", self.path, path_segment.as_ref()),
            depth: self.depth,
            config: self.config,
        }
    }

    /// Create a child context for array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
            depth: self.depth,
            config: self.config,
        }
    }

    /// Context for a nested schema node; one level deeper
    pub fn subschema<P: AsRef<str>>(&self, path_segment: P) -> Self {
        let mut child = self.child(path_segment);
        child.depth += 1;
        child
    }

    /// Context for a nested schema node held in a list
    pub fn subschema_index(&self, index: usize) -> Self {
        let mut child = self.child_index(index);
        child.depth += 1;
        child
    }

    /// Build an error located at this context's path
    pub fn error<M: Into<String>>(&self, kind: ErrorKind, message: M) -> ValidationError {
        ValidationError::new(kind, &self.path, message)
    }

    /// Build an error with a single violation located at this context's path
    pub fn violation<M, R, E, A>(
        &self,
        kind: ErrorKind,
        message: M,
        rule: R,
        expected: E,
        actual: A,
    ) -> ValidationError
    where
        M: Into<String>,
        R: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        ValidationError::with_violations(
            kind,
            &self.path,
            message,
            vec![ValidationError::create_violation(rule, expected, actual)],
        )
    }
}

/// Base trait for schema validators
pub trait SchemaValidator {
    /// The type being validated
    type Input;

    /// Configuration used for root contexts
    fn config(&self) -> ValidationConfig;

    /// Validate a complete document, stopping at the first violation
    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        let context = ValidationContext::new(self.config());
        self.validate_with_context(input, &context)
    }

    /// Validate with a specific context
    fn validate_with_context(
        &self,
        input: &Self::Input,
        context: &ValidationContext,
    ) -> ValidationResult<()>;

    /// Collect validation errors (non-failing)
    fn collect_errors(&self, input: &Self::Input) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if let Err(error) = self.validate(input) {
            errors.add(error);
        }
        errors
    }
}

/// Helper functions for common keyword value shapes
pub struct ValidationHelpers;

impl ValidationHelpers {
    /// The value must be a string
    pub fn expect_string<'a>(
        value: &'a Document,
        keyword: &str,
        context: &ValidationContext,
    ) -> ValidationResult<&'a str> {
        value.as_str().ok_or_else(|| {
            context.violation(
                ErrorKind::InvalidValue,
                format!("{} must be a string", keyword),
                keyword,
                "string",
                value.kind(),
            )
        })
    }

    /// The value must be a boolean
    pub fn expect_bool(
        value: &Document,
        keyword: &str,
        context: &ValidationContext,
    ) -> ValidationResult<bool> {
        value.as_bool().ok_or_else(|| {
            context.violation(
                ErrorKind::InvalidValue,
                format!("{} must be a boolean", keyword),
                keyword,
                "boolean",
                value.kind(),
            )
        })
    }

    /// The value must be a list
    pub fn expect_sequence<'a>(
        value: &'a Document,
        keyword: &str,
        context: &ValidationContext,
    ) -> ValidationResult<&'a [Document]> {
        value.as_sequence().ok_or_else(|| {
            context.violation(
                ErrorKind::InvalidValue,
                format!("{} must be a list", keyword),
                keyword,
                "array",
                value.kind(),
            )
        })
    }

    /// The value must be a schema node
    pub fn expect_schema<'a>(
        value: &'a Document,
        keyword: &str,
        context: &ValidationContext,
    ) -> ValidationResult<&'a Mapping> {
        value.as_mapping().ok_or_else(|| {
            context.violation(
                ErrorKind::InvalidValue,
                format!("{} must be a schema", keyword),
                keyword,
                "object",
                value.kind(),
            )
        })
    }

    /// The value must be an integer of at least one.
    ///
    /// Count-like keywords (`minItems`, `maxLength`, ...) reject zero.
    pub fn expect_count(
        value: &Document,
        keyword: &str,
        context: &ValidationContext,
    ) -> ValidationResult<i128> {
        match value.as_integer() {
            Some(n) if n >= 1 => Ok(n),
            _ => Err(context.violation(
                ErrorKind::InvalidValue,
                format!("{} must be a positive integer", keyword),
                keyword,
                "integer >= 1",
                value.to_string(),
            )),
        }
    }

    /// The value must be a numeric bound: an integer, or with fractional bounds
    /// enabled any finite number
    pub fn expect_bound(
        value: &Document,
        keyword: &str,
        context: &ValidationContext,
    ) -> ValidationResult<f64> {
        let fractional = context.config.allow_fractional_bounds;
        let accepted = match value {
            Document::Integer(n) => Some(*n as f64),
            Document::Float(x) if fractional && x.is_finite() => Some(*x),
            _ => None,
        };

        accepted.ok_or_else(|| {
            let (expected, wording) = if fractional {
                ("number", "a number")
            } else {
                ("integer", "an integer")
            };
            context.violation(
                ErrorKind::InvalidValue,
                format!("{} must be {}", keyword, wording),
                keyword,
                expected,
                value.to_string(),
            )
        })
    }
}
