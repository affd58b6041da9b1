//! Well-formedness validation for JSON Schema documents
//!
//! The engine walks a decoded [`Document`] top-down. Every schema node goes
//! through [`validate_schema`], which resolves the node's `type` and hands it
//! to the validator for that type. Each type validator first runs the
//! keyword-set [`guard`](keywords::guard) (duplicate keys, unknown keywords,
//! generic annotation keywords) and then checks its own keywords, recursing
//! into nested schemas through the dispatcher again.
//!
//! Validation is fail-fast: the first violation, in keyword order, is
//! returned. [`validate_batch`] aggregates across documents.
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

pub mod array;
pub mod base;
pub mod dispatch;
pub mod error;
pub mod generic;
pub mod keywords;
pub mod numeric;
pub mod object;
pub mod pattern;
pub mod scalar;
pub mod string;

use crate::document::Document;
use tracing::debug;

// Re-export commonly used types
pub use base::{SchemaValidator, ValidationContext, ValidationHelpers};
pub use dispatch::validate_schema;
pub use error::{ErrorKind, ValidationError, ValidationErrors, ValidationResult, Violation};
pub use keywords::{SchemaType, GENERIC_KEYWORDS};

/// Default limit on schema nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Validation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum number of nested schema levels below the root
    pub max_depth: usize,
    /// Whether batch validation stops at the first failing document
    pub fail_fast: bool,
    /// Maximum number of errors to collect in batch validation (0 = unlimited)
    pub max_errors: usize,
    /// Accept fractional `minimum`/`maximum`/`exclusive*`/`multipleOf` values
    pub allow_fractional_bounds: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl ValidationConfig {
    /// Integer-only bounds, default depth limit, collect every batch error
    pub fn strict() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            fail_fast: false,
            max_errors: 0,
            allow_fractional_bounds: false,
        }
    }

    /// Enable fail-fast mode for batches
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Accept any finite number as a numeric bound
    pub fn with_fractional_bounds(mut self) -> Self {
        self.allow_fractional_bounds = true;
        self
    }
}

/// Validator for whole schema documents
#[derive(Debug, Clone, Default)]
pub struct DocumentValidator {
    config: ValidationConfig,
}

impl DocumentValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }
}

impl SchemaValidator for DocumentValidator {
    type Input = Document;

    fn config(&self) -> ValidationConfig {
        self.config
    }

    fn validate_with_context(
        &self,
        input: &Document,
        context: &ValidationContext,
    ) -> ValidationResult<()> {
        debug!(path = %context.path, max_depth = context.config.max_depth, "validating schema document");
        validate_schema(input, context)
    }
}

/// Validate a schema document with the default configuration
///
/// # Examples
///
/// ```rust
/// use metaschema_core::{validate, Document};
/// use serde_json::json;
///
/// let schema = Document::from(json!({"type": "integer", "minimum": 0, "maximum": 1}));
/// assert!(validate(&schema).is_ok());
///
/// let schema = Document::from(json!({"type": "integer", "minimumm": 0}));
/// let error = validate(&schema).unwrap_err();
/// assert!(error.message.contains("Invalid keywords"));
/// ```
pub fn validate(schema: &Document) -> ValidationResult<()> {
    DocumentValidator::default().validate(schema)
}

/// Batch validation for multiple schema documents
pub fn validate_batch(
    schemas: &[Document],
    config: &ValidationConfig,
) -> Result<(), ValidationErrors> {
    let validator = DocumentValidator::new(*config);
    let mut errors = ValidationErrors::new();
    let context = ValidationContext::new(*config);

    for (i, schema) in schemas.iter().enumerate() {
        let schema_context = context.child_index(i);
        match validator.validate_with_context(schema, &schema_context) {
            Ok(_) => continue,
            Err(error) => {
                errors.add(error);

                if config.fail_fast {
                    break;
                }

                if config.max_errors > 0 && errors.len() >= config.max_errors {
                    break;
                }
            }
        }
    }

    errors.into_result()
}
