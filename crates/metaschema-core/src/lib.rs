//! Metaschema Core - well-formedness validation for JSON Schema documents
//!
//! This crate checks that a document is itself a well-formed JSON Schema. It
//! does not validate data instances against a schema.
//!
//! ## Features
//!
//! - **Per-type keyword whitelists**: every schema node declares one of the
//!   seven primitive types and may only use that type's keywords plus the
//!   generic annotation keywords
//! - **Value rules**: keyword values are checked for shape and range
//! - **Consistency checks**: `const`, `default`, `enum` and `examples` must
//!   agree with the declared `type`
//! - **Recursive descent** into `properties`, `items`, `prefixItems`,
//!   `contains`, `patternProperties`, `additionalProperties` and
//!   `propertyNames`, bounded by a configurable depth
//! - **Keyword paths**: every error points at the offending node
//!
//! ## Quick Start
//!
//! ```rust
//! use metaschema_core::{validate, Document};
//! use serde_json::json;
//!
//! let schema = Document::from(json!({
//!     "type": "object",
//!     "required": ["name"],
//!     "properties": {
//!         "name": {"type": "string", "minLength": 1},
//!         "tags": {"type": "array", "items": {"type": "string"}}
//!     }
//! }));
//!
//! match validate(&schema) {
//!     Ok(_) => println!("Well-formed schema!"),
//!     Err(e) => println!("Validation error: {}", e),
//! }
//! ```
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

pub mod document;
pub mod loader;
pub mod validation;

// Re-export commonly used types for convenience
pub use document::{Document, Mapping};
pub use loader::{DocumentLoader, LoaderError, LoaderResult};
pub use validation::{
    validate, validate_batch, validate_schema, DocumentValidator, ErrorKind, SchemaType,
    SchemaValidator, ValidationConfig, ValidationContext, ValidationError, ValidationErrors,
    ValidationResult, Violation, DEFAULT_MAX_DEPTH, GENERIC_KEYWORDS,
};
