//! Schema types, keyword whitelists and the keyword-set guard
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use crate::document::{Document, Mapping};
use crate::validation::base::ValidationContext;
use crate::validation::error::{ErrorKind, ValidationError, ValidationResult};
use crate::validation::generic;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Annotation keywords legal under every schema type
pub const GENERIC_KEYWORDS: &[&str] = &[
    "const",
    "default",
    "deprecated",
    "description",
    "enum",
    "examples",
    "readOnly",
    "title",
    "writeOnly",
];

const OBJECT_KEYWORDS: &[&str] = &[
    "additionalProperties",
    "properties",
    "patternProperties",
    "propertyNames",
    "maxProperties",
    "minProperties",
    "required",
    "type",
];

const ARRAY_KEYWORDS: &[&str] = &[
    "contains",
    "items",
    "maxContains",
    "maxItems",
    "minContains",
    "minItems",
    "prefixItems",
    "type",
    "uniqueItems",
];

const STRING_KEYWORDS: &[&str] = &["format", "minLength", "maxLength", "pattern", "type"];

const NUMERIC_KEYWORDS: &[&str] = &[
    "exclusiveMaximum",
    "exclusiveMinimum",
    "maximum",
    "minimum",
    "multipleOf",
    "type",
];

const TYPE_ONLY_KEYWORDS: &[&str] = &["type"];

/// The value of a schema node's `type` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

impl SchemaType {
    pub const ALL: [SchemaType; 7] = [
        SchemaType::Object,
        SchemaType::Array,
        SchemaType::String,
        SchemaType::Number,
        SchemaType::Integer,
        SchemaType::Boolean,
        SchemaType::Null,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Null => "null",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == name)
    }

    /// Type-specific keywords legal under this type, `type` included
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SchemaType::Object => OBJECT_KEYWORDS,
            SchemaType::Array => ARRAY_KEYWORDS,
            SchemaType::String => STRING_KEYWORDS,
            SchemaType::Number | SchemaType::Integer => NUMERIC_KEYWORDS,
            SchemaType::Boolean | SchemaType::Null => TYPE_ONLY_KEYWORDS,
        }
    }

    /// Whether `keyword` may appear in a node of this type
    pub fn allows(self, keyword: &str) -> bool {
        self.keywords().contains(&keyword) || GENERIC_KEYWORDS.contains(&keyword)
    }

    /// Whether a literal value (`const`, `default`, `enum` member) has this type's kind
    pub fn admits(self, value: &Document) -> bool {
        match self {
            SchemaType::Object => matches!(value, Document::Mapping(_)),
            SchemaType::Array => matches!(value, Document::Sequence(_)),
            SchemaType::String => matches!(value, Document::String(_)),
            SchemaType::Number | SchemaType::Integer => value.is_number(),
            SchemaType::Boolean => matches!(value, Document::Bool(_)),
            SchemaType::Null => value.is_null(),
        }
    }

    fn allowed_names() -> String {
        Self::ALL
            .iter()
            .map(|ty| ty.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve the value of a `type` keyword
    pub fn resolve(value: &Document, context: &ValidationContext) -> ValidationResult<Self> {
        let context = context.child("type");
        let name = value.as_str().ok_or_else(|| {
            context.violation(
                ErrorKind::InvalidType,
                format!("'type' must be a string, found {}", value.kind()),
                "type",
                format!("one of: {}", Self::allowed_names()),
                value.to_string(),
            )
        })?;

        Self::from_name(name).ok_or_else(|| {
            context.violation(
                ErrorKind::InvalidType,
                format!("Invalid 'type' keyword: {}", name),
                "type",
                format!("one of: {}", Self::allowed_names()),
                name,
            )
        })
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword-set guard run at the top of every type-specific validator.
///
/// Rejects repeated keys, then keys outside the type's whitelist and the
/// generic keywords, then runs the generic-keyword checks.
pub fn guard(schema: &Mapping, ty: SchemaType, context: &ValidationContext) -> ValidationResult<()> {
    let duplicates = schema.duplicate_keys();
    if !duplicates.is_empty() {
        return Err(ValidationError::with_violations(
            ErrorKind::DuplicateKeyword,
            &context.path,
            format!("Duplicate keywords: {}", list_keys(&duplicates)),
            duplicates
                .iter()
                .map(|key| ValidationError::create_violation("unique_keywords", "keyword to appear once", *key))
                .collect(),
        ));
    }

    let unknown: Vec<&str> = schema.keys().filter(|key| !ty.allows(key)).collect();
    if !unknown.is_empty() {
        return Err(ValidationError::with_violations(
            ErrorKind::UnknownKeyword,
            &context.path,
            format!("Invalid keywords: {}", list_keys(&unknown)),
            unknown
                .iter()
                .map(|key| {
                    ValidationError::create_violation(
                        "known_keywords",
                        format!("a keyword valid for type '{}'", ty),
                        *key,
                    )
                })
                .collect(),
        ));
    }

    generic::check_generic_keywords(schema, context)
}

/// Keys named in a guard message; the violations carry the full list
const MESSAGE_KEY_LIMIT: usize = 20;

fn list_keys(keys: &[&str]) -> String {
    if keys.len() <= MESSAGE_KEY_LIMIT {
        return keys.join(", ");
    }
    format!(
        "{} and {} more",
        keys[..MESSAGE_KEY_LIMIT].join(", "),
        keys.len() - MESSAGE_KEY_LIMIT
    )
}

/// Internal invariant: a type-specific validator only ever sees its own type.
///
/// # Panics
///
/// Panics when `value` is not the name of `ty`. Reaching this with any other
/// value is a routing defect, not a property of the input document.
pub(crate) fn assert_declared_type(value: &Document, ty: SchemaType) {
    if value.as_str() != Some(ty.as_str()) {
        panic!("'type' must be '{}', found {}", ty, value);
    }
}
