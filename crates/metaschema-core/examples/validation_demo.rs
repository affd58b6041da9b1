//! Validation demonstration example
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use metaschema_core::{
    validate, validate_batch, Document, DocumentValidator, SchemaValidator, ValidationConfig,
};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Metaschema Validation Demo ===\n");

    demo_single_schemas();

    println!();

    demo_configured_validation();

    println!();

    demo_batch_validation();

    Ok(())
}

fn report(label: &str, schema: &Document) {
    match validate(schema) {
        Ok(_) => println!("✅ {}: well-formed", label),
        Err(e) => println!("❌ {}: {}", label, e),
    }
}

fn demo_single_schemas() {
    println!("--- Single Schema Validation ---");

    report(
        "integer with bounds",
        &Document::from(json!({"type": "integer", "minimum": 0, "maximum": 1})),
    );
    report(
        "misspelled keyword",
        &Document::from(json!({"type": "integer", "minimumm": 0})),
    );
    report(
        "bad additionalProperties",
        &Document::from(json!({"type": "object", "additionalProperties": 123})),
    );
    report(
        "nested mistake",
        &Document::from(json!({
            "type": "object",
            "properties": {
                "tags": {"type": "array", "items": {"type": "string", "maxLength": 0}}
            }
        })),
    );
}

fn demo_configured_validation() {
    println!("--- Configured Validation ---");

    let schema = Document::from(json!({"type": "number", "minimum": 0.5, "multipleOf": 0.1}));
    let strict = DocumentValidator::default();
    let lenient = DocumentValidator::new(ValidationConfig::default().with_fractional_bounds());

    println!("strict:     {:?}", strict.validate(&schema).map_err(|e| e.message));
    println!("fractional: {:?}", lenient.validate(&schema).map_err(|e| e.message));
}

fn demo_batch_validation() {
    println!("--- Batch Validation ---");

    let schemas = vec![
        Document::from(json!({"type": "string", "pattern": "^[a-z]+$"})),
        Document::from(json!({"type": "strin"})),
        Document::from(json!({"type": "boolean", "const": "yes"})),
    ];

    match validate_batch(&schemas, &ValidationConfig::default()) {
        Ok(()) => println!("✅ all schemas well-formed"),
        Err(errors) => println!("{}", errors),
    }
}
