//! Cross-checks against the published draft 2020-12 meta-schema
//!
//! Every schema accepted here must also be accepted by the official
//! meta-schema. The converse does not hold: this validator is stricter.

use metaschema_core::{validate, Document};
use serde_json::{json, Value};

fn accepted_schemas() -> Vec<Value> {
    vec![
        json!({"type": "integer", "minimum": 0, "maximum": 1}),
        json!({"type": "boolean"}),
        json!({"type": "null", "const": null}),
        json!({"type": "object", "required": ["foo"]}),
        json!({
            "type": "object",
            "title": "Order",
            "additionalProperties": false,
            "properties": {
                "id": {"type": "string", "pattern": "^[A-Z]{3}-\\d+$"},
                "lines": {
                    "type": "array",
                    "minItems": 1,
                    "items": {
                        "type": "object",
                        "properties": {
                            "sku": {"type": "string", "minLength": 1},
                            "quantity": {"type": "integer", "exclusiveMinimum": 0, "multipleOf": 1}
                        }
                    }
                },
                "coordinates": {
                    "type": "array",
                    "prefixItems": [{"type": "number"}, {"type": "number"}],
                    "uniqueItems": false
                }
            },
            "patternProperties": {"^meta_": {"type": "string"}},
            "propertyNames": {"maxLength": 32}
        }),
        json!({"type": "string", "enum": ["red", "green"], "examples": ["red"], "deprecated": true}),
    ]
}

#[cfg(test)]
mod meta_schema_agreement {
    use super::*;

    #[test]
    fn test_accepted_schemas_satisfy_meta_schema() {
        for schema in accepted_schemas() {
            assert!(validate(&Document::from(schema.clone())).is_ok(), "rejected {}", schema);
            assert!(jsonschema::meta::is_valid(&schema), "meta-schema rejected {}", schema);
        }
    }

    #[test]
    fn test_meta_schema_rejections_are_rejected_here() {
        let schemas = [
            json!({"type": "object", "required": "foo"}),
            json!({"type": "string", "minLength": "1"}),
            json!({"type": "array", "uniqueItems": "yes"}),
            json!({"type": "float"}),
        ];
        for schema in schemas {
            assert!(!jsonschema::meta::is_valid(&schema), "meta-schema accepted {}", schema);
            assert!(validate(&Document::from(schema.clone())).is_err(), "accepted {}", schema);
        }
    }
}
