//! Property-based tests for schema validation
//!
//! These tests verify that the dispatcher behaves correctly
//! across a wide range of inputs.

use metaschema_core::{validate, Document, ErrorKind, SchemaType};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Strategy for generating random JSON values with controlled complexity
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,50}".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        3,  // max depth
        10, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
                proptest::collection::hash_map("[a-zA-Z_][a-zA-Z0-9_]{0,20}", inner, 0..5)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Strategy for the seven type tags
fn schema_type_strategy() -> impl Strategy<Value = SchemaType> {
    proptest::sample::select(SchemaType::ALL.to_vec())
}

/// Strategy for generating non-mapping documents
fn non_mapping_strategy() -> impl Strategy<Value = Value> {
    json_value_strategy().prop_filter("mappings are schema candidates", |value| !value.is_object())
}

/// Strategy for keys that no schema type accepts
fn unknown_keyword_strategy() -> impl Strategy<Value = String> {
    "x[a-zA-Z0-9_]{0,12}"
}

proptest! {
    /// Property: The dispatcher never panics on any JSON input
    #[test]
    fn prop_validate_never_panics(
        input in json_value_strategy()
    ) {
        let _ = validate(&Document::from(input));
    }

    /// Property: Anything that is not a mapping is not a schema
    #[test]
    fn prop_non_mapping_fails(
        input in non_mapping_strategy()
    ) {
        let error = validate(&Document::from(input)).unwrap_err();
        prop_assert_eq!(error.kind, ErrorKind::NotAnObject);
    }

    /// Property: A mapping without a recognised type tag fails
    #[test]
    fn prop_unrecognised_type_fails(
        tag in "[a-zA-Z]{1,12}"
    ) {
        prop_assume!(SchemaType::from_name(&tag).is_none());

        let error = validate(&Document::from(json!({"type": tag}))).unwrap_err();
        prop_assert_eq!(error.kind, ErrorKind::InvalidType);
    }

    /// Property: Every bare type tag is a well-formed schema
    #[test]
    fn prop_bare_type_passes(
        ty in schema_type_strategy()
    ) {
        let well_formed = validate(&Document::from(json!({"type": ty.as_str()}))).is_ok();
        prop_assert!(well_formed);
    }

    /// Property: An unknown keyword fails and is named in the message
    #[test]
    fn prop_unknown_keyword_is_named(
        ty in schema_type_strategy(),
        keyword in unknown_keyword_strategy(),
    ) {
        let mut schema = serde_json::Map::new();
        schema.insert("type".to_string(), json!(ty.as_str()));
        schema.insert(keyword.clone(), json!(1));

        let error = validate(&Document::from(Value::Object(schema))).unwrap_err();
        prop_assert_eq!(error.kind, ErrorKind::UnknownKeyword);
        prop_assert!(error.message.contains(&keyword));
    }

    /// Property: Count keywords accept exactly the positive integers
    #[test]
    fn prop_count_keyword_boundary(
        n in -50i64..50
    ) {
        let result = validate(&Document::from(json!({"type": "string", "minLength": n})));
        prop_assert_eq!(result.is_ok(), n >= 1);
    }

    /// Property: Validation should be deterministic
    #[test]
    fn prop_validation_deterministic(
        input in json_value_strategy()
    ) {
        let document = Document::from(input);

        let result1 = validate(&document);
        let result2 = validate(&document);

        match (result1, result2) {
            (Ok(_), Ok(_)) => {},
            (Err(e1), Err(e2)) => prop_assert_eq!(e1, e2),
            _ => panic!("Non-deterministic validation results"),
        }
    }

    /// Property: A nested invalid property fails with the same kind it fails with alone
    #[test]
    fn prop_nested_failure_matches_standalone(
        input in json_value_strategy(),
        name in "[a-z]{1,10}",
    ) {
        let standalone = Document::from(input.clone());
        let nested = Document::from(json!({"type": "object", "properties": {name.clone(): input}}));

        match (validate(&standalone), validate(&nested)) {
            (Ok(_), Ok(_)) => {},
            (Err(alone), Err(inside)) => {
                prop_assert_eq!(alone.kind, inside.kind);
                let prefix = format!("$.properties.{}", name);
                prop_assert!(inside.path.starts_with(&prefix));
            },
            (alone, inside) => panic!("standalone {:?} but nested {:?}", alone, inside),
        }
    }
}
