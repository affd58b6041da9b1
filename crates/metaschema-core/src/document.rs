//! Decoded document model
//!
//! A [`Document`] is the closed set of values a JSON or YAML schema file can
//! decode into. Mappings keep their entries in source order and, unlike
//! `serde_json::Value`, keep repeated keys so that duplicate keywords can be
//! reported instead of silently collapsed.
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::collections::HashSet;
use std::fmt;

/// A decoded JSON-like value
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    Integer(i128),
    Float(f64),
    String(String),
    Sequence(Vec<Document>),
    Mapping(Mapping),
}

impl Document {
    /// Name of the value's JSON kind, as used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Null => "null",
            Document::Bool(_) => "boolean",
            Document::Integer(_) => "integer",
            Document::Float(_) => "number",
            Document::String(_) => "string",
            Document::Sequence(_) => "array",
            Document::Mapping(_) => "object",
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Document::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Document::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer value; floats are never coerced, so `1.0` yields `None`
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Document::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value of an integer or float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Document::Integer(n) => Some(*n as f64),
            Document::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Document::Integer(_) | Document::Float(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }

    /// Look up a key when this document is a mapping
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_mapping().and_then(|mapping| mapping.get(key))
    }

    /// Decode a JSON string, keeping duplicate keys
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Null => write!(f, "null"),
            Document::Bool(b) => write!(f, "{}", b),
            Document::Integer(n) => write!(f, "{}", n),
            Document::Float(x) => write!(f, "{}", x),
            Document::String(s) => write!(f, "{:?}", s),
            Document::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Document::Mapping(mapping) => {
                write!(f, "{{")?;
                for (i, (key, value)) in mapping.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Ordered mapping of string keys to documents
///
/// Lookups return the first entry for a key. Entries are never deduplicated
/// on construction; see [`Mapping::duplicate_keys`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(String, Document)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Document> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Replace the first entry for `key`, or append a new one
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Document) -> Option<Document> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Append an entry without checking for an existing key
    pub fn push<K: Into<String>>(&mut self, key: K, value: Document) {
        self.entries.push((key.into(), value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Document)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Document> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys that occur more than once, each reported once in order of first repetition
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for (key, _) in &self.entries {
            let key = key.as_str();
            if !seen.insert(key) && reported.insert(key) {
                duplicates.push(key);
            }
        }
        duplicates
    }
}

impl FromIterator<(String, Document)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Document)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Mapping> for Document {
    fn from(mapping: Mapping) -> Self {
        Document::Mapping(mapping)
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Document::Null,
            serde_json::Value::Bool(b) => Document::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Document::Integer(i as i128)
                } else if let Some(u) = n.as_u64() {
                    Document::Integer(u as i128)
                } else {
                    Document::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Document::String(s),
            serde_json::Value::Array(items) => {
                Document::Sequence(items.into_iter().map(Document::from).collect())
            }
            serde_json::Value::Object(map) => Document::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Document::from(v)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON-compatible value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Document, E> {
        Ok(Document::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Document, E> {
        Ok(Document::Integer(v as i128))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Document, E> {
        Ok(Document::Integer(v as i128))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Document, E> {
        Ok(Document::Integer(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Document, E> {
        Ok(Document::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Document, E> {
        Ok(Document::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Document, E> {
        Ok(Document::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Document, E> {
        Ok(Document::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Document, E> {
        Ok(Document::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Document, D::Error>
    where
        D: Deserializer<'de>,
    {
        Document::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Document, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Document::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Document, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = Mapping::new();
        while let Some((key, value)) = map.next_entry::<String, Document>()? {
            mapping.push(key, value);
        }
        Ok(Document::Mapping(mapping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_decoding_keeps_duplicate_keys() {
        let doc = Document::from_json_str(r#"{"type": "string", "type": "integer"}"#).unwrap();
        let mapping = doc.as_mapping().unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.duplicate_keys(), vec!["type"]);
        // first entry wins on lookup
        assert_eq!(mapping.get("type"), Some(&Document::String("string".into())));
    }

    #[test]
    fn test_duplicate_keys_reported_once_in_order_of_repetition() {
        let doc = Document::from_json_str(r#"{"a": 1, "b": 2, "b": 3, "a": 4, "b": 5, "c": 6}"#).unwrap();
        assert_eq!(doc.as_mapping().unwrap().duplicate_keys(), vec!["b", "a"]);
    }

    #[test]
    fn test_json_decoding_preserves_order() {
        let doc = Document::from_json_str(r#"{"b": 1, "a": 2, "c": 3}"#).unwrap();
        let keys: Vec<&str> = doc.as_mapping().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_numbers_keep_their_kind() {
        let doc = Document::from_json_str(r#"[1, 1.0, -3, 18446744073709551615]"#).unwrap();
        let items = doc.as_sequence().unwrap();
        assert_eq!(items[0], Document::Integer(1));
        assert_eq!(items[1], Document::Float(1.0));
        assert_eq!(items[2].as_integer(), Some(-3));
        assert_eq!(items[3].as_integer(), Some(u64::MAX as i128));
        assert!(items[1].as_integer().is_none());
        assert!(items[1].is_number());
    }

    #[test]
    fn test_from_serde_value() {
        let doc = Document::from(json!({"type": "object", "required": ["a"], "x": null}));
        assert_eq!(doc.get("type").and_then(Document::as_str), Some("object"));
        assert_eq!(doc.get("required").and_then(Document::as_sequence).map(|s| s.len()), Some(1));
        assert!(doc.get("x").unwrap().is_null());
        assert_eq!(doc.kind(), "object");
    }

    #[test]
    fn test_insert_replaces_first_entry() {
        let mut mapping = Mapping::new();
        assert!(mapping.insert("enum", Document::Null).is_none());
        let previous = mapping.insert("enum", Document::Bool(true));
        assert_eq!(previous, Some(Document::Null));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_display() {
        let doc = Document::from(json!({"a": [1, "x", null]}));
        assert_eq!(doc.to_string(), r#"{"a": [1, "x", null]}"#);
    }
}
