//! Integration tests for loading schema documents from disk

use metaschema_core::{validate, DocumentLoader, ErrorKind, LoaderError};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[cfg(test)]
mod load_and_validate {
    use super::*;

    #[test]
    fn test_json_schema_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "person.json", r#"{"type": "object", "required": ["name"], "properties": {"name": {"type": "string"}}}"#);

        let document = DocumentLoader::new().load(&path).unwrap();
        assert!(validate(&document).is_ok());
    }

    #[test]
    fn test_yaml_schema_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "limits.yml", "type: integer\nminimum: 0\nmaximum: 10\n");

        let document = DocumentLoader::new().load(&path).unwrap();
        assert!(validate(&document).is_ok());
    }

    #[test]
    fn test_duplicate_keys_survive_loading() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "dup.json", r#"{"type": "array", "items": {"type": "string"}, "items": {"type": "integer"}}"#);

        let document = DocumentLoader::new().load(&path).unwrap();
        let error = validate(&document).unwrap_err();
        assert_eq!(error.kind, ErrorKind::DuplicateKeyword);
    }

    #[test]
    fn test_unknown_extension_is_read_as_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "schema.txt", r#"{"type": "string"}"#);
        assert!(DocumentLoader::new().load(&path).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let error = DocumentLoader::new().load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(error, LoaderError::NotFound { .. }));
        assert!(error.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.yaml", "type: [unclosed\n");
        let error = DocumentLoader::new().load(&path).unwrap_err();
        assert!(error.is_format_error());
    }
}
