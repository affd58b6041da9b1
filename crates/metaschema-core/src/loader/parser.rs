//! Document parsing for YAML and JSON formats
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use crate::document::Document;
use crate::loader::error::{LoaderError, LoaderResult};
use std::path::Path;
use tracing::debug;

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json and anything else)
    Json,
}

impl Format {
    /// Detect format from file extension; unrecognised extensions are read as JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Yaml => &["yaml", "yml"],
            Format::Json => &["json"],
        }
    }
}

/// Loader that reads schema files into [`Document`]s
#[derive(Debug, Default)]
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and decode a file, detecting format from its extension
    pub fn load(&self, path: &Path) -> LoaderResult<Document> {
        if !path.exists() {
            return Err(LoaderError::not_found(path.to_path_buf()));
        }

        let bytes = std::fs::read(path).map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;
        let content = String::from_utf8(bytes).map_err(|e| LoaderError::EncodingError {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read schema file");

        self.parse_content(&content, Format::from_path(path), path)
    }

    /// Parse content with an explicit format
    pub fn parse_content(&self, content: &str, format: Format, path: &Path) -> LoaderResult<Document> {
        match format {
            Format::Yaml => self.parse_yaml(content, path),
            Format::Json => self.parse_json(content, path),
        }
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str, path: &Path) -> LoaderResult<Document> {
        serde_yaml::from_str(content).map_err(|e| LoaderError::yaml_parse_error(path.to_path_buf(), e))
    }

    /// Parse JSON content, keeping repeated keys
    pub fn parse_json(&self, content: &str, path: &Path) -> LoaderResult<Document> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Document::from_json_str(content).map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(Path::new("test.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("test.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("test.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("schema")), Format::Json);
        assert_eq!(Format::Yaml.extensions(), &["yaml", "yml"]);
    }

    #[test]
    fn test_yaml_parsing() -> LoaderResult<()> {
        let loader = DocumentLoader::new();
        let content = "type: object\nrequired:\n  - name\nproperties:\n  name:\n    type: string\n";
        let doc = loader.parse_yaml(content, Path::new("schema.yaml"))?;

        assert_eq!(doc.get("type").and_then(Document::as_str), Some("object"));
        assert_eq!(doc.get("required").and_then(Document::as_sequence).map(|r| r.len()), Some(1));
        Ok(())
    }

    #[test]
    fn test_json_parsing_keeps_duplicates() -> LoaderResult<()> {
        let loader = DocumentLoader::new();
        let doc = loader.parse_json(r#"{"type": "string", "type": "string"}"#, Path::new("schema.json"))?;
        assert_eq!(doc.as_mapping().map(|m| m.len()), Some(2));
        Ok(())
    }

    #[test]
    fn test_load_from_disk() -> LoaderResult<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.json");
        fs::write(&path, "\u{feff}{\"type\": \"integer\", \"minimum\": 0}").unwrap();

        let doc = DocumentLoader::new().load(&path)?;
        assert_eq!(doc.get("minimum"), Some(&Document::Integer(0)));
        Ok(())
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let loader = DocumentLoader::new();

        let missing = dir.path().join("missing.json");
        assert!(matches!(loader.load(&missing), Err(LoaderError::NotFound { .. })));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{\"type\": ").unwrap();
        assert!(matches!(loader.load(&broken), Err(LoaderError::JsonParseError { .. })));

        let binary = dir.path().join("binary.json");
        fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(loader.load(&binary), Err(LoaderError::EncodingError { .. })));
    }
}
