//! Error types for document loading operations
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised while reading and decoding a schema document
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The path does not exist
    #[error("File not found: '{path}'")]
    NotFound { path: PathBuf },

    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Content is not valid UTF-8
    #[error("File '{path}' is not valid UTF-8: {source}")]
    EncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LoaderError {
    /// Create a not-found error
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, error: std::io::Error) -> Self {
        Self::IoError {
            path,
            source: error,
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: PathBuf, error: serde_yaml::Error) -> Self {
        Self::YamlParseError {
            path,
            source: error,
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::JsonParseError {
            path,
            source: error,
        }
    }

    /// Get the path associated with this error
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path }
            | Self::IoError { path, .. }
            | Self::EncodingError { path, .. }
            | Self::YamlParseError { path, .. }
            | Self::JsonParseError { path, .. } => path,
        }
    }

    /// Whether the document was read but could not be decoded
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::EncodingError { .. } | Self::YamlParseError { .. } | Self::JsonParseError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let path = PathBuf::from("schema.json");

        let io_err = LoaderError::io_error(
            path.clone(),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(io_err, LoaderError::IoError { .. }));
        assert_eq!(io_err.path(), &path);
        assert!(!io_err.is_format_error());

        let missing = LoaderError::not_found(path.clone());
        assert_eq!(missing.to_string(), "File not found: 'schema.json'");
    }

    #[test]
    fn test_parse_errors_are_format_errors() {
        let parse_err = LoaderError::yaml_parse_error(
            PathBuf::from("schema.yaml"),
            serde_yaml::from_str::<serde_yaml::Value>("{").unwrap_err(),
        );
        assert!(parse_err.is_format_error());
    }
}
