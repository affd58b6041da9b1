//! Configuration management for the CLI
//!
//! This module handles loading and merging configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Command-line arguments

use crate::cli::{OutputFormat, ValidateArgs};
use crate::error::{Error, Result};
use crate::logging::LogFormat;
use metaschema_core::{ValidationConfig, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validation settings
    pub validation: ValidationSection,

    /// Output settings
    pub output: OutputSection,

    /// Logging settings
    pub logging: LoggingSection,
}

/// Validation defaults, overridden by `validate` flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSection {
    /// Maximum schema nesting depth
    pub max_depth: usize,

    /// Stop at the first failing file
    pub fail_fast: bool,

    /// Stop after this many failing files (0 = no limit)
    pub max_errors: usize,

    /// Accept fractional numeric bounds
    pub fractional_bounds: bool,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Default output format
    pub format: OutputFormat,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<LogFormat>,
}

impl Default for ValidationSection {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            fail_fast: false,
            max_errors: 0,
            fractional_bounds: false,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());

        let parsed = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_json::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            if !path.exists() {
                return Err(Error::config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        const EXTENSIONS: [&str; 4] = ["yaml", "yml", "json", "toml"];
        let mut paths = Vec::new();

        // Current directory
        for ext in EXTENSIONS {
            paths.push(PathBuf::from(format!(".metaschema.{}", ext)));
        }

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let metaschema_dir = config_dir.join("metaschema");
            for ext in EXTENSIONS {
                paths.push(metaschema_dir.join(format!("config.{}", ext)));
            }
        }

        paths
    }

    /// Engine configuration for a `validate` run; flags win over the file
    pub fn validation_config(&self, args: &ValidateArgs) -> ValidationConfig {
        let settings = &self.validation;
        let mut config = ValidationConfig::strict()
            .with_max_depth(args.max_depth.unwrap_or(settings.max_depth))
            .with_max_errors(args.max_errors.unwrap_or(settings.max_errors));

        if args.fail_fast || settings.fail_fast {
            config = config.with_fail_fast();
        }
        if args.fractional_bounds || settings.fractional_bounds {
            config = config.with_fractional_bounds();
        }

        config
    }

    /// Effective output format; the flag wins over the file
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.output.format)
    }
}
