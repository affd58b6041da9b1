//! Schema document loading
//!
//! Reads a file from disk and decodes it into a [`Document`](crate::Document),
//! choosing JSON or YAML from the file extension.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use metaschema_core::loader::DocumentLoader;
//! use std::path::Path;
//!
//! let loader = DocumentLoader::new();
//! let schema = loader.load(Path::new("schema.json"))?;
//! println!("Loaded schema: {}", schema);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;

pub use error::{LoaderError, LoaderResult};
pub use parser::{DocumentLoader, Format};
