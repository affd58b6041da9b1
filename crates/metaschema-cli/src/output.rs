//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with specialised
//! rendering for validation errors and per-file reports.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::handlers::validate::{FileReport, ValidationReport};
use colored::Colorize;
use metaschema_core::ValidationError;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a single validation error
    fn format_validation_error(&self, error: &ValidationError) -> Result<String>;

    /// Format the outcome of a validate run
    fn format_report(&self, report: &ValidationReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_validation_error(&self, error: &ValidationError) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_error_human(error)),
            _ => self.format(error),
        }
    }

    fn format_report(&self, report: &ValidationReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_report_human(report)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self::with_writer(format, use_color, quiet, verbose, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            verbose,
            writer,
        }
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.verbose == 0 || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write a single validation error with specialized formatting
    pub fn validation_error(&mut self, error: &ValidationError) -> Result<()> {
        let formatted = self.format.format_validation_error(error)?;
        self.writeln(&formatted)
    }

    /// Write the outcome of a validate run
    pub fn report(&mut self, report: &ValidationReport) -> Result<()> {
        if self.format != OutputFormat::Human {
            let formatted = self.format.format_report(report)?;
            trace!(bytes = formatted.len(), "Outputting report");
            return self.writeln(formatted.trim_end());
        }

        for file in &report.files {
            self.file_report(file)?;
        }

        self.section("Summary")?;
        let summary = summary_line(report);
        if report.invalid == 0 {
            self.success(&summary)
        } else {
            self.error(&summary)
        }
    }

    fn file_report(&mut self, file: &FileReport) -> Result<()> {
        match &file.error {
            None => self.success(&format!("✓ {}", file.path.display())),
            Some(error) => {
                self.error(&format!("✗ {}", file.path.display()))?;
                self.validation_error(error)
            }
        }
    }
}

fn summary_line(report: &ValidationReport) -> String {
    format!(
        "{} checked, {} well-formed, {} invalid",
        report.files.len(),
        report.valid,
        report.invalid
    )
}

/// Format a single validation error for human reading
fn format_validation_error_human(error: &ValidationError) -> String {
    let mut output = String::new();

    output.push_str(&format!("📍 Path: {}\n", error.path));
    output.push_str(&format!("🏷  Kind: {}\n", error.kind));
    output.push_str(&format!("💬 Message: {}\n", error.message));

    if !error.schema_violations.is_empty() {
        output.push_str("🔍 Schema Violations:\n");

        for violation in &error.schema_violations {
            output.push_str(&format!("  • Rule: {}\n", violation.rule));
            output.push_str(&format!("    Expected: {}\n", violation.expected));
            output.push_str(&format!("    Actual: {}\n", violation.actual));
        }
    }

    output
}

/// Format a whole report for human reading, without colors
fn format_report_human(report: &ValidationReport) -> String {
    let mut output = String::new();

    for file in &report.files {
        match &file.error {
            None => output.push_str(&format!("✓ {}\n", file.path.display())),
            Some(error) => {
                output.push_str(&format!("✗ {}\n", file.path.display()));
                output.push_str(&format_validation_error_human(error));
            }
        }
    }

    output.push_str(&summary_line(report));
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
