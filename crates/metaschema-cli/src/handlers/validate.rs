//! Validation command handler and related utilities

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use metaschema_core::{DocumentLoader, DocumentValidator, SchemaValidator, ValidationConfig, ValidationError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// Outcome for one schema file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

/// Outcome for a whole `validate` run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub files: Vec<FileReport>,
    pub valid: usize,
    pub invalid: usize,
}

impl ValidationReport {
    fn record(&mut self, path: &Path, result: std::result::Result<(), ValidationError>) {
        let error = result.err();
        if error.is_some() {
            self.invalid += 1;
        } else {
            self.valid += 1;
        }
        self.files.push(FileReport {
            path: path.to_path_buf(),
            valid: error.is_none(),
            error,
        });
    }

    /// Whether checking should stop before the next file
    fn should_stop(&self, config: &ValidationConfig) -> bool {
        if self.invalid == 0 {
            return false;
        }
        config.fail_fast || (config.max_errors > 0 && self.invalid >= config.max_errors)
    }
}

/// Handle the validate command
#[instrument(skip_all, fields(files = args.schemas.len()))]
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let timer = Timer::with_details("validate_command", &format!("files: {}", args.schemas.len()));
    info!("Starting validation process");

    // A missing path ends the run before anything is checked
    if let Some(missing) = args.schemas.iter().find(|path| !path.exists()) {
        error!("File not found: {}", missing.display());
        return Err(Error::FileNotFound {
            path: missing.clone(),
        });
    }

    let validation_config = config.validation_config(&args);
    debug!(config = ?validation_config, "Using validation configuration");

    let mut report = ValidationReport::default();
    if let Err(e) = check_files(&args.schemas, &validation_config, &mut report, output) {
        // Files checked before the undecodable one are still reported
        if !report.files.is_empty() {
            output.report(&report)?;
        }
        return Err(e);
    }
    output.report(&report)?;

    if report.invalid > 0 {
        warn!(invalid = report.invalid, valid = report.valid, "Validation failed");
        return Err(Error::Validation {
            failed: report.invalid,
            total: report.files.len(),
        });
    }

    info!(elapsed_ms = timer.elapsed().as_millis() as u64, "Validation completed successfully");
    Ok(())
}

/// Load and check each file in order, honouring fail-fast and the error limit.
///
/// Outcomes accumulate in `report`, so a file that cannot be loaded leaves the
/// earlier results in place.
pub fn check_files(
    paths: &[PathBuf],
    config: &ValidationConfig,
    report: &mut ValidationReport,
    output: &mut OutputWriter,
) -> Result<()> {
    let loader = DocumentLoader::new();
    let validator = DocumentValidator::new(*config);

    for path in paths {
        output.info(&format!("Validating schema: {}", path.display()))?;

        let document = loader.load(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to load schema");
            Error::from(e)
        })?;
        let result = {
            let _validation_timer = Timer::with_details("schema_validation", &path.display().to_string());
            validator.validate(&document)
        };

        if let Err(e) = &result {
            debug!(path = %path.display(), error_path = %e.path, kind = %e.kind, "Schema is not well-formed");
        }
        report.record(path, result);

        if report.should_stop(config) {
            debug!(checked = report.files.len(), total = paths.len(), "Stopping early");
            break;
        }
    }

    Ok(())
}
