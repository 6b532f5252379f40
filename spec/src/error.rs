//! Error types for loading inputs and producing artifacts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the model crate.
#[derive(Error, Debug)]
pub enum SpecError {
    /// Validation recorded at least one error; the named artifact step was skipped.
    #[error("spec has {errors} error(s); aborting {step}")]
    Tainted {
        /// The artifact step that refused to run.
        step: &'static str,
        /// Number of errors recorded so far.
        errors: usize,
    },

    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The record document is not valid JSON for the expected shape.
    #[error("invalid record document: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file is not valid TOML for the expected shape.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl SpecError {
    /// True if this error only reports that validation failed earlier.
    #[must_use]
    pub fn is_tainted(&self) -> bool {
        matches!(self, SpecError::Tainted { .. })
    }
}
