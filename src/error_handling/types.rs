//! Error type definitions.
//!
//! The analysis engine never fails; these errors belong to the layers around
//! it (logger setup and reading inputs).

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for reading scan inputs.
#[derive(Error, Debug)]
pub enum InputError {
    /// A markup, script, or configuration file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path that failed (`-` for stdin)
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The configuration snapshot is not valid JSON for `ScanConfig`.
    #[error("Invalid configuration in {}: {source}", path.display())]
    InvalidConfig {
        /// Configuration file path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}
