//! Error handling module for the intscan CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the driver.

use intscan_lex::ScanError;
use thiserror::Error;

/// Exit code for a scan that rejected its input.
pub const EXIT_SCAN_FAILURE: u8 = 1;

/// Exit code for configuration, IO and usage failures.
pub const EXIT_USAGE_FAILURE: u8 = 2;

/// Main error type for the intscan CLI.
#[derive(Error, Debug)]
pub enum DrvError {
    /// Configuration could not be found, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing a named file failed.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Arguments were well-formed but unusable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unnamed IO failure (stdin, stdout).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was rejected by the scanner.
    #[error("{0}")]
    Scan(#[from] ScanError),
}

impl DrvError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DrvError::Scan(_) => EXIT_SCAN_FAILURE,
            _ => EXIT_USAGE_FAILURE,
        }
    }
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;
