//! Core error types for intscan-util crate

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// The requested line does not exist in the source
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: u32,
        /// Number of lines available
        max_lines: usize,
    },

    /// The requested column lies beyond the end-of-line boundary
    #[error("Invalid column: {column} (line has {line_len} characters)")]
    InvalidColumn {
        /// Requested column (1-based)
        column: u32,
        /// Number of characters on the line
        line_len: usize,
    },
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
