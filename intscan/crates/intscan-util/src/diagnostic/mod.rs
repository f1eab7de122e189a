//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating and formatting located
//! diagnostics. The scanner fails fast, so a run produces at most one
//! diagnostic; there is no collecting handler.
//!
//! # Examples
//!
//! ```
//! use intscan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, SourceSnippet};
//! use intscan_util::span::Position;
//!
//! let diag = DiagnosticBuilder::error("Unexpected character [a] at 1:3")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .position(Position::new(1, 3))
//!     .snippet(SourceSnippet::point("12a", 1, 3))
//!     .build();
//!
//! let rendered = diag.to_string();
//! assert!(rendered.starts_with("error[E1001]: Unexpected character [a] at 1:3"));
//! assert!(rendered.contains("--> 1:3"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::Position;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use intscan_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that aborts the scan
    Error,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub position: Position,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }

        if !self.position.is_dummy() {
            write!(f, "\n  --> {}", self.position)?;
        }

        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }

        for note in &self.notes {
            write!(f, "\n  = {}: {}", Level::Note, note)?;
        }

        for help in &self.helps {
            write!(f, "\n  = {}: {}", Level::Help, help)?;
        }

        Ok(())
    }
}
