//! intscan-util - Core Utilities and Foundation Types
//!
//! This crate provides the shared vocabulary used by the scanner and the
//! command-line driver:
//!
//! - [`span`] - 1-based line/column positions and single-line spans
//! - [`diagnostic`] - located error reporting with codes, help text and
//!   source snippets
//! - [`error`] - error types raised by the utilities themselves
//!
//! # Example
//!
//! ```
//! use intscan_util::{DiagnosticBuilder, DiagnosticCode, Position};
//!
//! let diag = DiagnosticBuilder::error("Unexpected character [a] at 1:3")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .position(Position::new(1, 3))
//!     .build();
//!
//! assert_eq!(diag.position.column, 3);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Level, SourceSnippet};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::{Position, Span};
