//! intscan-lex - Integer literal scanner
//!
//! This crate turns text into a sequence of signed 64-bit integer tokens.
//! The input may contain only decimal digit runs separated by whitespace
//! and newlines; anything else stops the scan with a located error.
//!
//! # Example Usage
//!
//! ```
//! use intscan_lex::tokenize;
//!
//! let tokens = tokenize("1 2\n  30").unwrap();
//! let values: Vec<i64> = tokens.iter().map(|t| t.value).collect();
//! assert_eq!(values, [1, 2, 30]);
//! assert_eq!(tokens[2].position().to_string(), "2:3");
//!
//! let err = tokenize("12a").unwrap_err();
//! assert_eq!(err.to_string(), "Unexpected character [a] at 1:3");
//! ```
//!
//! # Module Structure
//!
//! - [`lines`] - Splitting input into numbered lines
//! - [`cursor`] - Per-line character cursor
//! - [`state`] - The `Idle`/`Accumulating` state machine
//! - [`scanner`] - Line and whole-input scanning
//! - [`token`] - Token type
//! - [`error`] - Scan errors
//! - [`unicode`] - Character classification
//!
//! # Positions
//!
//! Lines and columns are 1-based. Columns count characters, so a multi-byte
//! character occupies one column. An error raised at the end of a line
//! reports the column one past the last character.

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod lines;
pub mod scanner;
pub mod state;
pub mod token;
pub mod unicode;

mod edge_cases;

pub use error::{ScanError, ScanErrorKind};
pub use lines::{split_lines, Line, Lines};
pub use scanner::{scan_line, tokenize, tokenize_with, ScanOptions, Scanner};
pub use state::{finish, step, ScanState};
pub use token::Token;
pub use unicode::DigitSet;
