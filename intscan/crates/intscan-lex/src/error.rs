//! Scan errors.
//!
//! A scan fails at the first fault it meets, so a [`ScanError`] always
//! carries exactly one kind and the position where it was detected. Its
//! `Display` output is the message shown to users verbatim.

use intscan_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Position};
use thiserror::Error;

/// What went wrong during a scan.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    /// A character that is neither whitespace nor a digit.
    #[error("Unexpected character [{0}]")]
    UnexpectedCharacter(char),

    /// A completed digit run that does not parse as a signed 64-bit integer.
    #[error("Illegal number literal [{0}]")]
    IllegalNumberLiteral(String),
}

/// A located scan failure.
///
/// # Example
///
/// ```
/// use intscan_lex::tokenize;
///
/// let err = tokenize("12a").unwrap_err();
/// assert_eq!(err.to_string(), "Unexpected character [a] at 1:3");
/// assert_eq!((err.line(), err.column()), (1, 3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {position}")]
pub struct ScanError {
    /// Error kind.
    pub kind: ScanErrorKind,
    /// Where the fault was detected.
    pub position: Position,
}

impl ScanError {
    /// Creates an error for an unexpected character at `position`.
    pub fn unexpected_character(c: char, position: Position) -> Self {
        Self {
            kind: ScanErrorKind::UnexpectedCharacter(c),
            position,
        }
    }

    /// Creates an error for a digit run that failed to parse.
    ///
    /// `position` is where finalization was triggered, one column past the
    /// literal.
    pub fn illegal_number_literal(literal: impl Into<String>, position: Position) -> Self {
        Self {
            kind: ScanErrorKind::IllegalNumberLiteral(literal.into()),
            position,
        }
    }

    /// Line of the fault (1-based).
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Column of the fault (1-based).
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Diagnostic code for this error kind.
    pub fn code(&self) -> DiagnosticCode {
        match self.kind {
            ScanErrorKind::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            ScanErrorKind::IllegalNumberLiteral(_) => DiagnosticCode::E_LEXER_INVALID_NUMBER,
        }
    }

    /// Converts the error into a diagnostic carrying code and help text.
    ///
    /// The diagnostic message is the error's `Display` output, unchanged.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = DiagnosticBuilder::error(self.to_string())
            .code(self.code())
            .position(self.position);

        let builder = match &self.kind {
            ScanErrorKind::UnexpectedCharacter(c) => builder
                .note(format!("found {}", describe_char(*c)))
                .help("only decimal digits and whitespace may appear in the input"),
            ScanErrorKind::IllegalNumberLiteral(literal) if is_ascii_digits(literal) => {
                builder.help(format!("integer literals must not exceed {}", i64::MAX))
            },
            ScanErrorKind::IllegalNumberLiteral(_) => builder
                .note("the literal contains digits outside 0-9")
                .help("write the number with ASCII digits"),
        };

        builder.build()
    }
}

fn is_ascii_digits(literal: &str) -> bool {
    literal.bytes().all(|b| b.is_ascii_digit())
}

fn describe_char(c: char) -> String {
    if c.is_control() {
        format!("control character U+{:04X}", c as u32)
    } else {
        format!("'{}' (U+{:04X})", c, c as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intscan_util::Level;

    #[test]
    fn test_unexpected_character_message() {
        let err = ScanError::unexpected_character('#', Position::new(4, 10));
        assert_eq!(err.to_string(), "Unexpected character [#] at 4:10");
        assert_eq!(err.code(), DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    }

    #[test]
    fn test_illegal_number_literal_message() {
        let err = ScanError::illegal_number_literal("9223372036854775808", Position::new(1, 20));
        assert_eq!(
            err.to_string(),
            "Illegal number literal [9223372036854775808] at 1:20"
        );
        assert_eq!(err.code(), DiagnosticCode::E_LEXER_INVALID_NUMBER);
    }

    #[test]
    fn test_to_diagnostic_keeps_message() {
        let err = ScanError::unexpected_character('a', Position::new(1, 3));
        let diag = err.to_diagnostic();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "Unexpected character [a] at 1:3");
        assert_eq!(diag.position, Position::new(1, 3));
        assert_eq!(diag.notes, vec!["found 'a' (U+0061)".to_string()]);
        assert_eq!(diag.helps.len(), 1);
    }

    #[test]
    fn test_to_diagnostic_overflow_help() {
        let err = ScanError::illegal_number_literal("99999999999999999999", Position::new(1, 21));
        let diag = err.to_diagnostic();
        assert!(diag.notes.is_empty());
        assert_eq!(
            diag.helps,
            vec!["integer literals must not exceed 9223372036854775807".to_string()]
        );
    }

    #[test]
    fn test_to_diagnostic_non_ascii_digits() {
        let err = ScanError::illegal_number_literal("١٢", Position::new(1, 3));
        let diag = err.to_diagnostic();
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.helps, vec!["write the number with ASCII digits".to_string()]);
    }

    #[test]
    fn test_describe_control_char() {
        assert_eq!(describe_char('\u{0}'), "control character U+0000");
    }
}
