//! Token type produced by the scanner.

use std::fmt;

use intscan_util::{Position, Span};

/// An integer literal recognized by the scanner.
///
/// `text`, when retained, is the exact digit run that produced `value`;
/// parsing it as base-10 always yields `value` again.
///
/// # Example
///
/// ```
/// use intscan_lex::tokenize;
///
/// let tokens = tokenize("  007").unwrap();
/// assert_eq!(tokens[0].value, 7);
/// assert_eq!(tokens[0].text(), Some("007"));
/// assert_eq!(tokens[0].position().column, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Parsed value of the literal.
    pub value: i64,

    /// Literal source text, if the scan retained it.
    pub text: Option<String>,

    /// Columns covered by the literal.
    pub span: Span,
}

impl Token {
    /// Creates a token without literal text.
    pub fn new(value: i64, span: Span) -> Self {
        Self {
            value,
            text: None,
            span,
        }
    }

    /// Creates a token that keeps its literal text.
    pub fn with_text(value: i64, span: Span, text: impl Into<String>) -> Self {
        Self {
            value,
            text: Some(text.into()),
            span,
        }
    }

    /// Returns the literal text, if retained.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the position of the literal's first digit.
    pub fn position(&self) -> Position {
        self.span.start
    }

    /// Returns the line the literal appeared on.
    pub fn line(&self) -> u32 {
        self.span.start.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(line: u32, start: u32, end: u32) -> Span {
        Span::new(Position::new(line, start), Position::new(line, end))
    }

    #[test]
    fn test_token_display_is_value() {
        let token = Token::with_text(42, span(1, 1, 3), "042");
        assert_eq!(token.to_string(), "42");
    }

    #[test]
    fn test_token_without_text() {
        let token = Token::new(5, span(2, 4, 5));
        assert_eq!(token.text(), None);
        assert_eq!(token.line(), 2);
        assert_eq!(token.position(), Position::new(2, 4));
    }
}
