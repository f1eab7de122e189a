//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending line with a caret under the reported column.

use super::{Diagnostic, DiagnosticCode, Level};
use crate::error::{DiagnosticError, DiagnosticResult};
use crate::span::Position;

/// A source code snippet for display in diagnostics
///
/// # Examples
///
/// ```
/// use intscan_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::point("12a", 1, 3).with_label("not a digit");
/// assert_eq!(snippet.format(), "  1 | 12a\n    |   ^ not a digit");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: u32,
    /// Column where the issue starts (1-based)
    pub start_column: u32,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: u32,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a snippet without highlighting (point span)
    pub fn point(line: impl Into<String>, line_number: u32, column: u32) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
            label: None,
        }
    }

    /// Create a point snippet for `position`, picking its line out of
    /// `lines` (index 0 is line 1).
    ///
    /// The column may be the end-of-line boundary, one past the last
    /// character, but no further.
    ///
    /// # Examples
    ///
    /// ```
    /// use intscan_util::diagnostic::SourceSnippet;
    /// use intscan_util::span::Position;
    ///
    /// let lines = ["1 2", "3x"];
    /// let snippet = SourceSnippet::at(&lines, Position::new(2, 2)).unwrap();
    /// assert_eq!(snippet.line, "3x");
    ///
    /// assert!(SourceSnippet::at(&lines, Position::new(3, 1)).is_err());
    /// ```
    pub fn at<S: AsRef<str>>(lines: &[S], position: Position) -> DiagnosticResult<Self> {
        let index = (position.line as usize)
            .checked_sub(1)
            .filter(|&i| i < lines.len())
            .ok_or(DiagnosticError::InvalidLineNumber {
                line: position.line,
                max_lines: lines.len(),
            })?;

        let line = lines[index].as_ref();
        let line_len = line.chars().count();
        if position.column == 0 || position.column as usize > line_len + 1 {
            return Err(DiagnosticError::InvalidColumn {
                column: position.column,
                line_len,
            });
        }

        Ok(Self::point(line, position.line, position.column))
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its number, and a caret line
    /// pointing at the highlighted columns. Columns are character based, so
    /// the caret lines up under multi-byte characters too.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1) as usize;
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1) as usize;

        // Tabs are echoed so the caret stays aligned with the source line.
        for c in self.line.chars().chain(std::iter::repeat(' ')).take(underline_start) {
            result.push(if c == '\t' { '\t' } else { ' ' });
        }
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use intscan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use intscan_util::span::Position;
///
/// let diag = DiagnosticBuilder::error("Illegal number literal [99999999999999999999] at 1:21")
///     .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
///     .position(Position::new(1, 21))
///     .help("literals must fit in a signed 64-bit integer")
///     .build();
///
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    position: Position,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            position: Position::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source position
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            position: self.position,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }
}
