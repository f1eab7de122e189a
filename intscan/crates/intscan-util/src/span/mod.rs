//! Span module - Source location tracking.
//!
//! Positions are 1-based in both coordinates. Columns count characters,
//! not bytes, so a multi-byte character occupies exactly one column.
//!
//! # Examples
//!
//! ```
//! use intscan_util::span::{Position, Span};
//!
//! let start = Position::new(2, 5);
//! let span = Span::new(start, start.advanced(3));
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.to_string(), "2:5-2:8");
//! ```

use std::fmt;

/// A 1-based (line, column) location in the input.
///
/// A position may point at a character or at the end-of-line boundary,
/// which is one column past the last character of the line.
///
/// # Examples
///
/// ```
/// use intscan_util::span::Position;
///
/// let pos = Position::new(1, 3);
/// assert_eq!(pos.to_string(), "1:3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Position {
    /// Dummy position for testing
    pub const DUMMY: Position = Position { line: 0, column: 0 };

    /// Create a new position
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Position of the first character of `line`
    ///
    /// # Examples
    ///
    /// ```
    /// use intscan_util::span::Position;
    ///
    /// assert_eq!(Position::line_start(4), Position::new(4, 1));
    /// ```
    #[inline]
    pub const fn line_start(line: u32) -> Self {
        Self { line, column: 1 }
    }

    /// Returns the position `columns` characters further along the same line
    ///
    /// The column saturates at `u32::MAX`.
    #[inline]
    pub const fn advanced(self, columns: u32) -> Self {
        Self {
            line: self.line,
            column: self.column.saturating_add(columns),
        }
    }

    /// Returns true for the placeholder position
    #[inline]
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::line_start(1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A half-open range of columns on a single line: `start` is the first
/// character covered, `end` is one past the last.
///
/// # Examples
///
/// ```
/// use intscan_util::span::{Position, Span};
///
/// let point = Span::point(Position::new(1, 4));
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First covered position
    pub start: Position,
    /// One past the last covered position
    pub end: Position,
}

impl Span {
    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use intscan_util::span::{Position, Span};
    ///
    /// let span = Span::new(Position::new(1, 1), Position::new(1, 4));
    /// assert_eq!(span.start.column, 1);
    /// assert_eq!(span.end.column, 4);
    /// ```
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span at a single point
    #[inline]
    pub const fn point(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Number of columns covered
    #[inline]
    pub fn len(&self) -> u32 {
        self.end.column.saturating_sub(self.start.column)
    }

    /// Returns true if the span covers no columns
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Line the span lives on
    #[inline]
    pub fn line(&self) -> u32 {
        self.start.line
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
