//! Character cursor for walking a single line.
//!
//! The cursor hands out each character together with its 1-based position.
//! Columns advance by one per character regardless of UTF-8 width, so
//! `"é1"` puts `1` at column 2.

use intscan_util::Position;

/// A cursor over one line of input.
///
/// # Example
///
/// ```
/// use intscan_lex::cursor::Cursor;
/// use intscan_util::Position;
///
/// let mut cursor = Cursor::new("αβ", 3);
/// assert_eq!(cursor.bump(), Some(('α', Position::new(3, 1))));
/// assert_eq!(cursor.bump(), Some(('β', Position::new(3, 2))));
/// assert_eq!(cursor.bump(), None);
/// assert_eq!(cursor.position(), Position::new(3, 3));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The line being traversed, newline already removed.
    text: &'a str,

    /// Current byte position in `text`.
    offset: usize,

    /// Position of the next character.
    position: Position,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `text`, which is line `line`.
    pub fn new(text: &'a str, line: u32) -> Self {
        Self {
            text,
            offset: 0,
            position: Position::line_start(line),
        }
    }

    /// Returns the character at the cursor without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    /// Consumes the next character, returning it with its position.
    ///
    /// Columns saturate at `u32::MAX`.
    #[inline]
    pub fn bump(&mut self) -> Option<(char, Position)> {
        let c = self.peek()?;
        let at = self.position;
        self.offset += c.len_utf8();
        self.position = at.advanced(1);
        Some((c, at))
    }

    /// Position of the next character.
    ///
    /// Once the line is exhausted this is the end-of-line position, one
    /// column past the last character.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }
}
