//! Line splitting.
//!
//! Input is divided into lines before scanning. Every newline convention
//! counts as exactly one boundary, so `"1\r\n2"`, `"1\n2"` and `"1\r2"` all
//! produce the same two lines. Empty lines are kept, and an input with no
//! newline at all is a single line (possibly empty).

use std::iter::FusedIterator;

use crate::unicode::is_line_break;

/// One line of input with its newline removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line number (1-based).
    pub number: u32,
    /// Line content without the terminating newline.
    pub text: &'a str,
}

/// Iterator over the lines of an input, in order.
///
/// # Example
///
/// ```
/// use intscan_lex::lines::Lines;
///
/// let texts: Vec<&str> = Lines::new("1 2\r\n\n3").map(|l| l.text).collect();
/// assert_eq!(texts, ["1 2", "", "3"]);
/// ```
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    /// Unsplit remainder; `None` once the last line has been yielded.
    rest: Option<&'a str>,

    /// Number of the most recently yielded line; saturates at `u32::MAX`.
    number: u32,
}

impl<'a> Lines<'a> {
    /// Creates a line iterator over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: Some(text),
            number: 0,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        self.number = self.number.saturating_add(1);

        let text = match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((index, c)) => {
                let mut next = index + c.len_utf8();
                if c == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                self.rest = Some(&rest[next..]);
                &rest[..index]
            },
            None => {
                self.rest = None;
                rest
            },
        };

        Some(Line {
            number: self.number,
            text,
        })
    }
}

impl FusedIterator for Lines<'_> {}

/// Splits `text` into numbered lines.
///
/// # Example
///
/// ```
/// use intscan_lex::lines::split_lines;
///
/// let lines = split_lines("");
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].number, 1);
/// assert_eq!(lines[0].text, "");
/// ```
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    Lines::new(text).collect()
}
