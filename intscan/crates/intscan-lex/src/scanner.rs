//! Line and whole-input scanning.

use std::iter::FusedIterator;
use std::vec;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::lines::Lines;
use crate::state::{finish, step, ScanState};
use crate::token::Token;
use crate::unicode::DigitSet;

/// Knobs for a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Characters accepted as digits.
    pub digits: DigitSet,

    /// Keep each literal's source text on its token.
    pub retain_text: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            digits: DigitSet::Ascii,
            retain_text: true,
        }
    }
}

/// Scans a single line, already stripped of its newline.
///
/// # Example
///
/// ```
/// use intscan_lex::{scan_line, ScanOptions};
///
/// let tokens = scan_line("10 20", 4, &ScanOptions::default()).unwrap();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[1].position().to_string(), "4:4");
/// ```
pub fn scan_line(line: &str, number: u32, options: &ScanOptions) -> Result<Vec<Token>, ScanError> {
    let mut cursor = Cursor::new(line, number);
    let mut state = ScanState::Idle;
    let mut tokens = Vec::new();

    while let Some((c, at)) = cursor.bump() {
        let (next, token) = step(state, c, at, options)?;
        state = next;
        tokens.extend(token);
    }
    tokens.extend(finish(state, cursor.position(), options)?);

    for token in &tokens {
        trace!(target: "intscan::lexer", value = token.value, at = %token.position(), "token");
    }
    debug!(target: "intscan::lexer", line = number, tokens = tokens.len(), "scanned line");

    Ok(tokens)
}

/// Lazy scanner over a whole input.
///
/// Yields tokens in input order. The first error is yielded once and the
/// iterator then ends; tokens already produced on the failing line are not
/// yielded.
///
/// # Example
///
/// ```
/// use intscan_lex::{ScanOptions, Scanner};
///
/// let mut scanner = Scanner::new("1\n2 x\n3", ScanOptions::default());
/// assert_eq!(scanner.next().unwrap().unwrap().value, 1);
/// assert!(scanner.next().unwrap().is_err());
/// assert!(scanner.next().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    lines: Lines<'a>,
    pending: vec::IntoIter<Token>,
    options: ScanOptions,
    done: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `text`.
    pub fn new(text: &'a str, options: ScanOptions) -> Self {
        Self {
            lines: Lines::new(text),
            pending: Vec::new().into_iter(),
            options,
            done: false,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            let Some(line) = self.lines.next() else {
                self.done = true;
                return None;
            };
            match scan_line(line.text, line.number, &self.options) {
                Ok(tokens) => self.pending = tokens.into_iter(),
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                },
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Tokenizes `text` with default options.
///
/// # Example
///
/// ```
/// use intscan_lex::tokenize;
///
/// let values: Vec<i64> = tokenize("1 2\n3").unwrap().iter().map(|t| t.value).collect();
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, ScanError> {
    tokenize_with(text, &ScanOptions::default())
}

/// Tokenizes `text`, stopping at the first error.
pub fn tokenize_with(text: &str, options: &ScanOptions) -> Result<Vec<Token>, ScanError> {
    let result: Result<Vec<Token>, ScanError> = Scanner::new(text, *options).collect();
    match &result {
        Ok(tokens) => debug!(target: "intscan::lexer", tokens = tokens.len(), "scan complete"),
        Err(err) => debug!(target: "intscan::lexer", error = %err, "scan failed"),
    }
    result
}
