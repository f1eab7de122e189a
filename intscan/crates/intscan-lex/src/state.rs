//! Scanner state machine.
//!
//! A line is scanned by feeding each character to [`step`] and then calling
//! [`finish`] with the end-of-line position. Both are pure: the state goes
//! in by value and the next state comes back out, so every transition can be
//! exercised on its own.
//!
//! ```text
//!              whitespace                 digit
//!             +---------+              +---------+
//!             v         |              v         |
//!          +------+   digit   +--------------+   |
//!  start ->| Idle |---------->| Accumulating |---+
//!          +------+           +--------------+
//!             ^   whitespace / emit token |
//!             +---------------------------+
//! ```
//!
//! Any other character is an error in either state.

use intscan_util::{Position, Span};

use crate::error::ScanError;
use crate::scanner::ScanOptions;
use crate::token::Token;
use crate::unicode::CharClass;

/// Where the scanner is within a line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Between literals. Every line starts here.
    #[default]
    Idle,

    /// Inside a literal.
    Accumulating {
        /// Digits read so far; never empty.
        buffer: String,
        /// Position of the first digit.
        start: Position,
    },
}

/// Feeds one character at `position` to the state machine.
///
/// Returns the next state and, when the character ended a literal, the
/// finished token.
///
/// # Example
///
/// ```
/// use intscan_lex::{step, ScanOptions, ScanState};
/// use intscan_util::Position;
///
/// let options = ScanOptions::default();
/// let (state, token) = step(ScanState::Idle, '4', Position::new(1, 1), &options).unwrap();
/// assert!(matches!(state, ScanState::Accumulating { .. }));
/// assert!(token.is_none());
///
/// let (state, token) = step(state, ' ', Position::new(1, 2), &options).unwrap();
/// assert_eq!(state, ScanState::Idle);
/// assert_eq!(token.unwrap().value, 4);
/// ```
pub fn step(
    state: ScanState,
    c: char,
    position: Position,
    options: &ScanOptions,
) -> Result<(ScanState, Option<Token>), ScanError> {
    match (state, CharClass::of(c, options.digits)) {
        (_, CharClass::Other) => Err(ScanError::unexpected_character(c, position)),
        (ScanState::Idle, CharClass::Whitespace) => Ok((ScanState::Idle, None)),
        (ScanState::Idle, CharClass::Digit) => Ok((
            ScanState::Accumulating {
                buffer: String::from(c),
                start: position,
            },
            None,
        )),
        (ScanState::Accumulating { mut buffer, start }, CharClass::Digit) => {
            buffer.push(c);
            Ok((ScanState::Accumulating { buffer, start }, None))
        },
        (ScanState::Accumulating { buffer, start }, CharClass::Whitespace) => {
            let token = finalize(buffer, start, position, options)?;
            Ok((ScanState::Idle, Some(token)))
        },
    }
}

/// Ends a line whose end-of-line boundary is at `eol`.
///
/// An idle line finishes cleanly. A pending literal is finalized exactly as
/// if whitespace had followed it.
pub fn finish(
    state: ScanState,
    eol: Position,
    options: &ScanOptions,
) -> Result<Option<Token>, ScanError> {
    match state {
        ScanState::Idle => Ok(None),
        ScanState::Accumulating { buffer, start } => {
            finalize(buffer, start, eol, options).map(Some)
        },
    }
}

/// Parses a completed digit run; `end` is the position that terminated it.
fn finalize(
    buffer: String,
    start: Position,
    end: Position,
    options: &ScanOptions,
) -> Result<Token, ScanError> {
    let value = match buffer.parse::<i64>() {
        Ok(value) => value,
        Err(_) => return Err(ScanError::illegal_number_literal(buffer, end)),
    };

    let span = Span::new(start, end);
    Ok(if options.retain_text {
        Token::with_text(value, span, buffer)
    } else {
        Token::new(value, span)
    })
}
