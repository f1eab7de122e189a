//! Character classification for the scanner.
//!
//! The scanner only ever needs to know whether a character is whitespace,
//! a digit, or something else, plus which characters end a line.

/// Which characters count as digits of an integer literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigitSet {
    /// `0`-`9` only.
    #[default]
    Ascii,
    /// Any Unicode numeric character (`٣`, `½`, `Ⅻ`, ...).
    ///
    /// Literals built from non-ASCII numerics are accepted as digits but
    /// fail base-10 parsing, so they surface as illegal number literals
    /// rather than unexpected characters.
    Unicode,
}

impl DigitSet {
    /// Checks if `c` is a digit under this set.
    ///
    /// # Example
    ///
    /// ```
    /// use intscan_lex::unicode::DigitSet;
    ///
    /// assert!(DigitSet::Ascii.contains('7'));
    /// assert!(!DigitSet::Ascii.contains('٣'));
    /// assert!(DigitSet::Unicode.contains('٣'));
    /// ```
    #[inline]
    pub fn contains(self, c: char) -> bool {
        match self {
            DigitSet::Ascii => c.is_ascii_digit(),
            DigitSet::Unicode => c.is_numeric(),
        }
    }
}

/// Coarse class of a character inside a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Separates literals; never part of a token.
    Whitespace,
    /// Starts or continues a literal.
    Digit,
    /// Anything else; always an error.
    Other,
}

impl CharClass {
    /// Classifies `c` with the given digit set.
    ///
    /// Whitespace is checked first, so a character can never be both.
    ///
    /// # Example
    ///
    /// ```
    /// use intscan_lex::unicode::{CharClass, DigitSet};
    ///
    /// assert_eq!(CharClass::of('\t', DigitSet::Ascii), CharClass::Whitespace);
    /// assert_eq!(CharClass::of('4', DigitSet::Ascii), CharClass::Digit);
    /// assert_eq!(CharClass::of('-', DigitSet::Ascii), CharClass::Other);
    /// ```
    #[inline]
    pub fn of(c: char, digits: DigitSet) -> Self {
        if c.is_whitespace() {
            CharClass::Whitespace
        } else if digits.contains(c) {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// Checks if `c` ends a line.
///
/// Covers LF and CR (CR LF is folded by the splitter) and the rest of the
/// Unicode newline set: VT, FF, NEL, LINE SEPARATOR, PARAGRAPH SEPARATOR.
///
/// # Example
///
/// ```
/// use intscan_lex::unicode::is_line_break;
///
/// assert!(is_line_break('\n'));
/// assert!(is_line_break('\r'));
/// assert!(is_line_break('\u{2028}'));
/// assert!(!is_line_break(' '));
/// ```
#[inline]
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
