//! Common types and utilities for intscan commands.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use intscan_lex::{DigitSet, ScanError};
use serde::{Deserialize, Serialize};

use crate::error::{DrvError, Result};
use crate::output::render_scan_error;

// ============================================================================
// Option Values
// ============================================================================

/// Token listing format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `line:column<TAB>value` row per token.
    #[default]
    Text,
    /// A JSON array of token objects.
    Json,
}

/// Digit classification, as spelled on the command line and in config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitMode {
    /// `0`-`9` only.
    #[default]
    Ascii,
    /// Any Unicode numeric character.
    Unicode,
}

impl From<DigitMode> for DigitSet {
    fn from(mode: DigitMode) -> Self {
        match mode {
            DigitMode::Ascii => DigitSet::Ascii,
            DigitMode::Unicode => DigitSet::Unicode,
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Scanner input together with a name for messages.
#[derive(Debug, Clone)]
pub struct Source {
    /// Display name: the file path, or `<stdin>`.
    pub name: String,
    /// Full input text.
    pub text: String,
}

/// Returns true when `path` names standard input.
fn is_stdin(path: Option<&Path>) -> bool {
    match path {
        None => true,
        Some(path) => path == Path::new("-"),
    }
}

/// Drops a leading UTF-8 byte order mark.
fn strip_bom(mut text: String) -> String {
    if text.starts_with('\u{FEFF}') {
        text.replace_range(..'\u{FEFF}'.len_utf8(), "");
    }
    text
}

/// Read the whole input from `path`, or from stdin when it is absent or `-`.
///
/// A leading byte order mark is removed, so columns on the first line
/// start after it.
pub fn read_source(path: Option<&Path>) -> Result<Source> {
    let path = match path {
        Some(path) if !is_stdin(Some(path)) => path,
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            return Ok(Source {
                name: "<stdin>".to_string(),
                text: strip_bom(text),
            });
        },
    };

    let text = std::fs::read_to_string(path).map_err(|e| {
        DrvError::FileOperation(format!("cannot read {}: {}", path.display(), e))
    })?;

    Ok(Source {
        name: path.display().to_string(),
        text: strip_bom(text),
    })
}

/// Print a scan error against its source on stderr and wrap it.
///
/// `main` does not print `DrvError::Scan` again.
pub fn report_scan_error(source: &Source, err: ScanError) -> DrvError {
    eprintln!("{}", render_scan_error(&source.text, &err));
    DrvError::Scan(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_digit_mode_into_digit_set() {
        assert_eq!(DigitSet::from(DigitMode::Ascii), DigitSet::Ascii);
        assert_eq!(DigitSet::from(DigitMode::Unicode), DigitSet::Unicode);
    }

    #[test]
    fn test_output_format_from_cli_value() {
        assert_eq!(OutputFormat::from_str("json", true), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("TEXT", true), Ok(OutputFormat::Text));
        assert!(OutputFormat::from_str("xml", true).is_err());
    }

    #[test]
    fn test_stdin_markers() {
        assert!(is_stdin(None));
        assert!(is_stdin(Some(Path::new("-"))));
        assert!(!is_stdin(Some(Path::new("input.txt"))));
    }

    #[test]
    fn test_read_source_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        std::fs::write(&path, "1 2\n").unwrap();

        let source = read_source(Some(&path)).unwrap();
        assert_eq!(source.text, "1 2\n");
        assert!(source.name.ends_with("input.txt"));
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{FEFF}1 2".to_string()), "1 2");
        assert_eq!(strip_bom("1 2".to_string()), "1 2");
        assert_eq!(strip_bom("1\u{FEFF}".to_string()), "1\u{FEFF}");
    }

    #[test]
    fn test_read_source_strips_bom() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bom.txt");
        std::fs::write(&path, "\u{FEFF}7\n").unwrap();

        let source = read_source(Some(&path)).unwrap();
        assert_eq!(source.text, "7\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Some(Path::new("/nonexistent/input.txt"))).unwrap_err();
        assert!(matches!(err, DrvError::FileOperation(_)));
    }
}
