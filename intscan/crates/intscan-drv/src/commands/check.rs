//! Check command implementation.
//!
//! Validates the input without listing tokens.

use std::path::PathBuf;

use intscan_lex::{ScanOptions, Scanner};

use crate::commands::common::{read_source, report_scan_error};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Input file; stdin when `None` or `-`.
    pub input: Option<PathBuf>,
    /// Scanner options.
    pub options: ScanOptions,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Validate the input, returning the number of tokens it holds.
    ///
    /// Tokens are counted without keeping their literal text.
    pub fn run(&self) -> Result<usize> {
        let source = read_source(self.args.input.as_deref())?;
        let options = ScanOptions {
            retain_text: false,
            ..self.args.options
        };

        let mut count = 0;
        for token in Scanner::new(&source.text, options) {
            token.map_err(|err| report_scan_error(&source, err))?;
            count += 1;
        }

        println!("ok: {} token(s)", count);
        Ok(count)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrvError;
    use intscan_lex::DigitSet;
    use tempfile::TempDir;

    fn check(text: &str, options: ScanOptions) -> Result<usize> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, text).unwrap();
        CheckCommand::new(CheckArgs {
            input: Some(path),
            options,
        })
        .execute()
    }

    #[test]
    fn test_check_counts_tokens() {
        assert_eq!(check("1 2 3\n\n4", ScanOptions::default()).unwrap(), 4);
    }

    #[test]
    fn test_check_counts_with_text_retention_requested() {
        let options = ScanOptions {
            retain_text: true,
            ..ScanOptions::default()
        };
        assert_eq!(check("007 1", options).unwrap(), 2);
    }

    #[test]
    fn test_check_empty_input() {
        assert_eq!(check("", ScanOptions::default()).unwrap(), 0);
    }

    #[test]
    fn test_check_overflow() {
        let err = check("9223372036854775808", ScanOptions::default()).unwrap_err();
        assert!(matches!(err, DrvError::Scan(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_check_unicode_digits() {
        let options = ScanOptions {
            digits: DigitSet::Unicode,
            ..ScanOptions::default()
        };
        let err = check("٣", options).unwrap_err();
        assert_eq!(err.to_string(), "Illegal number literal [٣] at 1:2");
    }
}
