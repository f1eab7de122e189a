//! Scan command implementation.
//!
//! Tokenizes the input and prints the token listing to stdout.

use std::io::Write;
use std::path::PathBuf;

use intscan_lex::{tokenize_with, ScanOptions, Token};
use tracing::info;

use crate::commands::common::{read_source, report_scan_error, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;
use crate::output::render_tokens;

/// Arguments for the scan command.
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    /// Input file; stdin when `None` or `-`.
    pub input: Option<PathBuf>,
    /// Listing format.
    pub format: OutputFormat,
    /// Scanner options.
    pub options: ScanOptions,
}

/// Scan command handler.
pub struct ScanCommand {
    args: ScanArgs,
}

impl ScanCommand {
    /// Scan the input and print its tokens.
    pub fn run(&self) -> Result<Vec<Token>> {
        let source = read_source(self.args.input.as_deref())?;
        let tokens = tokenize_with(&source.text, &self.args.options)
            .map_err(|err| report_scan_error(&source, err))?;

        let rendered = render_tokens(&tokens, self.args.format)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;

        info!(source = %source.name, tokens = tokens.len(), "scan finished");
        Ok(tokens)
    }
}

impl Command for ScanCommand {
    type Args = ScanArgs;
    type Output = Vec<Token>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "scan"
    }
}
