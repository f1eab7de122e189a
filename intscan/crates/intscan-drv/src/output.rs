//! Rendering of scan results.
//!
//! Token listings go to stdout; scan errors are rendered as diagnostics with
//! a source snippet and go to stderr.

use std::fmt::Write as _;

use intscan_lex::{split_lines, ScanError, ScanErrorKind, Token};
use intscan_util::SourceSnippet;
use serde::Serialize;

use crate::commands::common::OutputFormat;
use crate::error::Result;

/// JSON shape of one token.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    value: i64,
    text: Option<&'a str>,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let position = token.position();
        Self {
            value: token.value,
            text: token.text(),
            line: position.line,
            column: position.column,
        }
    }
}

/// Render `tokens` in the requested format.
pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(tokens)),
        OutputFormat::Json => render_json(tokens),
    }
}

/// One `line:column<TAB>value` row per token.
pub fn render_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let position = token.position();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}:{}\t{}", position.line, position.column, token.value);
    }
    out
}

/// A pretty-printed JSON array of token objects.
pub fn render_json(tokens: &[Token]) -> Result<String> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    let mut out = serde_json::to_string_pretty(&records)?;
    out.push('\n');
    Ok(out)
}

/// Render a scan error against the text it came from.
///
/// The first line carries the error message unchanged. A snippet with a
/// caret under the offending column follows when the position lies inside
/// `source`.
pub fn render_scan_error(source: &str, err: &ScanError) -> String {
    let lines: Vec<&str> = split_lines(source).into_iter().map(|l| l.text).collect();
    let label = match err.kind {
        ScanErrorKind::UnexpectedCharacter(_) => "unexpected character",
        ScanErrorKind::IllegalNumberLiteral(_) => "literal ends here",
    };

    let diagnostic = err.to_diagnostic();
    match SourceSnippet::at(&lines, err.position) {
        Ok(snippet) => diagnostic.with_snippet(snippet.with_label(label)).to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "no snippet for scan error");
            diagnostic.to_string()
        },
    }
}
