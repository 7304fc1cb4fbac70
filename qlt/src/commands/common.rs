//! Common types and utilities for qlt commands.
//!
//! This module provides the output format shared by all commands and the
//! token writer both `tokenize` and `repl` print through.

use std::io::Write;

use clap::ValueEnum;
use qlc_lex::{Token, TokenKind};
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND "text"` line per token
    #[default]
    Text,
    /// A JSON array of `{ "kind", "text" }` objects
    Json,
}

/// Serialized form of a single token.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind().name(),
            text: token.text(),
        }
    }
}

// ============================================================================
// Token Output
// ============================================================================

/// Write `tokens` to `out` in the requested format.
///
/// The end-of-input token is dropped unless `show_end_of_input` is set.
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[Token],
    format: OutputFormat,
    show_end_of_input: bool,
) -> Result<()> {
    let visible = tokens
        .iter()
        .filter(|token| show_end_of_input || token.kind() != TokenKind::EndOfInput);

    match format {
        OutputFormat::Text => {
            for token in visible {
                writeln!(out, "{token}")?;
            }
        }
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = visible.map(TokenRecord::from).collect();
            serde_json::to_writer(&mut *out, &records)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when neither a query nor a file was given.
    pub const NO_QUERY: &str = "No query given: pass a QUERY argument or --file <PATH>";

    /// Error when a query file cannot be read.
    pub const READ_QUERY_FILE: &str = "Failed to read query file";

    /// Error when init would overwrite a configuration file.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force):";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tokens: &[Token], format: OutputFormat, show_eof: bool) -> String {
        let mut out = Vec::new();
        write_tokens(&mut out, tokens, format, show_eof).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample() -> Vec<Token> {
        qlc_lex::tokenize("select * from t").unwrap()
    }

    #[test]
    fn test_text_output() {
        assert_eq!(
            render(&sample(), OutputFormat::Text, true),
            "SELECT \"select\"\nIDENTIFIER \"*\"\nFROM \"from\"\nIDENTIFIER \"t\"\nEND_OF_INPUT \"\"\n"
        );
    }

    #[test]
    fn test_text_output_hides_end_of_input() {
        let text = render(&sample(), OutputFormat::Text, false);
        assert!(!text.contains("END_OF_INPUT"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_json_output() {
        let tokens = qlc_lex::tokenize("a = 'b'").unwrap();
        assert_eq!(
            render(&tokens, OutputFormat::Json, false),
            "[{\"kind\":\"IDENTIFIER\",\"text\":\"a\"},{\"kind\":\"EQ\",\"text\":\"=\"},{\"kind\":\"STRING\",\"text\":\"b\"}]\n"
        );
    }

    #[test]
    fn test_json_output_parses_back() {
        let json = render(&sample(), OutputFormat::Json, true);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[4]["kind"], "END_OF_INPUT");
        assert_eq!(items[4]["text"], "");
    }

    #[test]
    fn test_output_format_serde_names() {
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
        let parsed: OutputFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, OutputFormat::Text);
    }
}
