//! Tokenize command implementation.
//!
//! Lexes a single query, taken from the command line or read from a file,
//! and prints its token stream.

use std::io::Write;
use std::path::PathBuf;

use crate::commands::common::{error_messages, write_tokens, OutputFormat};
use crate::error::{QltError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Query text given inline.
    pub query: Option<String>,
    /// File holding the query text.
    pub file: Option<PathBuf>,
    /// How tokens are printed.
    pub format: OutputFormat,
    /// Print the trailing end-of-input token.
    pub show_end_of_input: bool,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
}

impl TokenizeCommand {
    /// Create a new TokenizeCommand.
    pub fn new(args: TokenizeArgs) -> Self {
        Self { args }
    }

    /// Execute the command, writing tokens to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let query = self.read_query()?;
        tracing::debug!(chars = query.chars().count(), "tokenizing query");

        let tokens = qlc_lex::tokenize(&query).map_err(|e| QltError::lex(e, &query))?;
        write_tokens(out, &tokens, self.args.format, self.args.show_end_of_input)
    }

    /// Resolve the query text from the inline argument or the file.
    ///
    /// CRLF line endings in a file are read as plain newlines.
    fn read_query(&self) -> Result<String> {
        match (&self.args.query, &self.args.file) {
            (Some(query), _) => Ok(query.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .map(|text| text.replace("\r\n", "\n"))
                .map_err(|e| {
                    QltError::FileOperation(format!(
                        "{} {}: {}",
                        error_messages::READ_QUERY_FILE,
                        path.display(),
                        e
                    ))
                }),
            (None, None) => Err(QltError::Validation(error_messages::NO_QUERY.to_string())),
        }
    }
}

/// Run the tokenize command.
pub fn run_tokenize<W: Write>(args: TokenizeArgs, out: &mut W) -> Result<()> {
    TokenizeCommand::new(args).run(out)
}
