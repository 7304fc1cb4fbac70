//! Repl command implementation.
//!
//! Reads queries line by line and tokenizes each one on its own, so a
//! malformed line is reported and the session moves on to the next.

use std::io::{BufRead, Write};

use crate::commands::common::{write_tokens, OutputFormat};
use crate::error::{QltError, Result};

/// Arguments for the repl command.
#[derive(Debug, Clone, Default)]
pub struct ReplArgs {
    /// Prompt written before each line, if any.
    pub prompt: Option<String>,
    /// Echo each query before its tokens.
    pub echo: bool,
    /// How tokens are printed.
    pub format: OutputFormat,
    /// Print the trailing end-of-input token.
    pub show_end_of_input: bool,
}

/// Counts reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplSummary {
    /// Queries that were tokenized, successfully or not.
    pub statements: usize,
    /// Queries that failed to lex.
    pub failures: usize,
}

/// Words that end the session.
const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// Repl command handler.
pub struct ReplCommand {
    args: ReplArgs,
}

impl ReplCommand {
    /// Create a new ReplCommand.
    pub fn new(args: ReplArgs) -> Self {
        Self { args }
    }

    /// Execute the session until `exit`, `quit` or end of input.
    pub fn run<R, W, E>(&self, mut input: R, out: &mut W, err: &mut E) -> Result<ReplSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = ReplSummary::default();
        let mut line = String::new();

        loop {
            self.write_prompt(out)?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let query = line.trim_end_matches(['\n', '\r']);
            if query.trim().is_empty() {
                continue;
            }
            if EXIT_COMMANDS.contains(&query.trim()) {
                break;
            }

            summary.statements += 1;
            if let Err(e) = self.run_statement(query, out) {
                if !matches!(e, QltError::Lex { .. }) {
                    return Err(e);
                }
                summary.failures += 1;
                writeln!(err, "{e}")?;
            }
        }

        tracing::debug!(
            statements = summary.statements,
            failures = summary.failures,
            "repl session ended"
        );
        Ok(summary)
    }

    fn write_prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(prompt) = &self.args.prompt {
            write!(out, "{prompt}")?;
            out.flush()?;
        }
        Ok(())
    }

    fn run_statement<W: Write>(&self, query: &str, out: &mut W) -> Result<()> {
        let tokens = qlc_lex::tokenize(query).map_err(|e| QltError::lex(e, query))?;
        if self.args.echo {
            writeln!(out, "{query}")?;
        }
        write_tokens(out, &tokens, self.args.format, self.args.show_end_of_input)
    }
}

/// Run the repl command.
pub fn run_repl<R, W, E>(args: ReplArgs, input: R, out: &mut W, err: &mut E) -> Result<ReplSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    ReplCommand::new(args).run(input, out, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(args: ReplArgs, input: &str) -> (ReplSummary, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run_repl(args, input.as_bytes(), &mut out, &mut err).unwrap();
        (
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_repl_tokenizes_each_line() {
        let (summary, out, err) = session(ReplArgs::default(), "select a\nfrom b\n");
        assert_eq!(summary, ReplSummary { statements: 2, failures: 0 });
        assert_eq!(out, "SELECT \"select\"\nIDENTIFIER \"a\"\nFROM \"from\"\nIDENTIFIER \"b\"\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_repl_continues_after_error() {
        let (summary, out, err) = session(ReplArgs::default(), "x = 'open\ny > 2\n");
        assert_eq!(summary, ReplSummary { statements: 2, failures: 1 });
        assert!(err.starts_with("error[E1003]: unterminated quote"));
        assert!(out.contains("GT \">\""));
        assert!(out.contains("NUMBER \"2\""));
    }

    #[test]
    fn test_repl_skips_blank_lines() {
        let (summary, _, _) = session(ReplArgs::default(), "\n   \n\t\nselect\n");
        assert_eq!(summary.statements, 1);
    }

    #[test]
    fn test_repl_stops_at_exit() {
        let (summary, out, _) = session(ReplArgs::default(), "a\nquit\nb\n");
        assert_eq!(summary.statements, 1);
        assert!(!out.contains("\"b\""));

        let (summary, _, _) = session(ReplArgs::default(), "  exit  \nb\n");
        assert_eq!(summary.statements, 0);
    }

    #[test]
    fn test_repl_strips_crlf() {
        let (summary, out, err) = session(ReplArgs::default(), "select x\r\n");
        assert_eq!(summary.failures, 0, "{err}");
        assert!(out.contains("IDENTIFIER \"x\""));
    }

    #[test]
    fn test_repl_last_line_without_newline() {
        let (summary, out, _) = session(ReplArgs::default(), "a\nb");
        assert_eq!(summary.statements, 2);
        assert!(out.ends_with("IDENTIFIER \"b\"\n"));
    }

    #[test]
    fn test_repl_prompt_and_echo() {
        let args = ReplArgs {
            prompt: Some("qlc> ".to_string()),
            echo: true,
            ..ReplArgs::default()
        };
        let (_, out, _) = session(args, "a\n");
        assert_eq!(out, "qlc> a\nIDENTIFIER \"a\"\nqlc> ");
    }

    #[test]
    fn test_repl_shows_end_of_input_when_asked() {
        let args = ReplArgs {
            show_end_of_input: true,
            ..ReplArgs::default()
        };
        let (_, out, _) = session(args, "a\n");
        assert!(out.ends_with("END_OF_INPUT \"\"\n"));
    }
}
