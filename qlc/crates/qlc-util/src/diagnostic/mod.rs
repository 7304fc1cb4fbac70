//! Diagnostic module - rendering lexical errors for humans.
//!
//! A [`Diagnostic`] is the display form of a [`LexError`]: it carries the
//! stable [`DiagnosticCode`] of the error kind and renders the offending
//! source line with a caret under the faulty character.
//!
//! # Examples
//!
//! ```
//! use qlc_util::diagnostic::Diagnostic;
//! use qlc_util::LexError;
//!
//! let err = LexError::invalid_number("number can only have one period", 4);
//! let rendered = Diagnostic::from(&err).render("10.4.5");
//! assert!(rendered.starts_with("error[E1002]: number can only have one period"));
//! ```

mod codes;

pub use codes::{
    DiagnosticCode, E_LEXER_INVALID_IDENTIFIER, E_LEXER_INVALID_NUMBER, E_LEXER_INVALID_STRING,
};

use std::fmt;

use crate::error::LexError;
use crate::source::{LineIndex, Location};

/// A lexical error prepared for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Code of the error kind
    pub code: DiagnosticCode,
    /// Main diagnostic message
    pub message: String,
    /// Code-point offset of the fault
    pub offset: usize,
}

impl Diagnostic {
    /// Resolve the fault offset against `source`.
    pub fn location(&self, source: &str) -> Location {
        LineIndex::new(source).location(self.offset)
    }

    /// Render the diagnostic against the source it was produced from.
    ///
    /// ```text
    /// error[E1002]: number can only have one period
    ///  --> 1:5
    ///   |
    /// 1 | 10.4.5
    ///   |     ^
    /// ```
    pub fn render(&self, source: &str) -> String {
        let index = LineIndex::new(source);
        let Location { line, column } = index.location(self.offset);
        // one column per code point, so tabs and other controls print as a space
        let text: String = index
            .line_text(line)
            .unwrap_or_default()
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        let gutter = " ".repeat(line.to_string().len());

        [
            self.to_string(),
            format!("{gutter}--> {line}:{column}"),
            format!("{gutter} |"),
            format!("{line} | {text}"),
            format!("{gutter} | {}^", " ".repeat(column - 1)),
        ]
        .join("\n")
    }
}

impl From<&LexError> for Diagnostic {
    fn from(err: &LexError) -> Self {
        Self {
            code: err.kind().code(),
            message: err.message().to_string(),
            offset: err.offset(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexErrorKind;

    #[test]
    fn test_from_lex_error() {
        let err = LexError::invalid_string("unterminated quote", 3);
        let diag = Diagnostic::from(&err);
        assert_eq!(diag.code, LexErrorKind::InvalidString.code());
        assert_eq!(diag.message, "unterminated quote");
        assert_eq!(diag.offset, 3);
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::from(&LexError::invalid_identifier(
            "identifier cannot start with a digit",
            0,
        ));
        assert_eq!(
            diag.to_string(),
            "error[E1001]: identifier cannot start with a digit"
        );
    }

    #[test]
    fn test_render_single_line() {
        let err = LexError::invalid_number("number can only have one period", 4);
        let rendered = Diagnostic::from(&err).render("10.4.5");
        assert_eq!(
            rendered,
            "error[E1002]: number can only have one period\n --> 1:5\n  |\n1 | 10.4.5\n  |     ^"
        );
    }

    #[test]
    fn test_render_second_line() {
        let source = "select a\nfrom 9x";
        let err = LexError::invalid_number("invalid char for number `x`", 15);
        let rendered = Diagnostic::from(&err).render(source);
        assert!(rendered.contains(" --> 2:7"));
        assert!(rendered.contains("2 | from 9x"));
        assert!(rendered.ends_with("  |       ^"));
    }

    #[test]
    fn test_render_tab_keeps_caret_aligned() {
        let source = "select\t10.4.5";
        let err = LexError::invalid_number("number can only have one period", 11);
        let rendered = Diagnostic::from(&err).render(source);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], " --> 1:12");
        assert_eq!(lines[3], "1 | select 10.4.5");
        assert!(!lines[3].contains('\t'));

        let code_col = lines[3].find("10.4.5").unwrap() + 4;
        let caret_col = lines[4].find('^').unwrap();
        assert_eq!(code_col, caret_col);
    }

    #[test]
    fn test_render_blanks_carriage_return() {
        let err = LexError::invalid_identifier("unexpected character `\\r`", 1);
        let rendered = Diagnostic::from(&err).render("a\rb");
        assert!(!rendered.contains('\r'));
        assert!(rendered.contains("1 | a b"));
        assert!(rendered.ends_with("  |  ^"));
    }

    #[test]
    fn test_render_at_end_of_input() {
        let err = LexError::invalid_string("unterminated quote", 0);
        let diag = Diagnostic::from(&err);
        assert_eq!(diag.location("'abc"), Location { line: 1, column: 1 });
        assert!(diag.render("'abc").ends_with("  | ^"));
    }
}
