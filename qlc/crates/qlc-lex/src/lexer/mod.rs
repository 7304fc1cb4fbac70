//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Lexer struct and the tokenize loop
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Decimal literal scanning
//! - `string` - Single-quoted literal scanning
//! - `punct` - Single-character punctuation
//!
//! The sub-scanners are free functions over the decoded query. Each takes a
//! start offset and returns the offset just past what it consumed, which the
//! tokenizer applies to its own cursor.

mod core;
mod identifier;
mod number;
mod punct;
mod string;

pub use self::core::{tokenize, Lexer};
pub use identifier::scan_identifier_or_keyword;
pub use number::scan_number;
pub use punct::punctuation_kind;
pub use string::scan_string;

/// Successful result of a sub-scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scanned {
    /// Offset just past the consumed input.
    pub end: usize,
    /// Decoded text of the lexeme.
    pub text: String,
}

impl Scanned {
    fn new(end: usize, text: String) -> Self {
        Self { end, text }
    }
}

/// Spelling of `c` for diagnostic messages; control characters are escaped.
pub(crate) fn quoted_char(c: char) -> String {
    if c.is_control() {
        c.escape_debug().to_string()
    } else {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_char() {
        assert_eq!(quoted_char('a'), "a");
        assert_eq!(quoted_char('\''), "'");
        assert_eq!(quoted_char('é'), "é");
        assert_eq!(quoted_char('\r'), "\\r");
        assert_eq!(quoted_char('\u{7}'), "\\u{7}");
    }
}
