//! String literal lexing.
//!
//! Strings are single-quoted and taken verbatim: there are no escape
//! sequences, so a backslash is stored as-is and a string cannot contain `'`.

use qlc_util::{LexError, LexResult};

use super::Scanned;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Scans a single-quoted string literal starting at `start`.
///
/// The closing quote is consumed but not included in the text. Nothing after
/// the closing quote is inspected.
///
/// # Errors
///
/// Returns an invalid-string error at `start` if the literal does not open
/// with `'` or the input ends before the closing quote.
///
/// # Example
///
/// ```
/// use qlc_lex::lexer::scan_string;
///
/// let chars: Vec<char> = "'a value'=somecolumn".chars().collect();
/// let scanned = scan_string(&chars, 0).unwrap();
/// assert_eq!(scanned.end, 9);
/// assert_eq!(scanned.text, "a value");
/// ```
pub fn scan_string(chars: &[char], start: usize) -> LexResult<Scanned> {
    let mut cursor = Cursor::at(chars, start);

    if cursor.current() != Some('\'') {
        return Err(LexError::invalid_string(
            "string value must be single quoted",
            start,
        ));
    }
    cursor.advance();

    let mut content = String::new();

    loop {
        match cursor.current() {
            None => return Err(LexError::invalid_string("unterminated quote", start)),
            Some('\'') => {
                cursor.advance();
                return Ok(Scanned::new(cursor.position(), content));
            },
            Some(c) => {
                content.push(c);
                cursor.advance();
            },
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal at the cursor.
    pub fn lex_string(&mut self) -> LexResult<Token> {
        let Scanned { end, text } = scan_string(self.cursor.chars(), self.cursor.position())?;
        self.cursor.advance_to(end);
        Ok(Token::new(TokenKind::String, text))
    }
}
