//! Identifier and keyword lexing.

use qlc_util::{LexError, LexResult};

use super::Scanned;
use crate::classify::{is_digit, is_ident_continue, is_letter};
use crate::cursor::Cursor;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

/// Scans an identifier starting at `start`.
///
/// Consumes the longest run of letters, digits and underscores. The first
/// code point must be a letter (which includes `*`). Keyword classification
/// is left to the caller.
///
/// # Errors
///
/// Returns an invalid-identifier error at `start` if the first code point is
/// a digit, or is not a letter at all.
///
/// # Example
///
/// ```
/// use qlc_lex::lexer::scan_identifier_or_keyword;
///
/// let chars: Vec<char> = "a_name_1, a_name_2".chars().collect();
/// let scanned = scan_identifier_or_keyword(&chars, 0).unwrap();
/// assert_eq!(scanned.end, 8);
/// assert_eq!(scanned.text, "a_name_1");
/// ```
pub fn scan_identifier_or_keyword(chars: &[char], start: usize) -> LexResult<Scanned> {
    let mut cursor = Cursor::at(chars, start);

    match cursor.current() {
        Some(c) if is_letter(c) => cursor.advance(),
        Some(c) if is_digit(c) => {
            return Err(LexError::invalid_identifier(
                "identifier cannot start with a digit",
                start,
            ))
        },
        _ => {
            return Err(LexError::invalid_identifier(
                "identifier must start with a letter",
                start,
            ))
        },
    }

    while cursor.current().is_some_and(is_ident_continue) {
        cursor.advance();
    }

    Ok(Scanned::new(cursor.position(), cursor.text_from(start)))
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword at the cursor.
    ///
    /// # Returns
    ///
    /// A keyword token (e.g. [`TokenKind::Select`]) or [`TokenKind::Identifier`].
    pub fn lex_identifier(&mut self) -> LexResult<Token> {
        let Scanned { end, text } =
            scan_identifier_or_keyword(self.cursor.chars(), self.cursor.position())?;
        self.cursor.advance_to(end);

        let kind = keyword_from_ident(&text).unwrap_or(TokenKind::Identifier);
        Ok(Token::new(kind, text))
    }
}
