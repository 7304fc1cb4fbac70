//! Number literal lexing.
//!
//! Numbers are plain decimals with at most one period. The literal text is
//! kept exactly as written, so `007` and `12.` survive unchanged.

use qlc_util::{LexError, LexResult};

use super::punct::punctuation_kind;
use super::quoted_char;
use super::Scanned;
use crate::classify::{is_digit, is_whitespace};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Scans a decimal literal starting at `start`.
///
/// The literal ends at whitespace, end of input, or one of the punctuation
/// characters the tokenizer recognizes (`,` `=` `<` `>`). None of these are
/// consumed.
///
/// # Errors
///
/// Returns an invalid-number error when:
/// - the first code point is not a digit (reported at `start`)
/// - a second period appears (reported at that period)
/// - any other character follows the digits (reported at that character)
///
/// # Example
///
/// ```
/// use qlc_lex::lexer::scan_number;
///
/// let chars: Vec<char> = "123 = acolumn".chars().collect();
/// let scanned = scan_number(&chars, 0).unwrap();
/// assert_eq!(scanned.end, 3);
/// assert_eq!(scanned.text, "123");
/// ```
pub fn scan_number(chars: &[char], start: usize) -> LexResult<Scanned> {
    let mut cursor = Cursor::at(chars, start);

    if !cursor.current().is_some_and(is_digit) {
        return Err(LexError::invalid_number(
            "number cannot start with a non digit",
            start,
        ));
    }

    let mut has_period = false;

    while let Some(c) = cursor.current() {
        if is_digit(c) {
            cursor.advance();
        } else if c == '.' {
            if has_period {
                return Err(LexError::invalid_number(
                    "number can only have one period",
                    cursor.position(),
                ));
            }
            has_period = true;
            cursor.advance();
        } else if is_whitespace(c) || punctuation_kind(c).is_some() {
            break;
        } else {
            return Err(LexError::invalid_number(
                format!("invalid char for number `{}`", quoted_char(c)),
                cursor.position(),
            ));
        }
    }

    Ok(Scanned::new(cursor.position(), cursor.text_from(start)))
}

impl<'a> Lexer<'a> {
    /// Lexes a number literal at the cursor.
    pub fn lex_number(&mut self) -> LexResult<Token> {
        let Scanned { end, text } = scan_number(self.cursor.chars(), self.cursor.position())?;
        self.cursor.advance_to(end);
        Ok(Token::new(TokenKind::Number, text))
    }
}
