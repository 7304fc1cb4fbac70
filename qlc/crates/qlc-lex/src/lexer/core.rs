//! Core lexer implementation.
//!
//! This module contains the Lexer struct and the tokenize loop that
//! dispatches on the current code point.

use qlc_util::{LexError, LexResult};
use tracing::{debug, trace};

use super::punct::punctuation_kind;
use super::quoted_char;
use crate::classify::{is_digit, is_letter, is_whitespace};
use crate::cursor::Cursor;
use crate::token::Token;

/// Lexer for the query dialect.
///
/// A lexer owns its cursor and output exclusively. [`Lexer::tokenize`]
/// consumes the lexer, so each run gets a fresh cursor and a lexer cannot be
/// driven twice.
///
/// # Example
///
/// ```
/// use qlc_lex::{Lexer, TokenKind};
///
/// let chars: Vec<char> = "select * from t".chars().collect();
/// let tokens = Lexer::new(&chars).tokenize().unwrap();
/// assert_eq!(tokens[0].kind(), TokenKind::Select);
/// assert_eq!(tokens.last().unwrap().kind(), TokenKind::EndOfInput);
/// ```
pub struct Lexer<'a> {
    /// Code-point cursor into the query.
    pub(super) cursor: Cursor<'a>,

    /// Tokens produced so far.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over a decoded query.
    pub fn new(chars: &'a [char]) -> Self {
        Self {
            cursor: Cursor::new(chars),
            tokens: Vec::new(),
        }
    }

    /// Tokenizes the whole query.
    ///
    /// On success the sequence always ends with exactly one end-of-input
    /// token. The first error aborts the run and is returned unchanged; no
    /// partial sequence is exposed.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        while let Some(c) = self.cursor.current() {
            if is_whitespace(c) {
                self.cursor.advance();
                continue;
            }

            let start = self.cursor.position();
            let token = self.next_token(c).inspect_err(|err| {
                debug!(kind = %err.kind(), offset = err.offset(), "lexing failed");
            })?;
            trace!(kind = %token.kind(), offset = start, text = token.text(), "token");
            self.tokens.push(token);
        }

        self.tokens.push(Token::end_of_input());
        debug!(tokens = self.tokens.len(), "tokenized query");
        Ok(self.tokens)
    }

    /// Lexes the token starting with `c` at the cursor.
    fn next_token(&mut self, c: char) -> LexResult<Token> {
        if let Some(kind) = punctuation_kind(c) {
            return Ok(self.lex_punct(c, kind));
        }

        match c {
            '\'' => self.lex_string(),
            c if is_letter(c) => self.lex_identifier(),
            c if is_digit(c) => self.lex_number(),
            c => Err(LexError::invalid_identifier(
                format!("unexpected character `{}`", quoted_char(c)),
                self.cursor.position(),
            )),
        }
    }

    /// Returns the current code-point offset.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Tokenizes a query string.
///
/// # Example
///
/// ```
/// use qlc_lex::{tokenize, Token, TokenKind};
///
/// let tokens = tokenize("select * from testtable").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::new(TokenKind::Select, "select"),
///         Token::new(TokenKind::Identifier, "*"),
///         Token::new(TokenKind::From, "from"),
///         Token::new(TokenKind::Identifier, "testtable"),
///         Token::end_of_input(),
///     ]
/// );
/// ```
pub fn tokenize(query: &str) -> LexResult<Vec<Token>> {
    let chars: Vec<char> = query.chars().collect();
    Lexer::new(&chars).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use qlc_util::LexErrorKind;

    fn kinds(query: &str) -> Vec<TokenKind> {
        tokenize(query)
            .expect("query should lex")
            .iter()
            .map(Token::kind)
            .collect()
    }

    #[test]
    fn test_select_star() {
        let tokens = tokenize("select * from testtable").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Select, "select"),
                Token::new(TokenKind::Identifier, "*"),
                Token::new(TokenKind::From, "from"),
                Token::new(TokenKind::Identifier, "testtable"),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_where_clause() {
        let tokens = tokenize("select name, age from people where age > 21").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Select, "select"),
                Token::new(TokenKind::Identifier, "name"),
                Token::new(TokenKind::Comma, ","),
                Token::new(TokenKind::Identifier, "age"),
                Token::new(TokenKind::From, "from"),
                Token::new(TokenKind::Identifier, "people"),
                Token::new(TokenKind::Where, "where"),
                Token::new(TokenKind::Identifier, "age"),
                Token::new(TokenKind::Gt, ">"),
                Token::new(TokenKind::Number, "21"),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_string_comparison() {
        let tokens = tokenize("where name='bob'").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Where, "where"),
                Token::new(TokenKind::Identifier, "name"),
                Token::new(TokenKind::Eq, "="),
                Token::new(TokenKind::String, "bob"),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_compound_operators_are_split() {
        assert_eq!(
            kinds("a <= 1"),
            [
                TokenKind::Identifier,
                TokenKind::Lt,
                TokenKind::Eq,
                TokenKind::Number,
                TokenKind::EndOfInput
            ]
        );
        assert_eq!(
            kinds("'x'<>b"),
            [
                TokenKind::String,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Identifier,
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(tokenize("").unwrap(), vec![Token::end_of_input()]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(tokenize(" \n\t  ").unwrap(), vec![Token::end_of_input()]);
    }

    #[test]
    fn test_bang_is_unexpected() {
        let err = tokenize("a != 1").unwrap_err();
        assert!(err.is(LexErrorKind::InvalidIdentifier));
        assert_eq!(err.offset(), 2);
        assert_eq!(err.message(), "unexpected character `!`");
    }

    #[test]
    fn test_control_character_is_escaped_in_message() {
        let err = tokenize("a\rb").unwrap_err();
        assert!(err.is(LexErrorKind::InvalidIdentifier));
        assert_eq!(err.offset(), 1);
        assert_eq!(err.message(), "unexpected character `\\r`");
        assert!(!err.message().contains('\r'));
    }

    #[test]
    fn test_error_offset_is_code_points() {
        let err = tokenize("'é' 1.2.3").unwrap_err();
        assert!(err.is(LexErrorKind::InvalidNumber));
        assert_eq!(err.offset(), 7);
    }

    #[test]
    fn test_sub_scanner_error_propagates_unchanged() {
        let chars: Vec<char> = "x = 10.4.5".chars().collect();
        let direct = crate::lexer::scan_number(&chars, 4).unwrap_err();
        let via_driver = tokenize("x = 10.4.5").unwrap_err();
        assert_eq!(direct, via_driver);
    }

    #[test]
    fn test_position_starts_at_zero() {
        let chars: Vec<char> = "select".chars().collect();
        let lexer = Lexer::new(&chars);
        assert_eq!(lexer.position(), 0);
    }
}
