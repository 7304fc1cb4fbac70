//! Punctuation lexing.
//!
//! Every punctuation token is a single character. Compound comparisons are
//! not fused: `<=` is `Lt` then `Eq`, `<>` is `Lt` then `Gt`.

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Maps a punctuation character to its token kind.
///
/// # Example
///
/// ```
/// use qlc_lex::lexer::punctuation_kind;
/// use qlc_lex::TokenKind;
///
/// assert_eq!(punctuation_kind(','), Some(TokenKind::Comma));
/// assert_eq!(punctuation_kind('!'), None);
/// ```
pub fn punctuation_kind(c: char) -> Option<TokenKind> {
    match c {
        ',' => Some(TokenKind::Comma),
        '=' => Some(TokenKind::Eq),
        '<' => Some(TokenKind::Lt),
        '>' => Some(TokenKind::Gt),
        _ => None,
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a single punctuation character of the given kind.
    pub fn lex_punct(&mut self, c: char, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::new(kind, c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_kinds() {
        assert_eq!(punctuation_kind(','), Some(TokenKind::Comma));
        assert_eq!(punctuation_kind('='), Some(TokenKind::Eq));
        assert_eq!(punctuation_kind('<'), Some(TokenKind::Lt));
        assert_eq!(punctuation_kind('>'), Some(TokenKind::Gt));
    }

    #[test]
    fn test_unrecognized_punctuation() {
        for c in ['!', ';', '(', ')', '.', '\'', '"', '_', '-', '+'] {
            assert_eq!(punctuation_kind(c), None, "{c:?}");
        }
    }

    #[test]
    fn test_lex_punct_advances_one() {
        let chars: Vec<char> = "<=".chars().collect();
        let mut lexer = Lexer::new(&chars);
        let token = lexer.lex_punct('<', TokenKind::Lt);
        assert_eq!(token, Token::new(TokenKind::Lt, "<"));
        assert_eq!(lexer.position(), 1);
    }
}
