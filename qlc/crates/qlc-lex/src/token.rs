//! Token definitions for the query dialect.

use std::fmt;

/// Kind of a lexical token.
///
/// The set is closed. Comparison operators are single characters only:
/// `<=` lexes as [`TokenKind::Lt`] followed by [`TokenKind::Eq`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `select`
    Select,
    /// Identifier, including the wildcard `*`
    Identifier,
    /// `,`
    Comma,
    /// `from`
    From,
    /// `where`
    Where,
    /// `>`
    Gt,
    /// Decimal literal
    Number,
    /// Single-quoted literal
    String,
    /// `=`
    Eq,
    /// `<`
    Lt,
    /// End-of-input sentinel
    EndOfInput,
}

impl TokenKind {
    /// Upper-case name of the kind, as shown to users.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Select => "SELECT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Comma => "COMMA",
            TokenKind::From => "FROM",
            TokenKind::Where => "WHERE",
            TokenKind::Gt => "GT",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Eq => "EQ",
            TokenKind::Lt => "LT",
            TokenKind::EndOfInput => "END_OF_INPUT",
        }
    }

    /// Returns true for reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Select | TokenKind::From | TokenKind::Where)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme: its kind and its decoded text.
///
/// The text is the identifier or keyword spelling, the numeric literal as
/// written, the unquoted string contents, or the punctuation character. It is
/// empty for [`TokenKind::EndOfInput`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Creates the end-of-input sentinel.
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, String::new())
    }

    /// The token kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The decoded lexeme text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}

/// Looks up a reserved word.
///
/// Matching is case-sensitive: only the lowercase spellings are keywords, so
/// `SELECT` is an ordinary identifier.
///
/// # Example
///
/// ```
/// use qlc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("where"), Some(TokenKind::Where));
/// assert_eq!(keyword_from_ident("Where"), None);
/// assert_eq!(keyword_from_ident("*"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    match text {
        "select" => Some(TokenKind::Select),
        "from" => Some(TokenKind::From),
        "where" => Some(TokenKind::Where),
        _ => None,
    }
}
