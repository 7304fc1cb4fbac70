//! Lexical error types shared by the qlc front end.
//!
//! A failure is described by two layers: [`LexErrorKind`] is the sentinel
//! that callers branch on, and [`LexError`] wraps it together with the
//! message and the code-point offset at which the fault was detected.

use thiserror::Error;

use crate::diagnostic::{
    DiagnosticCode, E_LEXER_INVALID_IDENTIFIER, E_LEXER_INVALID_NUMBER, E_LEXER_INVALID_STRING,
};

/// Category of a lexical error.
///
/// The set is closed: every lexical failure belongs to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// Malformed identifier, or a character that starts no token.
    #[error("invalid identifier")]
    InvalidIdentifier,

    /// Malformed numeric literal.
    #[error("invalid number")]
    InvalidNumber,

    /// Malformed or unterminated string literal.
    #[error("invalid string")]
    InvalidString,
}

impl LexErrorKind {
    /// Returns the stable diagnostic code for this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use qlc_util::LexErrorKind;
    ///
    /// assert_eq!(LexErrorKind::InvalidNumber.code().as_str(), "E1002");
    /// ```
    pub const fn code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::InvalidIdentifier => E_LEXER_INVALID_IDENTIFIER,
            LexErrorKind::InvalidNumber => E_LEXER_INVALID_NUMBER,
            LexErrorKind::InvalidString => E_LEXER_INVALID_STRING,
        }
    }
}

/// A positioned lexical error.
///
/// The offset counts code points from the start of the query, not bytes.
/// The wrapped [`LexErrorKind`] is exposed through
/// [`std::error::Error::source`] as well as [`LexError::kind`].
///
/// # Example
///
/// ```
/// use qlc_util::{LexError, LexErrorKind};
///
/// let err = LexError::invalid_number("number can only have one period", 4);
/// assert!(err.is(LexErrorKind::InvalidNumber));
/// assert_eq!(err.offset(), 4);
/// assert_eq!(
///     err.to_string(),
///     "lex error at position 4: number can only have one period"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lex error at position {offset}: {message}")]
pub struct LexError {
    message: String,
    offset: usize,
    #[source]
    kind: LexErrorKind,
}

impl LexError {
    /// Creates an error of the given kind at `offset`.
    pub fn new(kind: LexErrorKind, message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
            kind,
        }
    }

    /// Creates an [`LexErrorKind::InvalidIdentifier`] error.
    pub fn invalid_identifier(message: impl Into<String>, offset: usize) -> Self {
        Self::new(LexErrorKind::InvalidIdentifier, message, offset)
    }

    /// Creates an [`LexErrorKind::InvalidNumber`] error.
    pub fn invalid_number(message: impl Into<String>, offset: usize) -> Self {
        Self::new(LexErrorKind::InvalidNumber, message, offset)
    }

    /// Creates an [`LexErrorKind::InvalidString`] error.
    pub fn invalid_string(message: impl Into<String>, offset: usize) -> Self {
        Self::new(LexErrorKind::InvalidString, message, offset)
    }

    /// Human-readable description of the fault.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Code-point offset at which the fault was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The sentinel kind wrapped by this error.
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// Returns true if this error wraps `kind`.
    pub fn is(&self, kind: LexErrorKind) -> bool {
        self.kind == kind
    }
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
