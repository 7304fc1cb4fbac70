//! qlc-lex - Lexical Analyzer for the qlc query dialect
//!
//! This crate turns a query string into an ordered sequence of classified
//! tokens, or a positioned diagnostic describing the first malformed
//! identifier, number or string.
//!
//! # Example Usage
//!
//! ```
//! use qlc_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("select name from people where age > 21").unwrap();
//! assert_eq!(tokens[0].kind(), TokenKind::Select);
//! assert_eq!(tokens.last().unwrap().kind(), TokenKind::EndOfInput);
//!
//! let err = tokenize("select 10.4.5").unwrap_err();
//! assert_eq!(err.offset(), 11);
//! ```
//!
//! # Module Structure
//!
//! - [`classify`] - Letter, digit and whitespace predicates
//! - [`cursor`] - Code-point cursor
//! - [`token`] - Token kinds and keyword lookup
//! - [`lexer`] - Sub-scanners and the tokenize driver
//!
//! # Token Categories
//!
//! - **Keywords**: `select`, `from`, `where` (lowercase only)
//! - **Identifiers**: `[A-Za-z*][A-Za-z0-9_*]*`; `*` alone is the wildcard
//! - **Numbers**: decimal digits with at most one `.`
//! - **Strings**: `'...'`, no escapes
//! - **Punctuation**: `,` `=` `<` `>`
//! - **End of input**: always the last token
//!
//! Offsets in diagnostics count code points from the start of the query.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer, Scanned};
pub use qlc_util::{LexError, LexErrorKind, LexResult};
pub use token::{keyword_from_ident, Token, TokenKind};
