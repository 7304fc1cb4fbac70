//! Diagnostic codes for categorizing lexer errors.
//!
//! # Examples
//!
//! ```
//! use qlc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::new("E", 1001);
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}`, where the number is padded to
/// four digits. Lexer codes live in the `E1xxx` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

/// E1001: Invalid identifier or unexpected character
pub const E_LEXER_INVALID_IDENTIFIER: DiagnosticCode = DiagnosticCode::new("E", 1001);
/// E1002: Invalid number literal
pub const E_LEXER_INVALID_NUMBER: DiagnosticCode = DiagnosticCode::new("E", 1002);
/// E1003: Invalid or unterminated string literal
pub const E_LEXER_INVALID_STRING: DiagnosticCode = DiagnosticCode::new("E", 1003);
