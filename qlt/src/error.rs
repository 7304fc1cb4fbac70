//! Error handling module for the qlt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use qlc_util::{Diagnostic, LexError};
use thiserror::Error;

/// Main error type for the qlt CLI application.
#[derive(Error, Debug)]
pub enum QltError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the logging subscriber cannot be installed.
    #[error("Logging error: {0}")]
    Logging(String),

    /// Error when reading a query file fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when command input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A query failed to lex. Displays as the rendered diagnostic.
    #[error("{rendered}")]
    Lex {
        /// The lexer's diagnostic.
        #[source]
        source: LexError,
        /// The diagnostic rendered against the query text.
        rendered: String,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QltError {
    /// Wraps a lex error, rendering it against the query it came from.
    pub fn lex(source: LexError, query: &str) -> Self {
        let rendered = Diagnostic::from(&source).render(query);
        Self::Lex { source, rendered }
    }
}

/// Result type alias using QltError.
pub type Result<T> = std::result::Result<T, QltError>;

#[cfg(test)]
mod tests {
    use super::*;
    use qlc_util::LexErrorKind;

    #[test]
    fn test_config_error_display() {
        let err = QltError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = QltError::Validation("no query".to_string());
        assert_eq!(err.to_string(), "Validation error: no query");
    }

    #[test]
    fn test_lex_error_displays_rendered_diagnostic() {
        let err = QltError::lex(LexError::invalid_string("unterminated quote", 2), "a 'b");
        let text = err.to_string();
        assert!(text.starts_with("error[E1003]: unterminated quote"));
        assert!(text.contains("1 | a 'b"));
    }

    #[test]
    fn test_lex_error_keeps_source() {
        use std::error::Error as _;

        let err = QltError::lex(LexError::invalid_number("bad", 0), "1x");
        let source = err.source().and_then(|s| s.downcast_ref::<LexError>());
        assert!(source.is_some_and(|e| e.is(LexErrorKind::InvalidNumber)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let qlt_err: QltError = io_err.into();
        assert!(matches!(qlt_err, QltError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let qlt_err: QltError = json_err.into();
        assert!(matches!(qlt_err, QltError::Json(_)));
    }
}
