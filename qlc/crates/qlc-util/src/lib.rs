//! qlc-util - Core Utilities and Foundation Types
//!
//! Shared types for the qlc query front end:
//!
//! - [`error`] - the lexical error taxonomy ([`LexErrorKind`]) and the
//!   positioned error value ([`LexError`]) every scanner returns
//! - [`diagnostic`] - stable diagnostic codes and human-readable rendering
//! - [`source`] - mapping code-point offsets to lines and columns
//!
//! Offsets throughout the front end count Unicode code points from the start
//! of the query, so a diagnostic points at the same character regardless of
//! how the query was encoded.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod source;

pub use diagnostic::{Diagnostic, DiagnosticCode};
pub use error::{LexError, LexErrorKind, LexResult};
pub use source::{LineIndex, Location};
