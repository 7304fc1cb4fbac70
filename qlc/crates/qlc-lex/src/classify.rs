//! Character classification for the query lexer.
//!
//! The dialect only recognizes ASCII letters, digits and three whitespace
//! characters. Every other code point is either punctuation handled by the
//! tokenizer's dispatch or an error.

/// Checks if a character is a letter.
///
/// Letters are ASCII `a`-`z`, `A`-`Z` and the wildcard `*`. The wildcard is
/// scanned through the identifier path so `select *` yields an identifier
/// `*`.
///
/// # Example
///
/// ```
/// use qlc_lex::classify::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('P'));
/// assert!(is_letter('*'));
/// assert!(!is_letter('4'));
/// assert!(!is_letter('_'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '*'
}

/// Checks if a character is an ASCII decimal digit.
///
/// # Example
///
/// ```
/// use qlc_lex::classify::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('a'));
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is whitespace: space, newline or tab.
///
/// Carriage returns and Unicode spaces are not whitespace in this dialect.
///
/// # Example
///
/// ```
/// use qlc_lex::classify::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\n'));
/// assert!(is_whitespace('\t'));
/// assert!(!is_whitespace('\r'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t')
}

/// Checks if a character can continue an identifier: a letter, a digit or
/// an underscore.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}
