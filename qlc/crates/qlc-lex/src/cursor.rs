//! Code-point cursor for traversing a query.
//!
//! This module provides the `Cursor` struct which maintains the scan offset
//! while walking a decoded query. Offsets count code points, never bytes, so
//! every diagnostic position is stable regardless of the input encoding.

/// A forward-only cursor over a code-point slice.
///
/// The cursor never moves backwards: [`Cursor::advance_to`] only accepts
/// offsets at or after the current position.
///
/// # Example
///
/// ```
/// use qlc_lex::cursor::Cursor;
///
/// let chars: Vec<char> = "select *".chars().collect();
/// let mut cursor = Cursor::new(&chars);
///
/// assert_eq!(cursor.current(), Some('s'));
/// cursor.advance_to(6);
/// assert_eq!(cursor.current(), Some(' '));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The decoded query being traversed.
    chars: &'a [char],

    /// Current code-point offset.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `chars`.
    pub fn new(chars: &'a [char]) -> Self {
        Self::at(chars, 0)
    }

    /// Creates a cursor positioned at `offset`.
    ///
    /// Sub-scanners use this to start from the offset handed to them by the
    /// tokenizer.
    pub fn at(chars: &'a [char], offset: usize) -> Self {
        Self {
            chars,
            position: offset.min(chars.len()),
        }
    }

    /// Returns the code point under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// Returns the code point `offset` places ahead of the cursor.
    ///
    /// ```
    /// use qlc_lex::cursor::Cursor;
    ///
    /// let chars: Vec<char> = "<=".chars().collect();
    /// let cursor = Cursor::new(&chars);
    /// assert_eq!(cursor.peek(1), Some('='));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    /// Advances past the current code point. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    /// Moves the cursor forward to `offset`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `offset` lies before the current position.
    #[inline]
    pub fn advance_to(&mut self, offset: usize) {
        debug_assert!(
            offset >= self.position,
            "cursor moved backwards from {} to {}",
            self.position,
            offset
        );
        self.position = offset.min(self.chars.len());
    }

    /// Returns true if the cursor is at the end of the input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Returns the current code-point offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text between `start` and the current position.
    ///
    /// ```
    /// use qlc_lex::cursor::Cursor;
    ///
    /// let chars: Vec<char> = "from t".chars().collect();
    /// let mut cursor = Cursor::new(&chars);
    /// cursor.advance_to(4);
    /// assert_eq!(cursor.text_from(0), "from");
    /// ```
    pub fn text_from(&self, start: usize) -> String {
        self.chars[start.min(self.position)..self.position]
            .iter()
            .collect()
    }

    /// Returns the full code-point slice.
    pub fn chars(&self) -> &'a [char] {
        self.chars
    }
}
