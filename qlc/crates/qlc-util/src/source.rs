//! Line index for mapping code-point offsets to lines and columns.
//!
//! Lexer offsets count code points, so the index records each line start as
//! both a code-point offset (for lookup) and a byte offset (for slicing).

/// A 1-based line and column pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based, in code points).
    pub column: usize,
}

/// Precomputed line starts of a query or script.
///
/// # Examples
///
/// ```
/// use qlc_util::source::{LineIndex, Location};
///
/// let index = LineIndex::new("select a\nfrom t");
/// assert_eq!(index.location(9), Location { line: 2, column: 1 });
/// assert_eq!(index.line_text(2), Some("from t"));
/// ```
#[derive(Clone, Debug)]
pub struct LineIndex<'a> {
    source: &'a str,
    /// (code-point offset, byte offset) at which each line starts
    line_starts: Vec<(usize, usize)>,
    /// Length of the source in code points
    len: usize,
}

impl<'a> LineIndex<'a> {
    /// Index the given source text.
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![(0, 0)];
        let mut len = 0;

        for (offset, (byte, ch)) in source.char_indices().enumerate() {
            if ch == '\n' {
                line_starts.push((offset + 1, byte + 1));
            }
            len = offset + 1;
        }

        Self {
            source,
            line_starts,
            len,
        }
    }

    /// Total number of lines
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Length of the indexed source in code points
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the indexed source is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps a code-point offset to its line and column.
    ///
    /// Offsets past the end are clamped to the end of the source, which is
    /// where end-of-input faults are reported.
    pub fn location(&self, offset: usize) -> Location {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&(start, _)| start <= offset)
            .saturating_sub(1);
        let (line_start, _) = self.line_starts[line];

        Location {
            line: line + 1,
            column: offset - line_start + 1,
        }
    }

    /// Text of a 1-based line without its trailing newline.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let index = line.checked_sub(1)?;
        let &(_, start) = self.line_starts.get(index)?;
        let end = match self.line_starts.get(index + 1) {
            Some(&(_, next)) => next - 1,
            None => self.source.len(),
        };
        Some(self.source[start..end].trim_end_matches('\r'))
    }
}
