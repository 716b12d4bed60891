/// A byte range `[start, end)` into the text handed to the parser.
///
/// Elements carry their span purely for diagnostics: equality between
/// elements never looks at it, and hosts that do not care can ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceSpan {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl SourceSpan {
    /// Length in bytes; zero when `end` does not exceed `start`.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `text` with this span, or `None` if the range is out of bounds
    /// or lands inside a multi-byte character.
    #[must_use]
    pub fn slice(self, text: &str) -> Option<&str> {
        text.get(self.start..self.end)
    }
}
