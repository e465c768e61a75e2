/// Represents a span in the input with start and end byte positions
/// and a reference to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the full input
    pub source: &'code str,
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<'code> Span<'code> {
    pub fn new(source: &'code str, start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text this span covers
    pub fn as_str(&self) -> &'code str {
        &self.source[self.start..self.end]
    }
}
