use std::ops::Range;

/// Where a token sits in the source: its byte range and 1-based start line.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Default)]
pub struct Span {
    pub range: Range<usize>,
    pub line: usize,
}

impl Span {
    pub const fn new(range: Range<usize>, line: usize) -> Self {
        Self { range, line }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
