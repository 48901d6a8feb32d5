//! Zero-based, fixed-size pagination.

use serde::{Deserialize, Serialize};

/// A page window over an ordered sequence.
///
/// Pages are zero-based. A page past the end of the sequence is empty,
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSlice {
    /// Zero-based page index.
    pub index: usize,
    /// Number of items per page.
    pub size: usize,
}

impl PageSlice {
    /// Create a new page window. A zero size is bumped to one.
    pub fn new(index: usize, size: usize) -> Self {
        Self {
            index,
            size: size.max(1),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    /// Half-open bounds of this page within a sequence of `len` items.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = self.offset().min(len);
        let end = start.saturating_add(self.size).min(len);
        (start, end)
    }

    /// Take this page out of an owned sequence.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let (start, end) = self.bounds(items.len());
        items.into_iter().skip(start).take(end - start).collect()
    }

    /// Number of pages needed for `total` items.
    pub fn page_count(total: usize, size: usize) -> usize {
        let size = size.max(1);
        total.div_ceil(size)
    }
}
