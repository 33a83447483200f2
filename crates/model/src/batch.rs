/// A contiguous, fixed-size slice of newly arrived rows selected for one
/// generation call. Derived from the cursor and the snapshot size; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSpec {
    /// First row of the batch, 0-based, inclusive.
    pub start: usize,
    /// End of the batch, exclusive.
    pub end: usize,
    /// 1-based inclusive display range, e.g. "4-6".
    pub range_label: String,
}

impl BatchSpec {
    pub fn new(start: usize, end: usize) -> Self {
        BatchSpec {
            start,
            end,
            range_label: format!("{}-{}", start + 1, end),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
