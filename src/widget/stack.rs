//! Cumulative-height index for vertically stacked children.
//!
//! `StackIndex` holds the ordered partial sums `H[0..=n]` of child heights
//! recorded during the last render, with `H[0] = 0`. It answers the routing
//! question for pointer events: which child owns row `r`, and at which local
//! row? A zero-height slot (a `None` placeholder, or a child rendered at
//! width 0) spans an empty range and can never own a row.

/// Ordered partial sums of child heights, rebuilt on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackIndex {
    // sums[i] = H[i]; sums[0] is always 0; sums.len() == slot count + 1.
    sums: Vec<u16>,
}

impl StackIndex {
    /// An index with no slots.
    pub fn new() -> Self {
        Self { sums: vec![0] }
    }

    /// Remove all slots.
    pub fn clear(&mut self) {
        self.sums.truncate(1);
    }

    /// Append a slot of the given height: `H[i] = H[i-1] + height`.
    pub fn push(&mut self, height: u16) {
        let last = *self.sums.last().unwrap_or(&0);
        self.sums.push(last.saturating_add(height));
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.sums.len() - 1
    }

    /// Whether the index has no slots.
    pub fn is_empty(&self) -> bool {
        self.sums.len() == 1
    }

    /// Total height `H[n]`.
    pub fn total(&self) -> u16 {
        *self.sums.last().unwrap_or(&0)
    }

    /// Starting row `H[i]` of slot `i`.
    ///
    /// Returns `None` for out-of-range slots.
    pub fn offset(&self, i: usize) -> Option<u16> {
        if i < self.len() {
            Some(self.sums[i])
        } else {
            None
        }
    }

    /// Height of slot `i`, or `None` if out of range.
    pub fn height(&self, i: usize) -> Option<u16> {
        if i < self.len() {
            Some(self.sums[i + 1] - self.sums[i])
        } else {
            None
        }
    }

    /// The unique slot `i` with `H[i] <= row < H[i+1]`, plus the row local to
    /// that slot.
    ///
    /// Returns `None` when `row >= H[n]` or the index is empty; zero-height
    /// slots are skipped because their range is empty.
    pub fn locate(&self, row: u16) -> Option<(usize, u16)> {
        for i in 0..self.len() {
            if self.sums[i] <= row && row < self.sums[i + 1] {
                return Some((i, row - self.sums[i]));
            }
        }
        None
    }
}

impl Default for StackIndex {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
