/// Cached vertical span of one row.
///
/// `bottom` is always `top + height`; `top` of a row equals `bottom` of the row before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub index: usize,
    /// Last known height (the estimate until the row is measured).
    pub height: u32,
    pub top: u64,
    pub bottom: u64,
}

impl Position {
    /// Returns `true` if `offset` falls inside `[top, bottom)`.
    pub fn contains(&self, offset: u64) -> bool {
        self.top <= offset && offset < self.bottom
    }
}

/// The rows to render, padded by the buffer on both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl RenderRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index < self.end_index
    }

    pub fn as_range(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index
    }
}
