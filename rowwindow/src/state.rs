use crate::RenderRange;

/// A lightweight, serializable snapshot of the window after the last update.
///
/// Hosts can compare snapshots across frames to decide whether a re-render is needed: a
/// correction pass that only moves `offset` or `total_height` needs a transform/spacer update,
/// not a new set of rows.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    /// First row intersecting the scroll offset (before buffering).
    pub start_index: usize,
    pub range: RenderRange,
    /// Translation applied to the rendered block.
    pub offset: u64,
    /// Height of the spacer that gives the scroll container its full range.
    pub total_height: u64,
    pub viewport_height: u32,
}

impl WindowState {
    /// Returns `true` if a different set of rows must be rendered to go from `prev` to `self`.
    pub fn rows_changed(&self, prev: &WindowState) -> bool {
        self.range != prev.range
    }
}
