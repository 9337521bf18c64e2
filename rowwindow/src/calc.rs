//! Pure window arithmetic.
//!
//! These functions hold no state; [`crate::RowWindow`] calls them on demand from its current
//! position index and scroll state.

use crate::{PositionIndex, RenderRange};

/// Number of rows of `item_size` needed to cover `viewport_height`, rounded up.
pub fn visible_count(viewport_height: u32, item_size: u32) -> usize {
    viewport_height.div_ceil(item_size.max(1)) as usize
}

/// The buffered, half-open range of rows to render when `start_index` is the first visible row.
pub fn render_range(
    start_index: usize,
    visible_count: usize,
    buffer: usize,
    len: usize,
) -> RenderRange {
    let end_index = start_index
        .saturating_add(visible_count)
        .saturating_add(buffer)
        .min(len);
    let start_index = start_index.saturating_sub(buffer).min(end_index);
    RenderRange {
        start_index,
        end_index,
    }
}

/// Translation for the rendered block of a variable-height list.
///
/// The block starts `buffer` rows above `start_index`, so it is shifted by the height before the
/// first visible row minus the height the buffer rows themselves cover. That places the first
/// buffered row at its true cumulative top.
///
/// `start_index` must already be clamped to the index; out-of-range values yield `0`.
pub fn start_offset(positions: &PositionIndex, start_index: usize, buffer: usize) -> u64 {
    if start_index < 1 {
        return 0;
    }
    let Some(prev) = positions.get(start_index - 1) else {
        return 0;
    };
    let Some(start) = positions.get(start_index) else {
        return 0;
    };
    let buffered_top = positions
        .get(start_index.saturating_sub(buffer))
        .map_or(0, |p| p.top);
    let buffer_span = start.top.saturating_sub(buffered_top);
    prev.bottom.saturating_sub(buffer_span)
}

/// First visible row of a fixed-height list, clamped to `len`.
///
/// Returns `0` for an empty list.
pub fn fixed_start_index(scroll_offset: u64, item_size: u32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let index = scroll_offset / item_size.max(1) as u64;
    usize::try_from(index).map_or(len - 1, |i| i.min(len - 1))
}

/// Translation for the rendered block of a fixed-height list.
pub fn fixed_start_offset(start_index: usize, buffer: usize, item_size: u32) -> u64 {
    start_index.saturating_sub(buffer) as u64 * item_size as u64
}

/// Total scrollable height of `len` rows of `item_size`.
pub fn fixed_total_height(len: usize, item_size: u32) -> u64 {
    (len as u64).saturating_mul(item_size as u64)
}
