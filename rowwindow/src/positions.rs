use alloc::vec::Vec;
use core::slice;

use crate::Position;

/// Per-row cumulative positions for variable-height rows.
///
/// Every row starts at an estimated height. After the host measures rendered rows, their real
/// heights are fed back through [`PositionIndex::correct`], which shifts every following row.
///
/// Lookups are `O(log n)`. A correction pass is `O(n)` from the first changed row to the end of
/// the list, which is fine because it only runs once per render cycle, never per scroll frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionIndex {
    positions: Vec<Position>,
}

impl PositionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an index of `row_count` rows, all `estimated_height` tall.
    pub fn with_estimate(row_count: usize, estimated_height: u32) -> Self {
        let mut index = Self::new();
        index.rebuild(row_count, estimated_height);
        index
    }

    /// Replaces every record with an estimated one, discarding all measurements.
    pub fn rebuild(&mut self, row_count: usize, estimated_height: u32) {
        wdebug!(row_count, estimated_height, "PositionIndex::rebuild");
        let h = estimated_height as u64;
        self.positions.clear();
        self.positions.reserve_exact(row_count);
        self.positions.extend((0..row_count).map(|index| Position {
            index,
            height: estimated_height,
            top: index as u64 * h,
            bottom: (index as u64 + 1) * h,
        }));
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Position> {
        self.positions.get(index)
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.positions
    }

    pub fn iter(&self) -> slice::Iter<'_, Position> {
        self.positions.iter()
    }

    /// The full scrollable extent: `bottom` of the last row, or `0` when empty.
    pub fn total_height(&self) -> u64 {
        self.positions.last().map_or(0, |p| p.bottom)
    }

    /// Finds the row that begins the view at `offset`.
    ///
    /// This is the first row whose `bottom` is strictly greater than `offset`. When `offset`
    /// lands exactly on a boundary, the row starting there wins over the row ending there.
    ///
    /// Returns `None` for an empty index. Offsets at or past [`Self::total_height`] return
    /// `Some(self.len())`; callers clamp the result before indexing.
    pub fn lookup(&self, offset: u64) -> Option<usize> {
        if self.positions.is_empty() {
            return None;
        }
        Some(self.positions.partition_point(|p| p.bottom <= offset))
    }

    /// Applies measured heights and shifts every row after a changed one.
    ///
    /// Measurements are applied in ascending index order regardless of input order; for a
    /// repeated index the last measurement wins. Indexes past the end are ignored.
    ///
    /// Returns the number of rows whose stored height changed.
    pub fn correct(&mut self, measurements: impl IntoIterator<Item = (usize, u32)>) -> usize {
        let len = self.positions.len();
        let mut pending: Vec<(usize, u32)> = measurements
            .into_iter()
            .filter(|&(index, _)| index < len)
            .collect();
        if pending.is_empty() {
            return 0;
        }
        // Stable sort keeps input order for equal indexes, so the last one wins below.
        pending.sort_by_key(|&(index, _)| index);

        let mut changed = 0usize;
        let mut shift = 0i64;
        let mut cursor = pending[0].0;
        let mut pending = pending.into_iter().peekable();

        while let Some((index, height)) = pending.next() {
            if pending.peek().is_some_and(|&(next, _)| next == index) {
                continue;
            }
            // Rows between the previous correction and this one only move.
            for p in &mut self.positions[cursor..index] {
                p.top = offset_by(p.top, shift);
                p.bottom = offset_by(p.bottom, shift);
            }

            let p = &mut self.positions[index];
            let delta = height as i64 - p.height as i64;
            p.top = offset_by(p.top, shift);
            if delta != 0 {
                wtrace!(index, from = p.height, to = height, "PositionIndex::correct");
                p.height = height;
                changed += 1;
                shift += delta;
            }
            p.bottom = p.top + p.height as u64;
            cursor = index + 1;
        }

        if shift != 0 {
            for p in &mut self.positions[cursor..] {
                p.top = offset_by(p.top, shift);
                p.bottom = offset_by(p.bottom, shift);
            }
        }

        debug_assert!(
            self.positions.windows(2).all(|w| w[0].bottom == w[1].top),
            "PositionIndex: rows are not contiguous after correction"
        );
        changed
    }
}

impl<'a> IntoIterator for &'a PositionIndex {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn offset_by(value: u64, shift: i64) -> u64 {
    if shift >= 0 {
        value.saturating_add(shift as u64)
    } else {
        value.saturating_sub(shift.unsigned_abs())
    }
}
