use crate::calc;
use crate::{Position, PositionIndex, RenderRange, VirtualType, WindowOptions, WindowState};

/// A headless row-windowing engine.
///
/// This type does not hold any UI objects or row data:
/// - The host reports the row count, viewport height and scroll offset.
/// - The engine answers which rows to render ([`RowWindow::render_range`]) and where to put them
///   ([`RowWindow::start_offset`], [`RowWindow::total_height`]).
/// - After layout, the host feeds measured heights back with [`RowWindow::apply_measurements`].
///
/// For event wiring (throttled scroll, resize, mount/unmount, the render → measure pipeline),
/// see the `rowwindow-adapter` crate.
#[derive(Clone, Debug)]
pub struct RowWindow {
    options: WindowOptions,
    len: usize,
    viewport_height: u32,
    scroll_offset: u64,
    start_index: usize,
    offset: u64,
    positions: PositionIndex,
}

impl RowWindow {
    /// Creates an engine with no rows.
    pub fn new(options: WindowOptions) -> Self {
        wdebug!(
            virtual_type = options.virtual_type.as_str(),
            estimated_item_size = options.estimated_item_size,
            buffer = options.buffer,
            "RowWindow::new"
        );
        Self {
            options,
            len: 0,
            viewport_height: 0,
            scroll_offset: 0,
            start_index: 0,
            offset: 0,
            positions: PositionIndex::new(),
        }
    }

    /// Creates an engine for `len` rows.
    pub fn with_rows(options: WindowOptions, len: usize) -> Self {
        let mut w = Self::new(options);
        w.reset_rows(len);
        w
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Replaces the options, rebuilding the position index when the variant or row size changed.
    pub fn set_options(&mut self, options: WindowOptions) {
        let rebuild = options.requires_rebuild(&self.options);
        self.options = options;
        wtrace!(
            virtual_type = self.options.virtual_type.as_str(),
            buffer = self.options.buffer,
            rebuild,
            "RowWindow::set_options"
        );
        if rebuild {
            self.rebuild_positions();
        }
        self.refresh();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn virtual_type(&self) -> VirtualType {
        self.options.virtual_type
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Call this whenever the row source changes identity or length.
    ///
    /// All measurements are discarded and every row goes back to the estimated height. The
    /// current start index is kept (clamped to the new length).
    pub fn reset_rows(&mut self, len: usize) {
        self.len = len;
        self.rebuild_positions();
        self.refresh();
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        self.viewport_height = height;
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Moves the window to `scroll_offset`.
    ///
    /// Returns `true` if the first visible row changed.
    pub fn scroll_to(&mut self, scroll_offset: u64) -> bool {
        self.scroll_offset = scroll_offset;
        let prev = self.start_index;
        self.start_index = self.index_at_offset(scroll_offset).unwrap_or(0);
        self.offset = self.compute_start_offset();
        wtrace!(
            scroll_offset,
            start_index = self.start_index,
            offset = self.offset,
            "RowWindow::scroll_to"
        );
        prev != self.start_index
    }

    /// First row intersecting the scroll offset, clamped to `[0, len)`.
    ///
    /// Returns `None` when there are no rows.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let raw = match self.options.virtual_type {
            VirtualType::Dynamic => self.positions.lookup(offset)?,
            VirtualType::Fixed => {
                if self.len == 0 {
                    return None;
                }
                calc::fixed_start_index(offset, self.options.effective_item_size(), self.len)
            }
        };
        Some(self.clamp_index(raw))
    }

    /// First visible row (before buffering).
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn visible_count(&self) -> usize {
        calc::visible_count(self.viewport_height, self.options.effective_item_size())
    }

    /// Rows to render: the visible rows plus `buffer` rows on each side.
    pub fn render_range(&self) -> RenderRange {
        calc::render_range(
            self.start_index,
            self.visible_count(),
            self.options.buffer,
            self.len,
        )
    }

    /// Slices the rows of the current render range out of `rows`.
    ///
    /// `rows` is expected to have [`Self::len`] elements; a shorter slice is clamped.
    pub fn visible_rows<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let range = self.render_range();
        let end = range.end_index.min(rows.len());
        let start = range.start_index.min(end);
        &rows[start..end]
    }

    /// Vertical translation for the rendered block.
    pub fn start_offset(&self) -> u64 {
        self.offset
    }

    /// Height of the whole list, used to size the spacer element.
    pub fn total_height(&self) -> u64 {
        match self.options.virtual_type {
            VirtualType::Dynamic => self.positions.total_height(),
            VirtualType::Fixed => {
                calc::fixed_total_height(self.len, self.options.effective_item_size())
            }
        }
    }

    /// The position index backing a dynamic list. Empty for [`VirtualType::Fixed`].
    pub fn positions(&self) -> &PositionIndex {
        &self.positions
    }

    /// Position of a single row, for either variant.
    pub fn position(&self, index: usize) -> Option<Position> {
        if index >= self.len {
            return None;
        }
        match self.options.virtual_type {
            VirtualType::Dynamic => self.positions.get(index).copied(),
            VirtualType::Fixed => {
                let height = self.options.effective_item_size();
                let top = index as u64 * height as u64;
                Some(Position {
                    index,
                    height,
                    top,
                    bottom: top + height as u64,
                })
            }
        }
    }

    /// Applies measured row heights (correction pass) and recomputes the offset.
    ///
    /// Fixed-height lists ignore measurements. Returns the number of rows whose height changed.
    pub fn apply_measurements(
        &mut self,
        measurements: impl IntoIterator<Item = (usize, u32)>,
    ) -> usize {
        if self.options.virtual_type == VirtualType::Fixed {
            wtrace!("RowWindow::apply_measurements: ignored for fixed rows");
            return 0;
        }
        let changed = self.positions.correct(measurements);
        if changed > 0 {
            self.offset = self.compute_start_offset();
        }
        wtrace!(
            changed,
            total_height = self.total_height(),
            offset = self.offset,
            "RowWindow::apply_measurements"
        );
        changed
    }

    /// Returns a snapshot of the current window.
    pub fn state(&self) -> WindowState {
        WindowState {
            start_index: self.start_index,
            range: self.render_range(),
            offset: self.offset,
            total_height: self.total_height(),
            viewport_height: self.viewport_height,
        }
    }

    fn rebuild_positions(&mut self) {
        match self.options.virtual_type {
            VirtualType::Dynamic => self
                .positions
                .rebuild(self.len, self.options.effective_item_size()),
            VirtualType::Fixed => self.positions.rebuild(0, 0),
        }
    }

    fn refresh(&mut self) {
        self.start_index = if self.len == 0 {
            0
        } else {
            self.clamp_index(self.start_index)
        };
        self.offset = self.compute_start_offset();
    }

    fn compute_start_offset(&self) -> u64 {
        match self.options.virtual_type {
            VirtualType::Dynamic => {
                calc::start_offset(&self.positions, self.start_index, self.options.buffer)
            }
            VirtualType::Fixed => calc::fixed_start_offset(
                self.start_index,
                self.options.buffer,
                self.options.effective_item_size(),
            ),
        }
    }

    fn clamp_index(&self, index: usize) -> usize {
        let last = self.len.saturating_sub(1);
        if index > self.len {
            wwarn!(index, len = self.len, "RowWindow: stale index clamped");
        }
        index.min(last)
    }
}
