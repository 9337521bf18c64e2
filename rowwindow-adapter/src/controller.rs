use alloc::vec::Vec;

use rowwindow::{RenderRange, RowWindow, WindowOptions, WindowState};

use crate::{HeaderSurface, MeasureSurface, ScrollSurface, SpacerSurface, Throttle};

/// Where a [`ScrollController`] is in its listener lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, not yet listening.
    Detached,
    /// Listening to scroll and resize events.
    Mounted,
    /// Listeners removed. Every handler is a no-op from here on.
    TornDown,
}

/// A framework-neutral controller that wires a [`RowWindow`] to host surfaces.
///
/// This type does not discover any UI objects. The host passes the scroll container, the header
/// and the spacer at construction, then drives it by calling:
/// - `mount` / `unmount` around the component lifetime
/// - `on_scroll(now_ms)` / `on_resize` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (to release a throttled trailing scroll)
/// - `render` then `settle` once per render cycle
///
/// Handlers that return `Some(WindowState)` are asking the host to re-render. Compare the state
/// with the previous one via [`WindowState::rows_changed`]: when only the offset or total height
/// moved, updating the transform and spacer is enough.
#[derive(Clone, Debug)]
pub struct ScrollController<S, H = (), P = ()> {
    window: RowWindow,
    scroll: S,
    header: H,
    spacer: P,
    throttle: Throttle,
    lifecycle: Lifecycle,
    rendered: RenderRange,
    measure_pending: bool,
}

impl<S, H, P> ScrollController<S, H, P>
where
    S: ScrollSurface,
    H: HeaderSurface,
    P: SpacerSurface,
{
    pub fn new(options: WindowOptions, scroll: S, header: H, spacer: P) -> Self {
        Self {
            window: RowWindow::new(options),
            scroll,
            header,
            spacer,
            throttle: Throttle::default(),
            lifecycle: Lifecycle::Detached,
            rendered: RenderRange::default(),
            measure_pending: false,
        }
    }

    /// Replaces the scroll throttle (default: 20ms).
    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn window(&self) -> &RowWindow {
        &self.window
    }

    pub fn state(&self) -> WindowState {
        self.window.state()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn scroll_surface(&self) -> &S {
        &self.scroll
    }

    pub fn scroll_surface_mut(&mut self) -> &mut S {
        &mut self.scroll
    }

    pub fn header(&self) -> &H {
        &self.header
    }

    pub fn spacer(&self) -> &P {
        &self.spacer
    }

    pub fn throttle(&self) -> &Throttle {
        &self.throttle
    }

    /// Starts listening: captures the viewport height and sizes the spacer.
    ///
    /// Returns `false` (and does nothing) unless the controller is still detached.
    pub fn mount(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Detached {
            wwarn!(lifecycle = ?self.lifecycle, "ScrollController::mount: not detached");
            return false;
        }
        self.lifecycle = Lifecycle::Mounted;
        self.window.set_viewport_height(self.scroll.client_height());
        self.spacer.set_height(self.window.total_height());
        wdebug!(
            viewport_height = self.window.viewport_height(),
            rows = self.window.len(),
            "ScrollController::mount"
        );
        true
    }

    /// Stops listening. Pending throttled events are dropped and every later call is ignored.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        wdebug!("ScrollController::unmount");
        self.lifecycle = Lifecycle::TornDown;
        self.throttle.reset();
        self.measure_pending = false;
    }

    /// Call this whenever the row source changes identity or length.
    ///
    /// Rebuilds the position index with the estimated height. Returns the new state as a render
    /// request, or `None` after teardown.
    ///
    /// A pending [`Self::settle`] is dropped: heights measured for the old rows must not land on
    /// the rebuilt index. The host renders again from the returned state.
    pub fn set_rows(&mut self, len: usize) -> Option<WindowState> {
        if self.lifecycle == Lifecycle::TornDown {
            wtrace!(len, "ScrollController::set_rows after teardown");
            return None;
        }
        self.window.reset_rows(len);
        self.invalidate_render();
        if self.is_mounted() {
            self.spacer.set_height(self.window.total_height());
        }
        Some(self.window.state())
    }

    /// Replaces the window options (variant, row size, buffer).
    ///
    /// When the change rebuilds the position index, a pending [`Self::settle`] is dropped as in
    /// [`Self::set_rows`].
    pub fn set_options(&mut self, options: WindowOptions) -> Option<WindowState> {
        if self.lifecycle == Lifecycle::TornDown {
            return None;
        }
        let rebuild = options.requires_rebuild(self.window.options());
        self.window.set_options(options);
        if rebuild {
            self.invalidate_render();
        }
        if self.is_mounted() {
            self.spacer.set_height(self.window.total_height());
        }
        Some(self.window.state())
    }

    /// Scroll event from the host.
    ///
    /// Returns a render request when the event passed the throttle. Events inside the throttle
    /// interval are coalesced and released by [`Self::tick`].
    pub fn on_scroll(&mut self, now_ms: u64) -> Option<WindowState> {
        if !self.is_mounted() {
            wtrace!(now_ms, lifecycle = ?self.lifecycle, "ScrollController::on_scroll ignored");
            return None;
        }
        if !self.throttle.admit(now_ms) {
            return None;
        }
        Some(self.sync_scroll())
    }

    /// Releases a throttled trailing scroll once its interval has elapsed.
    pub fn tick(&mut self, now_ms: u64) -> Option<WindowState> {
        if !self.is_mounted() || !self.throttle.poll(now_ms) {
            return None;
        }
        Some(self.sync_scroll())
    }

    /// Resize event from the host: re-reads the viewport height.
    pub fn on_resize(&mut self) -> Option<WindowState> {
        if !self.is_mounted() {
            return None;
        }
        let height = self.scroll.client_height();
        if height == self.window.viewport_height() {
            return None;
        }
        wtrace!(height, "ScrollController::on_resize");
        self.window.set_viewport_height(height);
        Some(self.window.state())
    }

    /// Render phase: calls `render_row` once per row of the render range, in order, and
    /// collects the produced nodes into `out` (cleared first).
    ///
    /// `render_row` receives the row and its absolute index in `rows`; the measurement surface
    /// reports heights back under that index. A row may produce any number of nodes.
    ///
    /// Nothing is rendered unless the controller is mounted.
    pub fn render<T, N, I>(
        &mut self,
        rows: &[T],
        out: &mut Vec<N>,
        mut render_row: impl FnMut(&T, usize) -> I,
    ) -> RenderRange
    where
        I: IntoIterator<Item = N>,
    {
        out.clear();
        if !self.is_mounted() {
            return RenderRange::default();
        }
        let visible = self.window.visible_rows(rows);
        let start = self.window.render_range().start_index;
        for (i, row) in visible.iter().enumerate() {
            out.extend(render_row(row, start + i));
        }
        self.rendered = RenderRange {
            start_index: start,
            end_index: start + visible.len(),
        };
        self.measure_pending = true;
        self.rendered
    }

    /// Post-render phase: reads realized row heights and corrects the position index.
    ///
    /// Only rows from the last [`Self::render`] are taken into account. Runs at most once per
    /// render; a missing measurement surface skips the correction for this cycle.
    ///
    /// Returns the corrected state (offset and total height may have moved), or `None` when
    /// there was nothing to settle.
    pub fn settle(&mut self, measure: Option<&dyn MeasureSurface>) -> Option<WindowState> {
        if !self.is_mounted() || !self.measure_pending {
            return None;
        }
        self.measure_pending = false;
        let Some(measure) = measure else {
            wdebug!("ScrollController::settle: no measurement surface, skipping");
            return None;
        };

        let rendered = self.rendered;
        let mut measurements = Vec::with_capacity(rendered.len());
        measure.for_each_row_height(&mut |index, height| {
            if rendered.contains(index) {
                measurements.push((index, height));
            }
        });
        self.window.apply_measurements(measurements);
        self.spacer.set_height(self.window.total_height());
        wtrace!(
            total_height = self.window.total_height(),
            offset = self.window.start_offset(),
            "ScrollController::settle"
        );
        Some(self.window.state())
    }

    fn invalidate_render(&mut self) {
        if self.measure_pending {
            wdebug!("ScrollController: rows rebuilt, dropping pending settle");
        }
        self.measure_pending = false;
        self.rendered = RenderRange::default();
    }

    fn sync_scroll(&mut self) -> WindowState {
        self.window.scroll_to(self.scroll.scroll_top());
        self.header.set_scroll_left(self.scroll.scroll_left());
        self.window.state()
    }
}
