//! Host surfaces the controller reads from and writes to.
//!
//! Hosts hand concrete handles to [`crate::ScrollController::new`]; the controller never looks
//! them up on its own. `()` can stand in for an absent header or spacer.

use alloc::vec::Vec;

/// The scrollable container holding the rendered rows.
pub trait ScrollSurface {
    fn scroll_top(&self) -> u64;
    fn scroll_left(&self) -> u32;
    /// Visible height of the container.
    fn client_height(&self) -> u32;
}

/// A header that scrolls horizontally in lockstep with the body.
pub trait HeaderSurface {
    fn set_scroll_left(&mut self, scroll_left: u32);
}

/// An element sized to the full list height so the native scrollbar covers every row.
pub trait SpacerSurface {
    fn set_height(&mut self, height: u64);
}

/// Realized heights of the rows from the last render, keyed by row index.
pub trait MeasureSurface {
    fn for_each_row_height(&self, f: &mut dyn FnMut(usize, u32));
}

impl HeaderSurface for () {
    fn set_scroll_left(&mut self, _scroll_left: u32) {}
}

impl SpacerSurface for () {
    fn set_height(&mut self, _height: u64) {}
}

impl MeasureSurface for [(usize, u32)] {
    fn for_each_row_height(&self, f: &mut dyn FnMut(usize, u32)) {
        for &(index, height) in self {
            f(index, height);
        }
    }
}

impl MeasureSurface for Vec<(usize, u32)> {
    fn for_each_row_height(&self, f: &mut dyn FnMut(usize, u32)) {
        self.as_slice().for_each_row_height(f);
    }
}
