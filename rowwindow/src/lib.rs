//! A headless windowing engine for very long lists.
//!
//! For event wiring (throttled scroll handling, mount/unmount, the render → measure pipeline),
//! see the `rowwindow-adapter` crate.
//!
//! Only a slice of rows is materialized at a time. This crate owns the math behind that slice:
//! per-row cumulative positions under measured-after-render heights, scroll offset → first row
//! lookup, incremental correction when measurements arrive, and the translation that puts the
//! rendered block at the right place without positioning each row.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the row count (and to call [`RowWindow::reset_rows`] when the rows change)
//! - viewport height and scroll offset
//! - measured row heights after each render
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod calc;
mod options;
mod positions;
mod state;
mod types;
mod window;


pub use options::{
    DEFAULT_BUFFER, DEFAULT_ITEM_SIZE, ParseVirtualTypeError, VirtualType, WindowOptions,
};
pub use positions::PositionIndex;
pub use state::WindowState;
pub use types::{Position, RenderRange};
pub use window::RowWindow;
