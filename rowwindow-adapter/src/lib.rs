//! Event wiring for the `rowwindow` engine.
//!
//! The `rowwindow` crate is UI-agnostic and focuses on the windowing math. This crate provides
//! the framework-neutral pieces an adapter needs around it:
//!
//! - [`ScrollController`]: mount/unmount lifecycle, throttled scroll and resize handling, and the
//!   two-phase render → measure/correct pipeline
//! - [`Throttle`]: a time-based gate with trailing coalescing
//! - Surface traits for the scroll container, header, spacer and measurement source
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod surface;
mod throttle;

#[cfg(test)]
mod tests;

pub use controller::{Lifecycle, ScrollController};
pub use surface::{HeaderSurface, MeasureSurface, ScrollSurface, SpacerSurface};
pub use throttle::{DEFAULT_THROTTLE_MS, Throttle};
