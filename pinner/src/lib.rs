//! A headless engine for pinning a table header (or any "fixed" element) to
//! the top of the viewport while its containing block scrolls past.
//!
//! For driver-level utilities (document seam, selector scanning, mounts), see
//! the `pinner-adapter` crate.
//!
//! The strategy is clone-and-toggle: the original element stays in the layout
//! flow, and a clone of it is shown and positioned instead, so pinning never
//! reflows sibling content. This crate computes the clone's style as a pure
//! function of cached layout measurements and the current scroll position.
//!
//! It is UI-agnostic. A DOM (or simulated) layer is expected to provide:
//! - layout measurements on resize (offset-parent chains, box sizes)
//! - scroll offsets on scroll
//! - application of the computed [`CloneStyle`] to the clone node
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod metrics;
mod options;
mod state;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use metrics::{LayoutMetrics, absolute_offset};
pub use options::{DEFAULT_CLASS_NAME, InitialScroll, OnChangeCallback, TrackerOptions};
pub use state::PinSnapshot;
pub use tracker::Tracker;
pub use types::{CloneDisplay, CloneStyle, OffsetStep, Phase, ScrollPosition};
