//! Driver utilities for the `pinner` crate.
//!
//! The `pinner` crate is UI-agnostic and focuses on the core math and state.
//! This crate provides the framework-neutral plumbing a document layer needs:
//!
//! - The [`Dom`] seam: selection, measurement, clone insertion and styling.
//! - [`Mount`]: one tracked (container, fixed) pair wired to a document.
//! - [`scan`]: the selector-scan factory producing a [`MountSet`].
//! - [`Registry`]/[`Command`]: the container-keyed attach/remove surface.
//!
//! This crate is intentionally framework-agnostic (no web-sys/DOM bindings);
//! tests drive it against an in-memory fake document.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod dom;
mod mount;
mod registry;
mod scan;


pub use dom::Dom;
pub use mount::Mount;
pub use registry::{Command, Registry};
pub use scan::{MountSet, scan};
