use crate::{CloneStyle, Phase, ScrollPosition};

/// A lightweight, serializable snapshot of a tracker's observable state.
///
/// This is useful for handing tracker state across frames, or to a renderer
/// on another thread, without coupling the tracker to any specific UI
/// framework. With `feature = "serde"`, this type implements
/// `Serialize`/`Deserialize`.
///
/// Layout caches are not part of the snapshot; restoring assumes the same
/// metrics are in effect (`phase` and `style` are recomputed from `scroll`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinSnapshot {
    pub phase: Phase,
    pub visible: bool,
    pub style: CloneStyle,
    pub scroll: ScrollPosition,
}
