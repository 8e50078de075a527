/// One hop of an element's offset-parent chain: the element's position
/// relative to that ancestor, in px.
///
/// Document-relative position is the sum over the whole chain. Summing a
/// single level silently breaks for containers nested inside positioned
/// ancestors, so drivers must report every hop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetStep {
    pub top: i64,
    pub left: i64,
}

/// Document scroll offsets in px.
///
/// Positions in this crate are signed: elements inside relatively-positioned
/// ancestors can sit at negative document offsets, and the trailing-edge top
/// correction is itself negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub top: i64,
    pub left: i64,
}

/// The scroll-position regime a tracker is currently in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Scroll has not passed the container's top edge; the clone is hidden.
    Above,
    /// The header is pinned to the viewport top.
    Pinned,
    /// The container's bottom edge is pushing the header out; the clone
    /// slides up with a negative top.
    Trailing,
}

/// How the clone's `display` property should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CloneDisplay {
    /// `display: none`.
    Hidden,
    /// Mirror the source element's current display value.
    Source,
}

/// The complete style a driver writes to the clone after each signal.
///
/// Every field is determined by the cached layout and the current scroll
/// position; nothing is ever left stale once a signal has been processed.
/// `left`, `width` and `z_index` are computed uniformly; they only render
/// while the clone is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloneStyle {
    pub display: CloneDisplay,
    /// Fixed-position top in px: `0` while pinned, negative while trailing.
    pub top: i64,
    /// Fixed-position left in px, keeping the clone aligned under the
    /// source's columns as the page scrolls horizontally.
    pub left: i64,
    /// Mirrors the source's rendered width.
    pub width: u32,
    /// One above the source's explicit z-index, when it carries one.
    pub z_index: Option<i32>,
}

impl CloneStyle {
    /// The style of a freshly inserted clone: hidden, parked at the top.
    pub fn hidden() -> Self {
        Self {
            display: CloneDisplay::Hidden,
            top: 0,
            left: 0,
            width: 0,
            z_index: None,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.display == CloneDisplay::Hidden
    }
}

impl Default for CloneStyle {
    fn default() -> Self {
        Self::hidden()
    }
}
