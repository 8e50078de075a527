use alloc::vec::Vec;

use crate::OffsetStep;

/// The layout read a driver delivers on every resize signal.
///
/// Offset chains are element-first: the first step is the element's offset
/// relative to its offset parent, the next is that parent's offset relative
/// to its own parent, and so on up to the document.
///
/// Layout reads are relatively expensive in a live document, which is why
/// they arrive only on resize; the tracker caches what it derives from them
/// and accepts the staleness window until the next resize signal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutMetrics {
    /// The container's offset-parent chain.
    pub container_chain: Vec<OffsetStep>,
    /// The fixed element's offset-parent chain.
    pub fixed_chain: Vec<OffsetStep>,
    /// The container's rendered height in px.
    pub container_height: u32,
    /// The fixed element's rendered height in px.
    pub fixed_height: u32,
    /// The fixed element's rendered width in px.
    pub fixed_width: u32,
    /// The fixed element's explicit z-index, if it carries one. The clone
    /// inherits it by being a deep clone and is bumped one above while shown.
    pub fixed_z_index: Option<i32>,
}

impl LayoutMetrics {
    pub fn new(container_height: u32, fixed_height: u32, fixed_width: u32) -> Self {
        Self {
            container_chain: Vec::new(),
            fixed_chain: Vec::new(),
            container_height,
            fixed_height,
            fixed_width,
            fixed_z_index: None,
        }
    }

    pub fn with_container_chain(mut self, chain: impl Into<Vec<OffsetStep>>) -> Self {
        self.container_chain = chain.into();
        self
    }

    pub fn with_fixed_chain(mut self, chain: impl Into<Vec<OffsetStep>>) -> Self {
        self.fixed_chain = chain.into();
        self
    }

    pub fn with_fixed_z_index(mut self, z_index: Option<i32>) -> Self {
        self.fixed_z_index = z_index;
        self
    }

    /// Document-relative top of the container: the sum over its whole
    /// offset-parent chain.
    pub fn container_offset_top(&self) -> i64 {
        absolute_offset(&self.container_chain).0
    }

    /// Document-relative left of the fixed element.
    pub fn fixed_offset_left(&self) -> i64 {
        absolute_offset(&self.fixed_chain).1
    }
}

/// Sums an offset-parent chain into a document-relative `(top, left)`.
pub fn absolute_offset(chain: &[OffsetStep]) -> (i64, i64) {
    let mut top = 0i64;
    let mut left = 0i64;
    for step in chain {
        top = top.saturating_add(step.top);
        left = left.saturating_add(step.left);
    }
    (top, left)
}
