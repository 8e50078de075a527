use alloc::vec::Vec;

use pinner::{CloneStyle, LayoutMetrics, ScrollPosition};

/// The seam between the headless core and a real (or simulated) document.
///
/// A driver implements this once for its document technology; nothing else
/// in this crate names a concrete DOM. Selection is native-only: the
/// selector-engine fallback chains of older widgets served an obsolete
/// browser generation and are not part of this contract.
pub trait Dom {
    /// An opaque element handle.
    type Element: Clone + PartialEq;

    /// All elements matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Vec<Self::Element>;

    /// The first element matching `selector` inside `scope`, if any.
    fn select_first_in(&self, scope: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Reads the layout measurements for a (container, fixed) pair.
    ///
    /// The reported offset chains must cover the full offset-parent chain of
    /// each element; a single level silently breaks for containers nested
    /// inside positioned ancestors.
    fn measure(&self, container: &Self::Element, fixed: &Self::Element) -> LayoutMetrics;

    /// The current document scroll offsets.
    fn scroll_position(&self) -> ScrollPosition;

    /// Deep-clones `fixed`, adds `class_name` to the clone's class list,
    /// inserts it immediately before the original — initially hidden
    /// (`display: none; position: fixed; top: 0`) — and returns its handle.
    fn insert_clone_before(&mut self, fixed: &Self::Element, class_name: &str) -> Self::Element;

    /// Writes a computed style to the clone.
    fn apply_clone_style(&mut self, clone: &Self::Element, style: &CloneStyle);

    /// Detaches an element from the document.
    fn detach(&mut self, element: &Self::Element);
}
