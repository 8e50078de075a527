use pinner::{Tracker, TrackerOptions};

use crate::Dom;

/// One tracked (container, fixed) pair wired to a document.
///
/// A mount owns the clone it inserted and runs the synchronous
/// read-then-write cycle on every signal: read live measurements or scroll
/// position from the document, feed the tracker, write the resulting style
/// back to the clone. Each cycle completes before the entry point returns.
#[derive(Clone, Debug)]
pub struct Mount<E> {
    tracker: Tracker,
    container: E,
    fixed: E,
    clone: E,
    removed: bool,
}

impl<E: Clone + PartialEq> Mount<E> {
    /// Resolves `fixed_selector` inside `container` and builds one mount.
    ///
    /// Returns `None` when the selector yields no match; a tracker is never
    /// constructed for an unresolved pair. On success the clone is inserted
    /// and the initial style is written, so the pair is consistent before
    /// first paint.
    pub fn attach<D: Dom<Element = E>>(
        dom: &mut D,
        container: &E,
        fixed_selector: &str,
        options: TrackerOptions,
    ) -> Option<Self> {
        let fixed = dom.select_first_in(container, fixed_selector)?;
        let clone = dom.insert_clone_before(&fixed, &options.class_name);
        let metrics = dom.measure(container, &fixed);
        let scroll = dom.scroll_position();
        let tracker = Tracker::new(
            options
                .with_initial_metrics(Some(metrics))
                .with_initial_scroll_value(scroll),
        );
        let mut mount = Self {
            tracker,
            container: container.clone(),
            fixed,
            clone,
            removed: false,
        };
        mount.write_style(dom);
        Some(mount)
    }

    /// Handles a resize signal: re-measure, recompute, restyle.
    pub fn on_resize<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        if self.removed {
            return;
        }
        let metrics = dom.measure(&self.container, &self.fixed);
        self.tracker.apply_resize_event(metrics);
        self.write_style(dom);
    }

    /// Handles a scroll signal against the cached layout.
    pub fn on_scroll<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        if self.removed {
            return;
        }
        let scroll = dom.scroll_position();
        self.tracker.apply_scroll_event(scroll);
        self.write_style(dom);
    }

    /// Disposes the mount: stops signal handling and detaches the clone from
    /// the document. Idempotent; afterwards no further style mutation occurs.
    pub fn remove<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        if self.removed {
            return;
        }
        self.removed = true;
        self.tracker.remove();
        dom.detach(&self.clone);
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }

    pub fn container(&self) -> &E {
        &self.container
    }

    /// The clone node this mount owns and styles.
    pub fn clone_handle(&self) -> &E {
        &self.clone
    }

    fn write_style<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        let style = self.tracker.style();
        dom.apply_clone_style(&self.clone, &style);
    }
}
