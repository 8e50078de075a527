use alloc::sync::Arc;
use core::cell::Cell;

use crate::{
    CloneDisplay, CloneStyle, LayoutMetrics, Phase, PinSnapshot, ScrollPosition, TrackerOptions,
};

/// A headless sticky-header tracker.
///
/// One tracker exists per (container, fixed element) pair. It is
/// intentionally UI-agnostic:
/// - It holds no DOM objects.
/// - A driver feeds it layout measurements (resize signals) and scroll
///   offsets (scroll signals).
/// - The computed [`CloneStyle`] is what the driver writes to the clone node
///   after each signal.
///
/// For the selector-scan factory and document plumbing, see the
/// `pinner-adapter` crate.
#[derive(Clone, Debug)]
pub struct Tracker {
    options: TrackerOptions,
    metrics: LayoutMetrics,

    // Document-relative caches, refreshed on resize only. Scroll handling
    // reads these instead of forcing a fresh layout pass per event.
    offset_top: i64,
    fixed_left: i64,
    max_scroll_top: i64,

    scroll: ScrollPosition,
    phase: Phase,
    visible: bool,
    style: CloneStyle,
    removed: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Tracker {
    /// Creates a new tracker from options.
    ///
    /// `options.initial_metrics` and `options.initial_scroll` are applied
    /// immediately through a full layout-then-position recomputation, so the
    /// state is consistent before first paint. No change notification fires
    /// during construction.
    pub fn new(options: TrackerOptions) -> Self {
        let scroll = options.initial_scroll.resolve();
        let initial_metrics = options.initial_metrics.clone();
        pdebug!(class_name = %options.class_name, "Tracker::new");
        let mut t = Self {
            options,
            metrics: LayoutMetrics::default(),
            offset_top: 0,
            fixed_left: 0,
            max_scroll_top: 0,
            scroll,
            phase: Phase::Above,
            visible: false,
            style: CloneStyle::hidden(),
            removed: false,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        match initial_metrics {
            Some(metrics) => t.apply_layout(metrics),
            None => t.apply_position(),
        }
        t
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    /// The extra class the driver applies to the clone.
    pub fn class_name(&self) -> &str {
        &self.options.class_name
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Tracker) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.removed {
            return;
        }
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for drivers: a resize signal typically updates metrics and
    /// scroll together, and without batching each setter may trigger
    /// `on_change`, which can be expensive if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// The clone style after the last processed signal.
    pub fn style(&self) -> CloneStyle {
        self.style
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn removed(&self) -> bool {
        self.removed
    }

    pub fn scroll(&self) -> ScrollPosition {
        self.scroll
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Document-relative top of the container, cached at the last resize.
    pub fn offset_top(&self) -> i64 {
        self.offset_top
    }

    /// Document-relative left of the fixed element, cached at the last
    /// resize.
    pub fn fixed_left(&self) -> i64 {
        self.fixed_left
    }

    /// The scroll position beyond which the container's bottom edge pushes
    /// the clone out: `offset_top + container_height - fixed_height`.
    pub fn max_scroll_top(&self) -> i64 {
        self.max_scroll_top
    }

    /// Recomputes the layout caches from a fresh measurement, then the
    /// position. Invoked on every resize signal (and once at construction).
    pub fn recompute_layout(&mut self, metrics: LayoutMetrics) {
        if self.removed {
            return;
        }
        self.apply_layout(metrics);
        self.notify();
    }

    /// Re-runs the position state machine against the current scroll
    /// position. Invoked on every scroll signal, and at the end of every
    /// layout recomputation. Idempotent: with no intervening state change,
    /// the resulting style is identical.
    pub fn recompute_position(&mut self) {
        if self.removed {
            return;
        }
        self.apply_position();
        self.notify();
    }

    pub fn set_scroll(&mut self, scroll: ScrollPosition) {
        if self.removed || self.scroll == scroll {
            return;
        }
        self.scroll = scroll;
        self.apply_position();
        self.notify();
    }

    /// Applies a scroll signal from the driver.
    pub fn apply_scroll_event(&mut self, scroll: ScrollPosition) {
        ptrace!(top = scroll.top, left = scroll.left, "apply_scroll_event");
        self.batch_update(|t| {
            t.set_scroll(scroll);
        });
    }

    /// Applies a resize signal from the driver.
    pub fn apply_resize_event(&mut self, metrics: LayoutMetrics) {
        self.batch_update(|t| {
            t.recompute_layout(metrics);
        });
    }

    /// Returns a snapshot of the externally observable state.
    pub fn snapshot(&self) -> PinSnapshot {
        PinSnapshot {
            phase: self.phase,
            visible: self.visible,
            style: self.style,
            scroll: self.scroll,
        }
    }

    /// Restores scroll state from a previously captured snapshot.
    ///
    /// Derived fields are recomputed rather than trusted, so a snapshot taken
    /// under the same layout reproduces the same style.
    pub fn restore(&mut self, snapshot: PinSnapshot) {
        if self.removed {
            return;
        }
        self.scroll = snapshot.scroll;
        self.apply_position();
        self.notify();
    }

    /// Marks the tracker removed. Idempotent.
    ///
    /// Afterwards every signal entry point is a no-op and `on_change` never
    /// fires again. Unregistering listeners and detaching the clone node are
    /// driver concerns.
    pub fn remove(&mut self) {
        if self.removed {
            return;
        }
        pdebug!("Tracker::remove");
        self.removed = true;
    }

    fn apply_layout(&mut self, metrics: LayoutMetrics) {
        self.offset_top = metrics.container_offset_top();
        self.fixed_left = metrics.fixed_offset_left();
        self.max_scroll_top = self
            .offset_top
            .saturating_add(metrics.container_height as i64)
            .saturating_sub(metrics.fixed_height as i64);
        if self.max_scroll_top < self.offset_top {
            // Degenerate layout: the header is taller than its container, so
            // the pinned regime is empty and any overshoot goes straight to
            // trailing.
            pwarn!(
                offset_top = self.offset_top,
                max_scroll_top = self.max_scroll_top,
                "fixed element taller than container"
            );
        }
        pdebug!(
            offset_top = self.offset_top,
            fixed_left = self.fixed_left,
            max_scroll_top = self.max_scroll_top,
            "recompute_layout"
        );
        self.metrics = metrics;
        self.apply_position();
    }

    fn apply_position(&mut self) {
        let s = self.scroll.top;
        let phase = if s <= self.offset_top {
            Phase::Above
        } else if s <= self.max_scroll_top {
            Phase::Pinned
        } else {
            Phase::Trailing
        };

        let (display, top, visible) = match phase {
            Phase::Above => (CloneDisplay::Hidden, 0, false),
            Phase::Pinned => (CloneDisplay::Source, 0, true),
            Phase::Trailing => (
                CloneDisplay::Source,
                self.max_scroll_top.saturating_sub(s),
                true,
            ),
        };

        self.phase = phase;
        self.visible = visible;
        self.style = CloneStyle {
            display,
            top,
            left: self.fixed_left.saturating_sub(self.scroll.left),
            width: self.metrics.fixed_width,
            z_index: self.metrics.fixed_z_index.map(|z| z.saturating_add(1)),
        };
    }
}
