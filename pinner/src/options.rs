use alloc::string::String;
use alloc::sync::Arc;

use crate::tracker::Tracker;
use crate::{LayoutMetrics, ScrollPosition};

/// The extra class applied to every clone when none is configured.
pub const DEFAULT_CLASS_NAME: &str = "fixed";

/// A callback fired when a tracker state update occurs.
pub type OnChangeCallback = Arc<dyn Fn(&Tracker) + Send + Sync>;

/// Initial scroll position configuration.
#[derive(Clone)]
pub enum InitialScroll {
    /// A fixed initial position.
    Value(ScrollPosition),
    /// A lazily evaluated provider (called by `Tracker::new`).
    Provider(Arc<dyn Fn() -> ScrollPosition + Send + Sync>),
}

impl InitialScroll {
    pub(crate) fn resolve(&self) -> ScrollPosition {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialScroll {
    fn default() -> Self {
        Self::Value(ScrollPosition::default())
    }
}

impl core::fmt::Debug for InitialScroll {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::Tracker`].
///
/// Cheap to clone: the change callback is stored in an `Arc`.
pub struct TrackerOptions {
    /// Extra class the driver applies to the clone. The tracker stores and
    /// forwards it; only the driver interprets it.
    pub class_name: String,
    /// Layout measurements applied at construction, so the state is
    /// consistent before first paint.
    pub initial_metrics: Option<LayoutMetrics>,
    /// Initial scroll position (value or lazy provider).
    pub initial_scroll: InitialScroll,
    /// Optional callback fired when the tracker's observable state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl TrackerOptions {
    pub fn new() -> Self {
        Self {
            class_name: String::from(DEFAULT_CLASS_NAME),
            initial_metrics: None,
            initial_scroll: InitialScroll::default(),
            on_change: None,
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_initial_metrics(mut self, initial_metrics: Option<LayoutMetrics>) -> Self {
        self.initial_metrics = initial_metrics;
        self
    }

    pub fn with_initial_scroll(mut self, initial_scroll: InitialScroll) -> Self {
        self.initial_scroll = initial_scroll;
        self
    }

    pub fn with_initial_scroll_value(mut self, initial_scroll: ScrollPosition) -> Self {
        self.initial_scroll = InitialScroll::Value(initial_scroll);
        self
    }

    pub fn with_initial_scroll_provider(
        mut self,
        initial_scroll: impl Fn() -> ScrollPosition + Send + Sync + 'static,
    ) -> Self {
        self.initial_scroll = InitialScroll::Provider(Arc::new(initial_scroll));
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Tracker) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TrackerOptions {
    fn clone(&self) -> Self {
        Self {
            class_name: self.class_name.clone(),
            initial_metrics: self.initial_metrics.clone(),
            initial_scroll: self.initial_scroll.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for TrackerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrackerOptions")
            .field("class_name", &self.class_name)
            .field("initial_metrics", &self.initial_metrics)
            .field("initial_scroll", &self.initial_scroll)
            .finish_non_exhaustive()
    }
}
