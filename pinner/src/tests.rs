use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use core::sync::atomic::{AtomicUsize, Ordering};

static INITIAL_SCROLL_PROVIDER_CALLED: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_i64(start as i64, end_exclusive as i64) as u32
    }
}

fn metrics_at(offset_top: i64, container_height: u32, fixed_height: u32) -> LayoutMetrics {
    LayoutMetrics::new(container_height, fixed_height, 320).with_container_chain(vec![
        OffsetStep {
            top: offset_top,
            left: 0,
        },
    ])
}

fn tracker_at(offset_top: i64, container_height: u32, fixed_height: u32) -> Tracker {
    Tracker::new(
        TrackerOptions::new()
            .with_initial_metrics(Some(metrics_at(offset_top, container_height, fixed_height))),
    )
}

fn scroll_to(t: &mut Tracker, top: i64) {
    t.apply_scroll_event(ScrollPosition { top, left: 0 });
}

fn expected_phase(offset_top: i64, max_scroll_top: i64, s: i64) -> Phase {
    if s <= offset_top {
        Phase::Above
    } else if s <= max_scroll_top {
        Phase::Pinned
    } else {
        Phase::Trailing
    }
}

#[test]
fn thresholds_from_layout() {
    // Container at document offset 100, 400 tall, with a 50px header.
    let t = tracker_at(100, 400, 50);
    assert_eq!(t.offset_top(), 100);
    assert_eq!(t.max_scroll_top(), 450);
}

#[test]
fn scenario_hidden_pinned_trailing() {
    let mut t = tracker_at(100, 400, 50);

    scroll_to(&mut t, 50);
    assert_eq!(t.phase(), Phase::Above);
    assert!(!t.visible());
    assert!(t.style().is_hidden());

    scroll_to(&mut t, 200);
    assert_eq!(t.phase(), Phase::Pinned);
    assert!(t.visible());
    assert_eq!(t.style().display, CloneDisplay::Source);
    assert_eq!(t.style().top, 0);

    scroll_to(&mut t, 470);
    assert_eq!(t.phase(), Phase::Trailing);
    assert!(t.visible());
    assert_eq!(t.style().top, -20);
}

#[test]
fn boundaries_are_inclusive_exclusive() {
    let mut t = tracker_at(100, 400, 50);

    // Exactly at the container's top edge: still hidden.
    scroll_to(&mut t, 100);
    assert_eq!(t.phase(), Phase::Above);

    scroll_to(&mut t, 101);
    assert_eq!(t.phase(), Phase::Pinned);

    // Exactly at max scroll: still pinned at 0.
    scroll_to(&mut t, 450);
    assert_eq!(t.phase(), Phase::Pinned);
    assert_eq!(t.style().top, 0);

    scroll_to(&mut t, 451);
    assert_eq!(t.phase(), Phase::Trailing);
    assert_eq!(t.style().top, -1);
}

#[test]
fn trailing_top_magnitude_grows_with_scroll() {
    let mut t = tracker_at(100, 400, 50);
    let mut last = 0i64;
    for s in [451, 500, 600, 1000] {
        scroll_to(&mut t, s);
        assert!(t.visible());
        assert_eq!(t.style().top, 450 - s);
        assert!(t.style().top < last);
        last = t.style().top;
    }
}

#[test]
fn offset_chain_sums_every_hop() {
    // A container nested inside a positioned ancestor must accumulate the
    // whole chain, not just the immediate offset parent.
    let split = LayoutMetrics::new(400, 50, 320).with_container_chain(vec![
        OffsetStep { top: 10, left: 4 },
        OffsetStep { top: 90, left: 6 },
    ]);
    let flat = metrics_at(100, 400, 50);

    assert_eq!(split.container_offset_top(), 100);
    assert_eq!(split.container_offset_top(), flat.container_offset_top());

    let t = Tracker::new(TrackerOptions::new().with_initial_metrics(Some(split)));
    assert_eq!(t.offset_top(), 100);
    assert_eq!(t.max_scroll_top(), 450);
}

#[test]
fn left_tracks_horizontal_scroll_while_visible() {
    let metrics = LayoutMetrics::new(400, 50, 320)
        .with_container_chain(vec![OffsetStep { top: 100, left: 0 }])
        .with_fixed_chain(vec![
            OffsetStep { top: 100, left: 5 },
            OffsetStep { top: 0, left: 25 },
        ]);
    let mut t = Tracker::new(TrackerOptions::new().with_initial_metrics(Some(metrics)));
    assert_eq!(t.fixed_left(), 30);

    t.apply_scroll_event(ScrollPosition { top: 200, left: 12 });
    assert!(t.visible());
    assert_eq!(t.style().left, 18);

    t.apply_scroll_event(ScrollPosition { top: 200, left: 40 });
    assert_eq!(t.style().left, -10);
}

#[test]
fn clone_width_mirrors_fixed_width() {
    let mut t = tracker_at(100, 400, 50);
    assert_eq!(t.style().width, 320);

    let mut narrower = metrics_at(100, 400, 50);
    narrower.fixed_width = 240;
    t.apply_resize_event(narrower);
    assert_eq!(t.style().width, 240);
}

#[test]
fn z_index_bumps_one_above_source() {
    let metrics = metrics_at(100, 400, 50).with_fixed_z_index(Some(10));
    let mut t = Tracker::new(TrackerOptions::new().with_initial_metrics(Some(metrics)));
    scroll_to(&mut t, 200);
    assert_eq!(t.style().z_index, Some(11));

    let mut plain = tracker_at(100, 400, 50);
    scroll_to(&mut plain, 200);
    assert_eq!(plain.style().z_index, None);
}

#[test]
fn recompute_position_is_idempotent() {
    let mut t = tracker_at(100, 400, 50);
    for s in [50, 200, 470] {
        scroll_to(&mut t, s);
        let first = t.style();
        t.recompute_position();
        assert_eq!(t.style(), first);
        t.recompute_position();
        assert_eq!(t.style(), first);
    }
}

#[test]
fn resize_reflects_new_thresholds_immediately() {
    let mut t = tracker_at(100, 400, 50);
    scroll_to(&mut t, 200);
    assert_eq!(t.phase(), Phase::Pinned);

    // The container moved down past the scroll position; the very next
    // recomputation must see the new thresholds, with no stale values.
    t.apply_resize_event(metrics_at(300, 400, 50));
    assert_eq!(t.offset_top(), 300);
    assert_eq!(t.max_scroll_top(), 650);
    assert_eq!(t.phase(), Phase::Above);
    assert!(t.style().is_hidden());
}

#[test]
fn fixed_taller_than_container_skips_pinned_regime() {
    // max_scroll_top (50) sits below offset_top (100): the pinned interval is
    // empty and any overshoot goes straight to trailing.
    let mut t = tracker_at(100, 50, 100);
    assert_eq!(t.max_scroll_top(), 50);

    scroll_to(&mut t, 80);
    assert_eq!(t.phase(), Phase::Above);

    scroll_to(&mut t, 120);
    assert_eq!(t.phase(), Phase::Trailing);
    assert_eq!(t.style().top, -70);
}

#[test]
fn removed_tracker_ignores_signals() {
    let notified = Arc::new(AtomicUsize::new(0));
    let mut t = Tracker::new(
        TrackerOptions::new()
            .with_initial_metrics(Some(metrics_at(100, 400, 50)))
            .with_on_change(Some({
                let notified = Arc::clone(&notified);
                move |_t: &Tracker| {
                    notified.fetch_add(1, Ordering::Relaxed);
                }
            })),
    );
    scroll_to(&mut t, 200);
    let frozen = t.style();
    let fired = notified.load(Ordering::Relaxed);

    t.remove();
    assert!(t.removed());
    t.remove(); // idempotent

    scroll_to(&mut t, 470);
    t.apply_resize_event(metrics_at(300, 400, 50));
    t.recompute_position();
    t.restore(t.snapshot());

    assert_eq!(t.style(), frozen);
    assert_eq!(notified.load(Ordering::Relaxed), fired);
}

#[test]
fn batch_update_coalesces_notifications() {
    let notified = Arc::new(AtomicUsize::new(0));
    let mut t = Tracker::new(
        TrackerOptions::new()
            .with_initial_metrics(Some(metrics_at(100, 400, 50)))
            .with_on_change(Some({
                let notified = Arc::clone(&notified);
                move |_t: &Tracker| {
                    notified.fetch_add(1, Ordering::Relaxed);
                }
            })),
    );

    notified.store(0, Ordering::Relaxed);
    t.batch_update(|t| {
        t.set_scroll(ScrollPosition { top: 200, left: 0 });
        t.recompute_layout(metrics_at(120, 400, 50));
        t.recompute_position();
    });
    assert_eq!(notified.load(Ordering::Relaxed), 1);
}

#[test]
fn unchanged_scroll_does_not_notify() {
    let notified = Arc::new(AtomicUsize::new(0));
    let mut t = Tracker::new(
        TrackerOptions::new()
            .with_initial_metrics(Some(metrics_at(100, 400, 50)))
            .with_on_change(Some({
                let notified = Arc::clone(&notified);
                move |_t: &Tracker| {
                    notified.fetch_add(1, Ordering::Relaxed);
                }
            })),
    );
    scroll_to(&mut t, 200);
    let fired = notified.load(Ordering::Relaxed);
    scroll_to(&mut t, 200);
    assert_eq!(notified.load(Ordering::Relaxed), fired);
}

#[test]
fn on_change_observes_transitions() {
    let shown = Arc::new(AtomicUsize::new(0));
    let mut t = Tracker::new(
        TrackerOptions::new()
            .with_initial_metrics(Some(metrics_at(100, 400, 50)))
            .with_on_change(Some({
                let shown = Arc::clone(&shown);
                move |t: &Tracker| {
                    if t.visible() {
                        shown.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })),
    );

    scroll_to(&mut t, 200);
    scroll_to(&mut t, 50);
    scroll_to(&mut t, 470);
    assert_eq!(shown.load(Ordering::Relaxed), 2);
}

#[test]
fn initial_scroll_provider_is_resolved_by_construction() {
    INITIAL_SCROLL_PROVIDER_CALLED.store(0, Ordering::Relaxed);
    let options = TrackerOptions::new()
        .with_initial_metrics(Some(metrics_at(100, 400, 50)))
        .with_initial_scroll_provider(|| {
            INITIAL_SCROLL_PROVIDER_CALLED.fetch_add(1, Ordering::Relaxed);
            ScrollPosition { top: 200, left: 0 }
        });
    // Building options does not resolve the provider.
    assert_eq!(INITIAL_SCROLL_PROVIDER_CALLED.load(Ordering::Relaxed), 0);

    // Construction does, and the state is consistent before first paint.
    let t = Tracker::new(options);
    assert_eq!(INITIAL_SCROLL_PROVIDER_CALLED.load(Ordering::Relaxed), 1);
    assert_eq!(t.phase(), Phase::Pinned);
    assert_eq!(t.style().top, 0);
}

#[test]
fn default_class_name_is_forwarded() {
    let t = tracker_at(100, 400, 50);
    assert_eq!(t.class_name(), DEFAULT_CLASS_NAME);

    let named = Tracker::new(TrackerOptions::new().with_class_name("pinned"));
    assert_eq!(named.class_name(), "pinned");
}

#[test]
fn snapshot_restore_round_trips_observable_state() {
    let mut a = tracker_at(100, 400, 50);
    scroll_to(&mut a, 470);
    let snap = a.snapshot();
    assert_eq!(snap.phase, Phase::Trailing);

    let mut b = tracker_at(100, 400, 50);
    b.restore(snap);
    assert_eq!(b.snapshot(), snap);
    assert_eq!(b.style(), a.style());
}

#[test]
fn randomized_sweep_matches_expected_model() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..500 {
        let offset_top = rng.gen_range_i64(-50, 500);
        let fixed_left = rng.gen_range_i64(-20, 200);
        let container_height = rng.gen_range_u32(10, 600);
        let fixed_height = rng.gen_range_u32(1, 100);
        let metrics = LayoutMetrics::new(container_height, fixed_height, 320)
            .with_container_chain(vec![OffsetStep {
                top: offset_top,
                left: 0,
            }])
            .with_fixed_chain(vec![OffsetStep {
                top: offset_top,
                left: fixed_left,
            }]);
        let mut t = Tracker::new(TrackerOptions::new().with_initial_metrics(Some(metrics)));
        let max_scroll_top = offset_top + container_height as i64 - fixed_height as i64;
        assert_eq!(t.max_scroll_top(), max_scroll_top);

        for _ in 0..20 {
            let s = rng.gen_range_i64(-100, 1200);
            let left = rng.gen_range_i64(0, 300);
            t.apply_scroll_event(ScrollPosition { top: s, left });

            let phase = expected_phase(offset_top, max_scroll_top, s);
            assert_eq!(t.phase(), phase);
            assert_eq!(t.visible(), phase != Phase::Above);
            match phase {
                Phase::Above => assert!(t.style().is_hidden()),
                Phase::Pinned => assert_eq!(t.style().top, 0),
                Phase::Trailing => assert_eq!(t.style().top, max_scroll_top - s),
            }
            assert_eq!(t.style().left, fixed_left - left);
        }
    }
}
