// Example: driving the headless tracker directly, simulating a page that
// scrolls past a 400px-tall table whose header should stay pinned.
use pinner::{LayoutMetrics, OffsetStep, ScrollPosition, Tracker, TrackerOptions};

fn main() {
    // A table at document offset 100 with a 50px header row. The offset is
    // reported as a full offset-parent chain (here a positioned wrapper at 10
    // plus the table at 90 inside it).
    let metrics = LayoutMetrics::new(400, 50, 640)
        .with_container_chain(vec![
            OffsetStep { top: 90, left: 0 },
            OffsetStep { top: 10, left: 0 },
        ])
        .with_fixed_chain(vec![OffsetStep { top: 100, left: 20 }]);

    let mut tracker = Tracker::new(
        TrackerOptions::new()
            .with_class_name("pinned")
            .with_initial_metrics(Some(metrics))
            .with_on_change(Some(|t: &Tracker| {
                println!(
                    "  on_change: phase={:?} visible={} style={:?}",
                    t.phase(),
                    t.visible(),
                    t.style()
                );
            })),
    );

    println!(
        "thresholds: offset_top={} max_scroll_top={}",
        tracker.offset_top(),
        tracker.max_scroll_top()
    );

    // A driver would feed real scroll events; here we sweep through the three
    // regimes: above the container, pinned, and trailing out.
    for top in [0, 50, 101, 300, 450, 470, 600] {
        println!("scroll to {top}:");
        tracker.apply_scroll_event(ScrollPosition { top, left: 0 });
    }

    tracker.remove();
    println!("removed; further signals are ignored");
    tracker.apply_scroll_event(ScrollPosition { top: 200, left: 0 });
}
