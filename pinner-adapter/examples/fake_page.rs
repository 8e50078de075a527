// Example: an end-to-end simulated page. A tiny in-memory `Dom`
// implementation stands in for a real document; the same wiring applies to
// any element-handle type a driver can select, measure, and style.
use pinner::{CloneStyle, LayoutMetrics, OffsetStep, ScrollPosition, TrackerOptions};
use pinner_adapter::{Dom, scan};

#[derive(Clone, Debug)]
struct Node {
    tag: &'static str,
    parent: Option<usize>,
    metrics: LayoutMetrics,
    style: Option<CloneStyle>,
    clone_of: Option<usize>,
    detached: bool,
}

#[derive(Clone, Debug, Default)]
struct Page {
    nodes: Vec<Node>,
    scroll: ScrollPosition,
}

impl Page {
    fn add(&mut self, tag: &'static str, parent: Option<usize>, metrics: LayoutMetrics) -> usize {
        self.nodes.push(Node {
            tag,
            parent,
            metrics,
            style: None,
            clone_of: None,
            detached: false,
        });
        self.nodes.len() - 1
    }
}

impl Dom for Page {
    type Element = usize;

    fn select_all(&self, selector: &str) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.tag == selector && n.clone_of.is_none() && !n.detached)
            .map(|(id, _)| id)
            .collect()
    }

    fn select_first_in(&self, scope: &usize, selector: &str) -> Option<usize> {
        self.nodes
            .iter()
            .enumerate()
            .find(|(_, n)| n.parent == Some(*scope) && n.tag == selector && n.clone_of.is_none())
            .map(|(id, _)| id)
    }

    fn measure(&self, container: &usize, _fixed: &usize) -> LayoutMetrics {
        self.nodes[*container].metrics.clone()
    }

    fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    fn insert_clone_before(&mut self, fixed: &usize, class_name: &str) -> usize {
        println!("  <dom> clone inserted before #{fixed} with class {class_name:?}");
        let parent = self.nodes[*fixed].parent;
        let tag = self.nodes[*fixed].tag;
        self.nodes.push(Node {
            tag,
            parent,
            metrics: LayoutMetrics::default(),
            style: Some(CloneStyle::hidden()),
            clone_of: Some(*fixed),
            detached: false,
        });
        self.nodes.len() - 1
    }

    fn apply_clone_style(&mut self, clone: &usize, style: &CloneStyle) {
        self.nodes[*clone].style = Some(*style);
    }

    fn detach(&mut self, element: &usize) {
        println!("  <dom> clone #{element} detached");
        self.nodes[*element].detached = true;
    }
}

fn main() {
    let mut page = Page::default();

    // Two tables with headers, one headerless list that the scan will skip.
    let table_a = page.add(
        "table",
        None,
        LayoutMetrics::new(400, 50, 640)
            .with_container_chain(vec![OffsetStep { top: 100, left: 0 }]),
    );
    page.add("thead", Some(table_a), LayoutMetrics::default());
    let table_b = page.add(
        "table",
        None,
        LayoutMetrics::new(300, 40, 640)
            .with_container_chain(vec![OffsetStep { top: 700, left: 0 }]),
    );
    page.add("thead", Some(table_b), LayoutMetrics::default());
    page.add("table", None, LayoutMetrics::new(200, 0, 640));

    let mut set = scan(
        &mut page,
        "table",
        "thead",
        TrackerOptions::new().with_class_name("pinned"),
    );
    println!("scan: {} of 3 containers mounted", set.len());

    for top in [0i64, 150, 460, 720, 980, 1100] {
        page.scroll = ScrollPosition { top, left: 0 };
        set.on_scroll(&mut page);
        for mount in set.iter() {
            let style = page.nodes[*mount.clone_handle()].style.unwrap();
            println!(
                "scroll={top}: container #{:?} phase={:?} top={} hidden={}",
                mount.container(),
                mount.tracker().phase(),
                style.top,
                style.is_hidden()
            );
        }
    }

    set.remove_all(&mut page);
    println!("removed all mounts");
}
