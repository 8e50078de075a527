use alloc::vec::Vec;

use pinner::TrackerOptions;

use crate::{Dom, Mount};

/// Scans `dom` for containers matching `container_selector` and builds one
/// [`Mount`] per container in which `fixed_selector` resolves.
///
/// Containers without a resolvable fixed element are skipped — the scan is a
/// partial success, not a failure. An empty container match yields an empty
/// set. The result preserves document order.
pub fn scan<D: Dom>(
    dom: &mut D,
    container_selector: &str,
    fixed_selector: &str,
    options: TrackerOptions,
) -> MountSet<D::Element> {
    let containers = dom.select_all(container_selector);
    let mut mounts = Vec::with_capacity(containers.len());
    for container in &containers {
        if let Some(mount) = Mount::attach(dom, container, fixed_selector, options.clone()) {
            mounts.push(mount);
        }
    }
    MountSet { mounts }
}

/// An ordered collection of mounts sharing one disposal handle.
#[derive(Clone, Debug)]
pub struct MountSet<E> {
    mounts: Vec<Mount<E>>,
}

impl<E: Clone + PartialEq> MountSet<E> {
    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Mount<E>> {
        self.mounts.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Mount<E>> {
        self.mounts.get_mut(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Mount<E>> {
        self.mounts.iter()
    }

    /// Fans a resize signal out to every member in order.
    pub fn on_resize<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        for mount in &mut self.mounts {
            mount.on_resize(dom);
        }
    }

    /// Fans a scroll signal out to every member in order.
    pub fn on_scroll<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        for mount in &mut self.mounts {
            mount.on_scroll(dom);
        }
    }

    /// Disposes every member in order. Idempotent per member.
    pub fn remove_all<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        for mount in &mut self.mounts {
            mount.remove(dom);
        }
    }
}
