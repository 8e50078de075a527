use alloc::vec::Vec;

use pinner::TrackerOptions;

use crate::{Dom, Mount};

/// A command for [`Registry::apply`].
///
/// This mirrors the entry point style of widget plugins that take a
/// pre-selected container plus either a fixed-element selector (attach) or a
/// `"remove"` command string.
#[derive(Clone, Debug)]
pub enum Command<'a> {
    /// Build exactly one mount for the container and store its handle.
    Attach {
        fixed_selector: &'a str,
        options: TrackerOptions,
    },
    /// Dispose the container's stored mount, if any.
    Remove,
}

/// Stores one mount handle per container element.
///
/// Elements are only required to be `PartialEq`, so this is an association
/// list; a registry holds a handful of containers, not thousands.
#[derive(Clone, Debug)]
pub struct Registry<E> {
    entries: Vec<(E, Mount<E>)>,
}

impl<E: Clone + PartialEq> Registry<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Applies a command to one container. Returns whether it took effect.
    ///
    /// `Attach` replaces (and disposes) any mount previously stored for the
    /// container, and returns `false` when the fixed selector resolves
    /// nothing. `Remove` on an untracked container returns `false`.
    pub fn apply<D: Dom<Element = E>>(
        &mut self,
        dom: &mut D,
        container: &E,
        command: Command<'_>,
    ) -> bool {
        match command {
            Command::Attach {
                fixed_selector,
                options,
            } => {
                let Some(mount) = Mount::attach(dom, container, fixed_selector, options) else {
                    return false;
                };
                if let Some(mut previous) = self.take(container) {
                    previous.remove(dom);
                }
                self.entries.push((container.clone(), mount));
                true
            }
            Command::Remove => {
                let Some(mut mount) = self.take(container) else {
                    return false;
                };
                mount.remove(dom);
                true
            }
        }
    }

    /// The mount stored for `container`, if any.
    pub fn get(&self, container: &E) -> Option<&Mount<E>> {
        self.entries
            .iter()
            .find(|(element, _)| element == container)
            .map(|(_, mount)| mount)
    }

    pub fn get_mut(&mut self, container: &E) -> Option<&mut Mount<E>> {
        self.entries
            .iter_mut()
            .find(|(element, _)| element == container)
            .map(|(_, mount)| mount)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fans a resize signal out to every stored mount.
    pub fn on_resize<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        for (_, mount) in &mut self.entries {
            mount.on_resize(dom);
        }
    }

    /// Fans a scroll signal out to every stored mount.
    pub fn on_scroll<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        for (_, mount) in &mut self.entries {
            mount.on_scroll(dom);
        }
    }

    fn take(&mut self, container: &E) -> Option<Mount<E>> {
        let index = self
            .entries
            .iter()
            .position(|(element, _)| element == container)?;
        Some(self.entries.remove(index).1)
    }
}

impl<E: Clone + PartialEq> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}
