//! The container collaborator seam.
//!
//! The engine never owns UI nodes; it issues placement commands through this
//! trait and the host maps them onto its real child list (a DOM subtree, a
//! widget row set, and so on).

/// Minimal placement interface over a host-owned child list.
///
/// Handles are opaque to the engine: it only clones them into the caller's
/// mirror array and hands them back as placement references. Inserting a
/// handle that is already a child MOVES it (the host removes it from its
/// current slot before re-inserting), so placement migrates existing nodes
/// instead of destroying and recreating them, which preserves node-hosted
/// state such as focus or scroll position.
pub trait Container {
    type Handle: Clone + PartialEq;

    /// Place `child` at the end of the child list.
    fn append_child(&mut self, child: Self::Handle);

    /// Place `child` immediately before `reference`; a `None` reference
    /// appends at the end.
    fn insert_before(&mut self, child: Self::Handle, reference: Option<&Self::Handle>);

    /// Snapshot of the current child order. Diagnostics and tests only; the
    /// placement algorithms never read it.
    fn children(&self) -> Vec<Self::Handle>;
}

/// In-memory container over a `Vec`, honoring the move semantics of
/// [`Container::insert_before`].
///
/// The reference implementation used by the test suite; also usable by
/// headless hosts that keep their child list in a plain vector.
///
/// # Example
///
/// ```
/// use ordered_view::{Container, ListContainer};
///
/// let mut container: ListContainer<u32> = ListContainer::new();
/// container.append_child(1);
/// container.append_child(2);
/// container.insert_before(3, Some(&2));
/// assert_eq!(container.children(), vec![1, 3, 2]);
///
/// // Re-inserting an existing child moves it
/// container.insert_before(2, Some(&1));
/// assert_eq!(container.children(), vec![2, 1, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListContainer<H> {
    children: Vec<H>,
}

impl<H> ListContainer<H> {
    pub fn new() -> Self {
        ListContainer {
            children: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<H: Clone + PartialEq> ListContainer<H> {
    fn detach(&mut self, child: &H) {
        if let Some(position) = self.children.iter().position(|c| c == child) {
            self.children.remove(position);
        }
    }
}

impl<H: Clone + PartialEq> Container for ListContainer<H> {
    type Handle = H;

    fn append_child(&mut self, child: H) {
        self.detach(&child);
        self.children.push(child);
    }

    /// A reference that is not currently a child falls back to appending at
    /// the end; the engine itself never passes a stale reference.
    fn insert_before(&mut self, child: H, reference: Option<&H>) {
        self.detach(&child);
        let position = reference.and_then(|r| self.children.iter().position(|c| c == r));
        match position {
            Some(index) => self.children.insert(index, child),
            None => self.children.push(child),
        }
    }

    fn children(&self) -> Vec<H> {
        self.children.clone()
    }
}
