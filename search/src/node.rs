//! Search node type.

/// A node on the current descent path.
///
/// Nodes own their state outright. A child is built by
/// [`crate::contract::SearchProblemV1::extend`] from a borrowed parent, so
/// sibling branches never share a mutable structure. A node is dropped as
/// soon as its subtree has been explored.
#[derive(Debug, Clone)]
pub struct SearchNodeV1<S> {
    /// Monotonic identifier in visiting order (root = 0).
    pub node_id: u64,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Full state at this node.
    pub state: S,
}

impl<S> SearchNodeV1<S> {
    /// The root node for a search.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            node_id: 0,
            depth: 0,
            state,
        }
    }

    /// Build a child one level below `self`.
    #[must_use]
    pub fn child(&self, node_id: u64, state: S) -> Self {
        Self {
            node_id,
            depth: self.depth.saturating_add(1),
            state,
        }
    }
}
