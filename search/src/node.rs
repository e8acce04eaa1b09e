//! Search nodes and the per-search node arena.
//!
//! The frontier never stores whole paths. It stores node ids into a
//! [`NodeArena`]; each node records its parent id, so the path to any node is
//! recovered by walking parent links once the goal is popped. Frontier memory
//! is therefore independent of path length.

use crate::path::PathV1;

/// An immutable search node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNodeV1<S> {
    /// Arena index; assigned in creation order.
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// The state reached at this node.
    pub state: S,
    /// Tree depth (root = 0). The path to this node has `depth + 1` states.
    pub depth: u32,
}

impl<S> SearchNodeV1<S> {
    /// Number of states on the path from the root to this node.
    #[must_use]
    pub fn path_len(&self) -> u64 {
        u64::from(self.depth) + 1
    }
}

/// Append-only node storage for one search invocation.
#[derive(Debug, Clone)]
pub struct NodeArena<S> {
    nodes: Vec<SearchNodeV1<S>>,
}

impl<S> NodeArena<S> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a root node and return its id.
    pub fn push_root(&mut self, state: S) -> u64 {
        self.push(None, state, 0)
    }

    /// Add a child of `parent_id` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent_id` was not issued by this arena.
    pub fn push_child(&mut self, parent_id: u64, state: S) -> u64 {
        let depth = self.get(parent_id).depth + 1;
        self.push(Some(parent_id), state, depth)
    }

    fn push(&mut self, parent_id: Option<u64>, state: S, depth: u32) -> u64 {
        let node_id = self.nodes.len() as u64;
        self.nodes.push(SearchNodeV1 {
            node_id,
            parent_id,
            state,
            depth,
        });
        node_id
    }

    /// Look up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `node_id` was not issued by this arena.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn get(&self, node_id: u64) -> &SearchNodeV1<S> {
        &self.nodes[node_id as usize]
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids from the root to `node_id`, inclusive.
    #[must_use]
    pub fn lineage(&self, node_id: u64) -> Vec<u64> {
        let mut ids = Vec::with_capacity(self.get(node_id).depth as usize + 1);
        let mut current = Some(node_id);
        while let Some(id) = current {
            ids.push(id);
            current = self.get(id).parent_id;
        }
        ids.reverse();
        ids
    }
}

impl<S: Clone> NodeArena<S> {
    /// Reconstruct the path from the root to `node_id`.
    #[must_use]
    pub fn reconstruct_path(&self, node_id: u64) -> PathV1<S> {
        let states = self
            .lineage(node_id)
            .into_iter()
            .map(|id| self.get(id).state.clone())
            .collect();
        PathV1::from_lineage(states)
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}
