//! `PathV1`: a non-empty, ordered sequence of states from a start state.

/// An ordered, non-empty sequence of states.
///
/// Length counts states, not edges: the singleton path `[start]` has length 1.
/// Paths returned by the search engine also satisfy the domain invariants
/// (every state valid, consecutive states connected by one move); those are
/// checked by `traverse_kernel::proof::replay::replay_verify`, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathV1<S> {
    states: Vec<S>,
}

impl<S> PathV1<S> {
    /// The singleton path `[start]`.
    #[must_use]
    pub fn singleton(start: S) -> Self {
        Self {
            states: vec![start],
        }
    }

    /// Wrap a state sequence. Returns `None` if `states` is empty.
    #[must_use]
    pub fn from_states(states: Vec<S>) -> Option<Self> {
        if states.is_empty() {
            None
        } else {
            Some(Self { states })
        }
    }

    /// Wrap a lineage collected by the node arena, which always contains at
    /// least the node itself.
    pub(crate) fn from_lineage(states: Vec<S>) -> Self {
        debug_assert!(!states.is_empty(), "lineage must contain its own node");
        Self { states }
    }

    /// First state.
    #[must_use]
    pub fn start(&self) -> &S {
        &self.states[0]
    }

    /// Last state.
    #[must_use]
    pub fn last(&self) -> &S {
        &self.states[self.states.len() - 1]
    }

    /// Number of states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of moves (`len - 1`).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.states.len() - 1
    }

    /// The states in order.
    #[must_use]
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Consume the path into its states.
    #[must_use]
    pub fn into_states(self) -> Vec<S> {
        self.states
    }

    /// Iterate over the states in order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }
}

impl<'a, S> IntoIterator for &'a PathV1<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
