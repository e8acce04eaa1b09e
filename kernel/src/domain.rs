//! Domain model contract: the only thing the search engine knows about a problem.
//!
//! A domain supplies a state type, a fixed enumeration of candidate moves, a
//! total `apply`, and a validity predicate. Everything else (successor
//! generation, transition listing) is derived here so that every domain
//! enumerates successors the same way.
//!
//! # Contract
//!
//! - `valid_moves` is constant for the lifetime of the domain value: same
//!   slice, same order, on every call.
//! - `apply` is deterministic and total over `valid_moves`. It may return an
//!   invalid state; callers filter with `is_valid`.
//! - `is_valid` depends only on the state.
//! - Two states that compare equal are interchangeable (visited sets and goal
//!   tests rely on `Eq + Hash`).

use std::fmt::Debug;
use std::hash::Hash;

/// A search problem's transition system.
pub trait DomainModelV1 {
    /// Immutable problem configuration.
    type State: Clone + Eq + Hash + Debug;
    /// Transition descriptor drawn from [`DomainModelV1::valid_moves`].
    type Move: Clone + Eq + Debug;

    /// Stable identifier used in reports (e.g., `"river_crossing"`).
    fn domain_id(&self) -> &str;

    /// The fixed candidate move enumeration, in enumeration order.
    fn valid_moves(&self) -> &[Self::Move];

    /// Apply `mv` to `state`. Never fails; the result may be invalid.
    fn apply(&self, state: &Self::State, mv: &Self::Move) -> Self::State;

    /// Domain invariant check.
    fn is_valid(&self, state: &Self::State) -> bool;

    /// Valid successor states of `state`, in `valid_moves` order.
    fn successors(&self, state: &Self::State) -> Vec<Self::State> {
        self.valid_moves()
            .iter()
            .map(|mv| self.apply(state, mv))
            .filter(|next| self.is_valid(next))
            .collect()
    }

    /// Like [`DomainModelV1::successors`], keeping the move that produced
    /// each successor.
    fn transitions(&self, state: &Self::State) -> Vec<(Self::Move, Self::State)> {
        self.valid_moves()
            .iter()
            .filter_map(|mv| {
                let next = self.apply(state, mv);
                self.is_valid(&next).then(|| (mv.clone(), next))
            })
            .collect()
    }

    /// JSON projection of a state for reports.
    ///
    /// The default is the `Debug` rendering as a JSON string. Domains with a
    /// structured state should override this; the value must be free of
    /// floating-point numbers so it can be canonicalized.
    fn describe_state(&self, state: &Self::State) -> serde_json::Value {
        serde_json::Value::String(format!("{state:?}"))
    }
}
