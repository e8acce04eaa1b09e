//! World contract: what the runner needs beyond the bare domain model.
//!
//! A world is a [`DomainModelV1`] plus a fixed problem instance: where the
//! search starts, what it is looking for, how to order successors when asked
//! for a heuristic run, and how to print a state for a human. Worlds may NOT
//! implement search, replay, hashing, or report assembly (those are
//! search-crate, kernel, and runner concerns).

use traverse_kernel::domain::DomainModelV1;
use traverse_search::scorer::{StateEvaluator, UniformEvaluator};

/// The contract a world must implement to be run by [`crate::runner::run_search`].
pub trait SearchWorldV1: DomainModelV1 {
    /// The state every search of this world starts from.
    fn start_state(&self) -> Self::State;

    /// The state every search of this world looks for.
    fn goal_state(&self) -> Self::State;

    /// Evaluator used by heuristic depth-first runs.
    ///
    /// Defaults to [`UniformEvaluator`], which leaves enumeration order
    /// untouched.
    fn evaluator(&self) -> &dyn StateEvaluator<Self::State> {
        &UniformEvaluator
    }

    /// One-line human rendering of a state.
    fn render_state(&self, state: &Self::State) -> String {
        format!("{state:?}")
    }
}
