//! State evaluation and heuristic successor ordering.
//!
//! An evaluator is a total, deterministic function of one state. Higher values
//! estimate closer proximity to the goal. Evaluators only reorder successors
//! before they are pushed onto a stack; they never prune, so correctness of
//! the search does not depend on them. No admissibility is assumed.

/// Trait for state evaluation functions.
pub trait StateEvaluator<S> {
    /// Estimated closeness to the goal; higher is closer.
    fn evaluate(&self, state: &S) -> i64;

    /// Provenance tag recorded in reports.
    fn evaluator_id(&self) -> &str {
        "custom"
    }
}

impl<S, F> StateEvaluator<S> for F
where
    F: Fn(&S) -> i64,
{
    fn evaluate(&self, state: &S) -> i64 {
        self(state)
    }
}

/// Default evaluator: every state scores 0, so ordering leaves the domain's
/// enumeration order untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformEvaluator;

impl<S> StateEvaluator<S> for UniformEvaluator {
    fn evaluate(&self, _state: &S) -> i64 {
        0
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn evaluator_id(&self) -> &str {
        "uniform"
    }
}

/// Sort successors ascending by evaluation, stable on ties.
///
/// Pushed in this order onto a LIFO frontier, the highest-valued successor is
/// popped first.
pub fn order_successors<S>(evaluator: &dyn StateEvaluator<S>, successors: &mut [S]) {
    successors.sort_by_cached_key(|state| evaluator.evaluate(state));
}
