//! Iterative-deepening search: depth-bounded depth-first passes with a
//! growing bound.
//!
//! Pass `k` discards every popped path longer than `k` states without
//! expanding it. The first pass that reaches the goal returns a path with the
//! fewest states, the same guarantee as breadth-first search, while each pass
//! only holds O(k × branching factor) frontier entries.
//!
//! There is no visited set inside a pass, so cycles are re-walked up to the
//! bound. Termination of the outer loop comes from the policy:
//! - `max_depth_limit` caps the bound ([`TerminationReasonV1::DepthLimitExhausted`]);
//! - `max_expansions` caps work summed over all passes;
//! - a pass that discarded nothing for depth explored the whole reachable
//!   tree, so a deeper pass cannot do better ([`TerminationReasonV1::FrontierExhausted`]).

use traverse_kernel::domain::DomainModelV1;

use crate::error::SearchError;
use crate::frontier::FrontierDisciplineV1;
use crate::graph::{SearchStatsV1, TerminationReasonV1};
use crate::policy::SearchPolicyV1;
use crate::search::{
    finish, preflight, run_pass, AlgorithmV1, PassConfig, PassEnd, SearchResult,
};

/// Iterative-deepening search from `start` to `goal`.
///
/// # Errors
///
/// Returns [`SearchError`] for pre-flight failures (see [`crate::search::search`]).
pub fn iterative_deepening<D: DomainModelV1>(
    domain: &D,
    start: &D::State,
    goal: &D::State,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<D::State>, SearchError> {
    preflight(domain, start, goal, policy)?;

    let mut stats = SearchStatsV1::default();
    let mut expansions = Vec::new();

    for limit in 1..=policy.max_depth_limit {
        stats.iterations += 1;
        stats.depth_limit = Some(limit);
        let pruned_before = stats.total_depth_pruned;
        let expansions_before = stats.total_expansions;

        let config = PassConfig {
            discipline: FrontierDisciplineV1::Lifo,
            use_visited: false,
            depth_limit: Some(limit),
            evaluator: None,
            iteration: stats.iterations,
        };
        let outcome = run_pass(
            domain,
            start,
            goal,
            &config,
            policy,
            &mut stats,
            &mut expansions,
        );
        log::trace!(
            "iterative deepening pass {limit}: {:?}, {} expansions, {} depth-pruned",
            outcome.end,
            stats.total_expansions - expansions_before,
            stats.total_depth_pruned - pruned_before,
        );

        let termination_reason = match outcome.end {
            PassEnd::GoalReached => TerminationReasonV1::GoalReached {
                path_len: outcome.path.as_ref().map_or(0, |p| p.len() as u64),
            },
            PassEnd::BudgetExceeded => TerminationReasonV1::ExpansionBudgetExceeded {
                budget: policy.max_expansions,
            },
            PassEnd::FrontierExhausted if stats.total_depth_pruned == pruned_before => {
                TerminationReasonV1::FrontierExhausted
            }
            PassEnd::FrontierExhausted => continue,
        };
        return Ok(finish(
            AlgorithmV1::IterativeDeepening,
            outcome.path,
            termination_reason,
            stats,
            expansions,
        ));
    }

    Ok(finish(
        AlgorithmV1::IterativeDeepening,
        None,
        TerminationReasonV1::DepthLimitExhausted {
            limit: policy.max_depth_limit,
        },
        stats,
        expansions,
    ))
}
