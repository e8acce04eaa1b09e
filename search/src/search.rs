//! Search entry points and the shared expansion loop.
//!
//! Every algorithm is one or more passes of [`run_pass`]; they differ only in
//! frontier discipline, whether a visited set is kept, whether popped paths
//! are bounded in length, and whether successors are reordered by an
//! evaluator before being pushed.
//!
//! | Algorithm | Frontier | Visited set | Depth bound | Ordering |
//! |---|---|---|---|---|
//! | breadth-first | FIFO | no | no | enumeration |
//! | depth-first | LIFO | no | no | enumeration |
//! | iterative deepening | LIFO | no | 1, 2, 3, ... | enumeration |
//! | visited depth-first | LIFO | yes | no | enumeration |
//! | heuristic depth-first | LIFO | yes | no | ascending evaluation |

use std::collections::HashSet;

use traverse_kernel::domain::DomainModelV1;

use crate::error::SearchError;
use crate::frontier::{Frontier, FrontierDisciplineV1};
use crate::graph::{ExpandEventV1, SearchStatsV1, TerminationReasonV1};
use crate::iterative::iterative_deepening;
use crate::node::NodeArena;
use crate::path::PathV1;
use crate::policy::SearchPolicyV1;
use crate::scorer::{order_successors, StateEvaluator};

/// The exploration strategies the engine provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmV1 {
    BreadthFirst,
    DepthFirst,
    IterativeDeepening,
    VisitedDepthFirst,
    HeuristicDepthFirst,
}

impl AlgorithmV1 {
    /// All algorithms in declaration order.
    pub const ALL: &'static [AlgorithmV1] = &[
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::IterativeDeepening,
        Self::VisitedDepthFirst,
        Self::HeuristicDepthFirst,
    ];

    /// Stable snake-case name used in reports and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::IterativeDeepening => "iterative_deepening",
            Self::VisitedDepthFirst => "visited_depth_first",
            Self::HeuristicDepthFirst => "heuristic_depth_first",
        }
    }

    /// Whether a returned path is guaranteed to have the fewest states.
    #[must_use]
    pub fn guarantees_shortest(self) -> bool {
        matches!(self, Self::BreadthFirst | Self::IterativeDeepening)
    }

    /// Whether the algorithm keeps a visited set.
    #[must_use]
    pub fn uses_visited_set(self) -> bool {
        matches!(self, Self::VisitedDepthFirst | Self::HeuristicDepthFirst)
    }
}

impl std::fmt::Display for AlgorithmV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AlgorithmV1 {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|a| a.as_str()).collect();
                format!("unknown algorithm {s:?} (expected one of: {})", names.join(", "))
            })
    }
}

/// Result of a search execution.
///
/// "No path" is a normal outcome: `path` is `None` and the termination reason
/// says whether the search proved it (`FrontierExhausted`) or gave up
/// (budget or depth limit).
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    /// The path from start to goal (if found).
    pub path: Option<PathV1<S>>,
    /// Why the search stopped.
    pub termination_reason: TerminationReasonV1,
    /// Counters over every pass.
    pub stats: SearchStatsV1,
    /// Ordered expansion log; empty unless `record_expansions` was set.
    pub expansions: Vec<ExpandEventV1<S>>,
}

impl<S> SearchResult<S> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.termination_reason,
            TerminationReasonV1::GoalReached { .. }
        )
    }

    /// Returns `true` if the search stopped on a budget rather than a verdict.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(
            self.termination_reason,
            TerminationReasonV1::ExpansionBudgetExceeded { .. }
                | TerminationReasonV1::DepthLimitExhausted { .. }
        )
    }
}

/// Run `algorithm` from `start` to `goal`.
///
/// `evaluator` is consulted only by [`AlgorithmV1::HeuristicDepthFirst`].
///
/// # Errors
///
/// Returns [`SearchError`] for pre-flight failures: invalid policy, or a
/// start/goal state that fails the domain's validity predicate.
pub fn search<D: DomainModelV1>(
    domain: &D,
    start: &D::State,
    goal: &D::State,
    algorithm: AlgorithmV1,
    evaluator: &dyn StateEvaluator<D::State>,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<D::State>, SearchError> {
    match algorithm {
        AlgorithmV1::BreadthFirst => breadth_first(domain, start, goal, policy),
        AlgorithmV1::DepthFirst => depth_first(domain, start, goal, policy),
        AlgorithmV1::IterativeDeepening => iterative_deepening(domain, start, goal, policy),
        AlgorithmV1::VisitedDepthFirst => visited_depth_first(domain, start, goal, policy),
        AlgorithmV1::HeuristicDepthFirst => {
            heuristic_depth_first(domain, start, goal, evaluator, policy)
        }
    }
}

/// Breadth-first search: FIFO frontier, no cycle detection.
///
/// A returned path has the fewest states of any path to the goal.
///
/// # Errors
///
/// See [`search`].
pub fn breadth_first<D: DomainModelV1>(
    domain: &D,
    start: &D::State,
    goal: &D::State,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<D::State>, SearchError> {
    let config = PassConfig {
        discipline: FrontierDisciplineV1::Fifo,
        use_visited: false,
        depth_limit: None,
        evaluator: None,
        iteration: 1,
    };
    single_pass(domain, start, goal, &config, policy, AlgorithmV1::BreadthFirst)
}

/// Depth-first search: LIFO frontier, no cycle detection.
///
/// May diverge on a cyclic state graph; only `max_expansions` stops it.
///
/// # Errors
///
/// See [`search`].
pub fn depth_first<D: DomainModelV1>(
    domain: &D,
    start: &D::State,
    goal: &D::State,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<D::State>, SearchError> {
    let config = PassConfig {
        discipline: FrontierDisciplineV1::Lifo,
        use_visited: false,
        depth_limit: None,
        evaluator: None,
        iteration: 1,
    };
    single_pass(domain, start, goal, &config, policy, AlgorithmV1::DepthFirst)
}

/// Depth-first search that expands each state at most once.
///
/// Terminates on any finite state graph. No shortest-path guarantee.
///
/// # Errors
///
/// See [`search`].
pub fn visited_depth_first<D: DomainModelV1>(
    domain: &D,
    start: &D::State,
    goal: &D::State,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<D::State>, SearchError> {
    let config = PassConfig {
        discipline: FrontierDisciplineV1::Lifo,
        use_visited: true,
        depth_limit: None,
        evaluator: None,
        iteration: 1,
    };
    single_pass(
        domain,
        start,
        goal,
        &config,
        policy,
        AlgorithmV1::VisitedDepthFirst,
    )
}

/// Visited-set depth-first search with successors pushed in ascending
/// evaluation order, so the best-looking successor is explored first.
///
/// # Errors
///
/// See [`search`].
pub fn heuristic_depth_first<D: DomainModelV1>(
    domain: &D,
    start: &D::State,
    goal: &D::State,
    evaluator: &dyn StateEvaluator<D::State>,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<D::State>, SearchError> {
    let config = PassConfig {
        discipline: FrontierDisciplineV1::Lifo,
        use_visited: true,
        depth_limit: None,
        evaluator: Some(evaluator),
        iteration: 1,
    };
    single_pass(
        domain,
        start,
        goal,
        &config,
        policy,
        AlgorithmV1::HeuristicDepthFirst,
    )
}

/// Reject unusable inputs before any search step.
pub(crate) fn preflight<D: DomainModelV1>(
    domain: &D,
    start: &D::State,
    goal: &D::State,
    policy: &SearchPolicyV1,
) -> Result<(), SearchError> {
    policy.validate()?;
    if !domain.is_valid(start) {
        return Err(SearchError::InvalidStartState {
            detail: format!("{start:?} is not a valid {} state", domain.domain_id()),
        });
    }
    if !domain.is_valid(goal) {
        return Err(SearchError::InvalidGoalState {
            detail: format!("{goal:?} is not a valid {} state", domain.domain_id()),
        });
    }
    Ok(())
}

fn single_pass<D: DomainModelV1>(
    domain: &D,
    start: &D::State,
    goal: &D::State,
    config: &PassConfig<'_, D::State>,
    policy: &SearchPolicyV1,
    algorithm: AlgorithmV1,
) -> Result<SearchResult<D::State>, SearchError> {
    preflight(domain, start, goal, policy)?;

    let mut stats = SearchStatsV1 {
        iterations: 1,
        ..SearchStatsV1::default()
    };
    let mut expansions = Vec::new();
    let outcome = run_pass(domain, start, goal, config, policy, &mut stats, &mut expansions);

    let termination_reason = match outcome.end {
        PassEnd::GoalReached => TerminationReasonV1::GoalReached {
            path_len: outcome.path.as_ref().map_or(0, |p| p.len() as u64),
        },
        PassEnd::FrontierExhausted => TerminationReasonV1::FrontierExhausted,
        PassEnd::BudgetExceeded => TerminationReasonV1::ExpansionBudgetExceeded {
            budget: policy.max_expansions,
        },
    };
    Ok(finish(
        algorithm,
        outcome.path,
        termination_reason,
        stats,
        expansions,
    ))
}

pub(crate) fn finish<S>(
    algorithm: AlgorithmV1,
    path: Option<PathV1<S>>,
    termination_reason: TerminationReasonV1,
    stats: SearchStatsV1,
    expansions: Vec<ExpandEventV1<S>>,
) -> SearchResult<S> {
    log::debug!(
        "{algorithm} terminated: {} after {} expansions ({} generated, {} duplicates, {} depth-pruned, frontier high water {})",
        termination_reason.as_str(),
        stats.total_expansions,
        stats.total_generated,
        stats.total_duplicates_suppressed,
        stats.total_depth_pruned,
        stats.frontier_high_water,
    );
    SearchResult {
        path,
        termination_reason,
        stats,
        expansions,
    }
}

/// Loop configuration for one pass.
pub(crate) struct PassConfig<'e, S> {
    pub discipline: FrontierDisciplineV1,
    pub use_visited: bool,
    /// Maximum accepted path length in states.
    pub depth_limit: Option<u32>,
    pub evaluator: Option<&'e dyn StateEvaluator<S>>,
    pub iteration: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PassEnd {
    GoalReached,
    FrontierExhausted,
    BudgetExceeded,
}

pub(crate) struct PassOutcome<S> {
    pub end: PassEnd,
    pub path: Option<PathV1<S>>,
}

/// Drain one frontier seeded with `[start]`.
///
/// Per pop, in order: depth bound (discard), goal test (return), visited
/// check (discard), expansion budget, visited mark, successor generation.
/// Counters are added to `stats` so several passes can share one record.
pub(crate) fn run_pass<D: DomainModelV1>(
    domain: &D,
    start: &D::State,
    goal: &D::State,
    config: &PassConfig<'_, D::State>,
    policy: &SearchPolicyV1,
    stats: &mut SearchStatsV1,
    expansions: &mut Vec<ExpandEventV1<D::State>>,
) -> PassOutcome<D::State> {
    let mut arena = NodeArena::new();
    let mut frontier = Frontier::new(config.discipline);
    let mut visited: HashSet<D::State> = HashSet::new();

    log::trace!(
        "pass {} over {} frontier, depth limit {:?}",
        config.iteration,
        frontier.discipline().as_str(),
        config.depth_limit,
    );

    let root = arena.push_root(start.clone());
    frontier.push(root);
    let mut goal_node = None;

    let end = loop {
        let Some(node_id) = frontier.pop() else {
            break PassEnd::FrontierExhausted;
        };
        let node = arena.get(node_id);

        if let Some(limit) = config.depth_limit {
            if node.path_len() > u64::from(limit) {
                stats.total_depth_pruned += 1;
                continue;
            }
        }

        if node.state == *goal {
            goal_node = Some(node_id);
            break PassEnd::GoalReached;
        }

        if config.use_visited && visited.contains(&node.state) {
            stats.total_duplicates_suppressed += 1;
            continue;
        }

        if stats.total_expansions >= policy.max_expansions {
            break PassEnd::BudgetExceeded;
        }

        // Marked only once expansion is certain.
        if config.use_visited {
            visited.insert(node.state.clone());
        }

        let depth = node.depth;
        let mut successors = domain.successors(&node.state);
        if let Some(evaluator) = config.evaluator {
            order_successors(evaluator, &mut successors);
        }

        if policy.record_expansions {
            expansions.push(ExpandEventV1 {
                expansion_order: stats.total_expansions,
                iteration: config.iteration,
                node_id,
                depth,
                state: node.state.clone(),
                successor_count: successors.len() as u64,
            });
        }
        stats.total_expansions += 1;
        stats.total_generated += successors.len() as u64;

        for successor in successors {
            let child = arena.push_child(node_id, successor);
            frontier.push(child);
        }
    };

    let path = goal_node.map(|id| arena.reconstruct_path(id));

    stats.frontier_high_water = stats.frontier_high_water.max(frontier.high_water());
    stats.visited_count = stats.visited_count.max(visited.len() as u64);
    stats.nodes_created += arena.len() as u64;

    PassOutcome { end, path }
}
