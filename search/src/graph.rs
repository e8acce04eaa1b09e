//! Search outcome records: termination reasons, counters, and the optional
//! expansion log.
//!
//! Counters accumulate over every pass of a search (iterative deepening runs
//! several). All JSON projections contain integers, booleans and strings only,
//! so they can be fed to `traverse_kernel::proof::canon::canonical_json_bytes`.

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A popped entry's last state equalled the goal.
    GoalReached { path_len: u64 },
    /// The frontier emptied: no path exists within the algorithm's reach.
    FrontierExhausted,
    /// `max_expansions` was hit before a goal was found.
    ExpansionBudgetExceeded { budget: u64 },
    /// Iterative deepening reached `max_depth_limit` without a goal.
    DepthLimitExhausted { limit: u32 },
}

impl TerminationReasonV1 {
    /// Stable snake-case tag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded { .. } => "expansion_budget_exceeded",
            Self::DepthLimitExhausted { .. } => "depth_limit_exhausted",
        }
    }

    /// JSON projection.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::GoalReached { path_len } => {
                serde_json::json!({"path_len": path_len, "type": self.as_str()})
            }
            Self::FrontierExhausted => serde_json::json!({"type": self.as_str()}),
            Self::ExpansionBudgetExceeded { budget } => {
                serde_json::json!({"budget": budget, "type": self.as_str()})
            }
            Self::DepthLimitExhausted { limit } => {
                serde_json::json!({"limit": limit, "type": self.as_str()})
            }
        }
    }
}

/// Aggregate counters for one search invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Nodes whose successors were generated.
    pub total_expansions: u64,
    /// Successor nodes pushed onto the frontier.
    pub total_generated: u64,
    /// Pops discarded because the state was already in the visited set.
    pub total_duplicates_suppressed: u64,
    /// Pops discarded because the path exceeded the depth limit.
    pub total_depth_pruned: u64,
    /// Largest frontier size seen in any pass.
    pub frontier_high_water: u64,
    /// Visited-set size at termination (0 for algorithms without one).
    pub visited_count: u64,
    /// Arena nodes created, over all passes.
    pub nodes_created: u64,
    /// Number of passes (1 except for iterative deepening).
    pub iterations: u32,
    /// Depth limit of the last pass (iterative deepening only).
    pub depth_limit: Option<u32>,
}

impl SearchStatsV1 {
    /// JSON projection.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "depth_limit": self.depth_limit,
            "frontier_high_water": self.frontier_high_water,
            "iterations": self.iterations,
            "nodes_created": self.nodes_created,
            "total_depth_pruned": self.total_depth_pruned,
            "total_duplicates_suppressed": self.total_duplicates_suppressed,
            "total_expansions": self.total_expansions,
            "total_generated": self.total_generated,
            "visited_count": self.visited_count,
        })
    }
}

/// One successor-generation event, recorded when the policy asks for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEventV1<S> {
    /// Total order of expansions across all passes.
    pub expansion_order: u64,
    /// The pass this expansion belongs to (1-based).
    pub iteration: u32,
    /// Arena id of the expanded node within its pass.
    pub node_id: u64,
    /// Depth of the expanded node (root = 0).
    pub depth: u32,
    /// The expanded state.
    pub state: S,
    /// Number of valid successors pushed.
    pub successor_count: u64,
}
