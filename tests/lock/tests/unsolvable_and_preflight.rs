//! "No path" outcomes are results with distinct termination reasons; only
//! unusable inputs are errors, and they are rejected before any expansion.

use traverse_harness::contract::SearchWorldV1;
use traverse_harness::runner::{run_search, SearchRunError};
use traverse_harness::worlds::river_crossing::{
    BankV1, BoatSideV1, CrossingStateV1, RiverCrossing,
};
use traverse_search::error::SearchError;
use traverse_search::graph::TerminationReasonV1;
use traverse_search::policy::SearchPolicyV1;
use traverse_search::scorer::UniformEvaluator;
use traverse_search::search::{search, AlgorithmV1};

// ---------------------------------------------------------------------------
// Unsolvable instances
// ---------------------------------------------------------------------------

#[test]
fn four_units_capacity_two_visited_search_exhausts_frontier() {
    let world = RiverCrossing::with_capacity(4, 2);
    for algorithm in [
        AlgorithmV1::VisitedDepthFirst,
        AlgorithmV1::HeuristicDepthFirst,
    ] {
        let report = run_search(&world, algorithm, &SearchPolicyV1::default()).unwrap();
        assert_eq!(report.path_len(), None, "{algorithm}");
        assert_eq!(
            report.result.termination_reason,
            TerminationReasonV1::FrontierExhausted,
            "{algorithm}"
        );
        assert!(!report.result.is_exhausted());
        assert_eq!(report.result.stats.visited_count, 11, "{algorithm}");
    }
}

#[test]
fn four_units_capacity_two_iterative_deepening_hits_depth_limit() {
    let world = RiverCrossing::with_capacity(4, 2);
    let policy = SearchPolicyV1::default().with_max_depth_limit(8);
    let report = run_search(&world, AlgorithmV1::IterativeDeepening, &policy).unwrap();
    assert_eq!(report.path_len(), None);
    assert_eq!(
        report.result.termination_reason,
        TerminationReasonV1::DepthLimitExhausted { limit: 8 }
    );
    assert_eq!(report.result.stats.iterations, 8);
    assert_eq!(report.result.stats.total_expansions, 1_222);
}

#[test]
fn iterative_deepening_budget_is_distinct_from_depth_limit() {
    let world = RiverCrossing::with_capacity(4, 2);
    let policy = SearchPolicyV1::default()
        .with_max_depth_limit(64)
        .with_max_expansions(500);
    let report = run_search(&world, AlgorithmV1::IterativeDeepening, &policy).unwrap();
    assert_eq!(
        report.result.termination_reason,
        TerminationReasonV1::ExpansionBudgetExceeded { budget: 500 }
    );
}

#[test]
fn one_unit_per_crossing_cannot_move_two_pairs() {
    let world = RiverCrossing::with_capacity(2, 1);
    let report =
        run_search(&world, AlgorithmV1::VisitedDepthFirst, &SearchPolicyV1::default()).unwrap();
    assert_eq!(
        report.result.termination_reason,
        TerminationReasonV1::FrontierExhausted
    );
    assert_eq!(report.result.stats.visited_count, 2);
}

// ---------------------------------------------------------------------------
// Pre-flight rejection
// ---------------------------------------------------------------------------

#[test]
fn invalid_start_is_rejected_for_every_algorithm() {
    let world = RiverCrossing::classic();
    // Two vulnerable units outnumber one controlled unit on the left bank.
    let start = CrossingStateV1::new(BankV1::new(1, 2), BoatSideV1::Left, BankV1::new(2, 1));
    for algorithm in AlgorithmV1::ALL {
        let err = search(
            &world,
            &start,
            &world.goal_state(),
            *algorithm,
            &UniformEvaluator,
            &SearchPolicyV1::default(),
        )
        .unwrap_err();
        assert!(
            matches!(err, SearchError::InvalidStartState { .. }),
            "{algorithm}: {err}"
        );
    }
}

#[test]
fn invalid_goal_is_rejected() {
    let world = RiverCrossing::classic();
    let goal = CrossingStateV1::new(BankV1::new(-1, 0), BoatSideV1::Right, BankV1::new(4, 3));
    let err = search(
        &world,
        &world.start_state(),
        &goal,
        AlgorithmV1::BreadthFirst,
        &UniformEvaluator,
        &SearchPolicyV1::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::InvalidGoalState { .. }));
    assert!(err.to_string().contains("river_crossing"), "{err}");
}

#[test]
fn zero_budgets_are_rejected_through_the_runner() {
    let world = RiverCrossing::classic();
    for policy in [
        SearchPolicyV1::default().with_max_expansions(0),
        SearchPolicyV1::default().with_max_depth_limit(0),
    ] {
        let err = run_search(&world, AlgorithmV1::IterativeDeepening, &policy).unwrap_err();
        assert!(
            matches!(err, SearchRunError::Search(SearchError::InvalidPolicy { .. })),
            "{err}"
        );
    }
}
