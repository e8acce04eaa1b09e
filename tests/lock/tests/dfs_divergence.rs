//! Depth-first search without a visited set does not terminate on cyclic
//! state graphs. These tests supply the step cap through the policy and
//! check that only the cap stops the search.

use traverse_harness::runner::run_search;
use traverse_harness::worlds::cyclic_ladder::CyclicLadder;
use traverse_harness::worlds::river_crossing::RiverCrossing;
use traverse_search::graph::TerminationReasonV1;
use traverse_search::policy::SearchPolicyV1;
use traverse_search::search::{depth_first, AlgorithmV1};

#[test]
fn ladder_depth_first_runs_into_the_cap() {
    let ladder = CyclicLadder::new(3);
    for cap in [10, 100, 1_000] {
        let policy = SearchPolicyV1::default().with_max_expansions(cap);
        let result = depth_first(&ladder, &0, &3, &policy).unwrap();
        assert!(result.path.is_none());
        assert_eq!(
            result.termination_reason,
            TerminationReasonV1::ExpansionBudgetExceeded { budget: cap }
        );
        assert_eq!(result.stats.total_expansions, cap);
    }
}

#[test]
fn ladder_depth_first_oscillates_between_bottom_rungs() {
    let ladder = CyclicLadder::new(3);
    let policy = SearchPolicyV1::default().with_max_expansions(20).recording();
    let result = depth_first(&ladder, &0, &3, &policy).unwrap();
    let expanded: Vec<i32> = result.expansions.iter().map(|e| e.state).collect();
    let expected: Vec<i32> = (0..20).map(|i| i % 2).collect();
    assert_eq!(expanded, expected);
    // Each pass through rung 1 leaves an unexplored rung 2 behind.
    assert!(result.stats.frontier_high_water >= 10);
}

#[test]
fn ladder_is_solved_by_every_other_algorithm() {
    let ladder = CyclicLadder::new(3);
    for algorithm in AlgorithmV1::ALL {
        if *algorithm == AlgorithmV1::DepthFirst {
            continue;
        }
        let report = run_search(&ladder, *algorithm, &SearchPolicyV1::default()).unwrap();
        assert_eq!(
            report.result.path.unwrap().into_states(),
            vec![0, 1, 2, 3],
            "{algorithm}"
        );
    }
}

#[test]
fn classic_depth_first_runs_into_the_cap() {
    let world = RiverCrossing::classic();
    let policy = SearchPolicyV1::default().with_max_expansions(2_000);
    let report = run_search(&world, AlgorithmV1::DepthFirst, &policy).unwrap();
    assert_eq!(report.path_len(), None);
    assert_eq!(
        report.result.termination_reason,
        TerminationReasonV1::ExpansionBudgetExceeded { budget: 2_000 }
    );
    assert!(report.result.is_exhausted());
    assert_eq!(report.result.stats.total_expansions, 2_000);
}
