//! Shared helpers for traverse benchmark suites.

use traverse_harness::contract::SearchWorldV1;
use traverse_harness::worlds::river_crossing::{CrossingStateV1, RiverCrossing};
use traverse_kernel::proof::canon::canonical_json_bytes;
use traverse_kernel::proof::hash::{canonical_hash, ContentHash};
use traverse_kernel::proof::hash_domain::HashDomain;
use traverse_search::policy::SearchPolicyV1;
use traverse_search::search::{search, AlgorithmV1, SearchResult};

/// One benchmarked configuration: a world, an algorithm, and a policy.
pub struct Regime {
    pub name: &'static str,
    pub world: RiverCrossing,
    pub algorithm: AlgorithmV1,
    pub policy: SearchPolicyV1,
}

/// Every goal-finding algorithm on the classic instance, plus a capped
/// depth-first run and an unsolvable visited-set run.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let mut out: Vec<Regime> = [
        ("classic_bfs", AlgorithmV1::BreadthFirst),
        ("classic_ids", AlgorithmV1::IterativeDeepening),
        ("classic_visited", AlgorithmV1::VisitedDepthFirst),
        ("classic_heuristic", AlgorithmV1::HeuristicDepthFirst),
    ]
    .into_iter()
    .map(|(name, algorithm)| Regime {
        name,
        world: RiverCrossing::classic(),
        algorithm,
        policy: SearchPolicyV1::default(),
    })
    .collect();

    out.push(Regime {
        name: "classic_dfs_capped",
        world: RiverCrossing::classic(),
        algorithm: AlgorithmV1::DepthFirst,
        policy: SearchPolicyV1::default().with_max_expansions(2_000),
    });
    out.push(Regime {
        name: "unsolvable_visited",
        world: RiverCrossing::with_capacity(4, 2),
        algorithm: AlgorithmV1::VisitedDepthFirst,
        policy: SearchPolicyV1::default(),
    });
    out
}

/// Run one regime's search directly, bypassing report assembly.
///
/// # Panics
///
/// Panics if the search rejects its inputs. Regimes are fixed and valid.
#[must_use]
pub fn run_regime(regime: &Regime) -> SearchResult<CrossingStateV1> {
    let world = &regime.world;
    search(
        world,
        &world.start_state(),
        &world.goal_state(),
        regime.algorithm,
        world.evaluator(),
        &regime.policy,
    )
    .expect("benchmark regime should pass pre-flight")
}

/// Digest of a result's observable outcome (termination, counters, path).
///
/// Benches compare this before and after timing so that an optimisation
/// that changes behaviour fails loudly instead of reporting a speed-up.
///
/// # Panics
///
/// Panics if the outcome cannot be canonicalized.
#[must_use]
pub fn guard_digest(result: &SearchResult<CrossingStateV1>) -> ContentHash {
    let path: Option<Vec<String>> = result
        .path
        .as_ref()
        .map(|p| p.iter().map(ToString::to_string).collect());
    let outcome = serde_json::json!({
        "path": path,
        "stats": result.stats.to_json_value(),
        "termination": result.termination_reason.to_json_value(),
    });
    let bytes = canonical_json_bytes(&outcome).expect("guard outcome is integer-only JSON");
    canonical_hash(HashDomain::BenchGuard, &bytes)
}
