//! Determinism lock tests: identical inputs produce identical paths and
//! identical report digests, in-process and across processes.

use std::process::Command;

use traverse_harness::runner::run_search;
use traverse_harness::worlds::cyclic_ladder::CyclicLadder;
use traverse_harness::worlds::river_crossing::RiverCrossing;
use traverse_search::policy::SearchPolicyV1;
use traverse_search::search::AlgorithmV1;

// ---------------------------------------------------------------------------
// In-process
// ---------------------------------------------------------------------------

#[test]
fn report_digest_is_stable_over_ten_runs() {
    let world = RiverCrossing::classic();
    let policy = SearchPolicyV1::default().with_max_expansions(20_000).recording();
    for algorithm in AlgorithmV1::ALL {
        let first = run_search(&world, *algorithm, &policy).unwrap();
        for _ in 1..10 {
            let other = run_search(&world, *algorithm, &policy).unwrap();
            assert_eq!(first.digest, other.digest, "{algorithm}");
            assert_eq!(first.report_bytes, other.report_bytes, "{algorithm}");
            assert_eq!(first.result.path, other.result.path, "{algorithm}");
        }
    }
}

#[test]
fn digest_distinguishes_algorithms_and_policies() {
    let world = RiverCrossing::classic();
    let policy = SearchPolicyV1::default();
    let bfs = run_search(&world, AlgorithmV1::BreadthFirst, &policy).unwrap();
    let ids = run_search(&world, AlgorithmV1::IterativeDeepening, &policy).unwrap();
    assert_ne!(bfs.digest, ids.digest);

    let capped = run_search(
        &world,
        AlgorithmV1::BreadthFirst,
        &SearchPolicyV1::default().with_max_expansions(999_999),
    )
    .unwrap();
    assert_eq!(bfs.result.path, capped.result.path);
    assert_ne!(bfs.digest, capped.digest);
}

#[test]
fn separate_world_values_give_identical_reports() {
    let policy = SearchPolicyV1::default();
    let a = run_search(&CyclicLadder::new(6), AlgorithmV1::BreadthFirst, &policy).unwrap();
    let b = run_search(&CyclicLadder::new(6), AlgorithmV1::BreadthFirst, &policy).unwrap();
    assert_eq!(a.digest, b.digest);
}

// ---------------------------------------------------------------------------
// Cross-process
// ---------------------------------------------------------------------------

fn run_fixture(args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_search_fixture");
    let mut command = Command::new(bin);
    command.args(args).env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }
    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"));
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_output_is_identical_across_env_variants() {
    let args = ["--algorithm", "iterative_deepening"];
    let baseline = run_fixture(&args, &[]);
    assert!(baseline.contains("termination=goal_reached"), "{baseline}");
    assert!(baseline.contains("path_len=12"), "{baseline}");
    assert!(baseline.contains("digest=sha256:"), "{baseline}");

    for overrides in [
        &[("LANG", "C")][..],
        &[("LC_ALL", "en_US.UTF-8")][..],
        &[("RUST_LOG", "trace")][..],
    ] {
        assert_eq!(
            baseline,
            run_fixture(&args, overrides),
            "stdout differs under {overrides:?}"
        );
    }
}

#[test]
fn crossproc_matches_inproc_digest() {
    let report = run_search(
        &RiverCrossing::with_capacity(4, 3),
        AlgorithmV1::BreadthFirst,
        &SearchPolicyV1::default(),
    )
    .unwrap();
    let stdout = run_fixture(&["--units", "4", "--capacity", "3"], &[]);
    let line = format!("digest={}", report.digest);
    assert!(stdout.lines().any(|l| l == line), "{stdout}");
    assert_eq!(stdout.lines().count(), 8 + 10);
}

#[test]
fn crossproc_reports_exhaustion() {
    let stdout = run_fixture(
        &[
            "--algorithm",
            "depth_first",
            "--max-expansions",
            "2000",
        ],
        &[],
    );
    assert!(
        stdout.contains("termination=expansion_budget_exceeded"),
        "{stdout}"
    );
    assert!(stdout.contains("path_len=none"), "{stdout}");
}

#[test]
fn crossproc_rejects_unknown_algorithm() {
    let output = Command::new(env!("CARGO_BIN_EXE_search_fixture"))
        .args(["--algorithm", "best_first"])
        .output()
        .expect("spawn search_fixture");
    assert!(!output.status.success());
}
