//! Harness runner: run one search over a world and package a verified,
//! digested report.
//!
//! The runner uses ONLY search-crate and kernel APIs. It does not implement
//! any search or proof logic itself.
//!
//! # Pipeline
//!
//! ```text
//! search(world, start, goal, algorithm, evaluator, policy)
//!   → replay_verify(path)            (kernel; recovers the move list)
//!   → render_path()                  (one line per state)
//!   → report JSON → canonical_json_bytes() → canonical_hash(SearchReport)
//! ```
//!
//! A found path that fails replay is a world or engine bug, and the run
//! fails closed with [`SearchRunError::ReplayDivergence`].

use traverse_kernel::domain::DomainModelV1;
use traverse_kernel::proof::canon::{canonical_json_bytes, CanonError};
use traverse_kernel::proof::hash::{canonical_hash, ContentHash};
use traverse_kernel::proof::hash_domain::HashDomain;
use traverse_kernel::proof::replay::{replay_verify, ReplayVerdict};
use traverse_search::error::SearchError;
use traverse_search::path::PathV1;
use traverse_search::policy::SearchPolicyV1;
use traverse_search::search::{search, AlgorithmV1, SearchResult};

use crate::contract::SearchWorldV1;
use crate::render::render_path;

/// Report schema tag embedded in every report.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// Error during a harness search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRunError {
    /// Pre-flight rejection from the search crate.
    Search(SearchError),
    /// Replay verification had nothing to check.
    ReplayFailed { detail: String },
    /// The returned path does not replay against the world.
    ReplayDivergence { index: usize, detail: String },
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
}

impl std::fmt::Display for SearchRunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search rejected: {e}"),
            Self::ReplayFailed { detail } => write!(f, "replay failed: {detail}"),
            Self::ReplayDivergence { index, detail } => {
                write!(f, "replay diverged at state {index}: {detail}")
            }
            Self::CanonFailed { detail } => write!(f, "canonical JSON failed: {detail}"),
        }
    }
}

impl std::error::Error for SearchRunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for SearchRunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for SearchRunError {
    fn from(e: CanonError) -> Self {
        Self::CanonFailed {
            detail: e.to_string(),
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct SearchReportV1<S> {
    /// `domain_id()` of the world that was searched.
    pub world_id: String,
    pub algorithm: AlgorithmV1,
    /// The raw engine result (path, termination reason, counters).
    pub result: SearchResult<S>,
    /// Moves recovered by replay, `Debug`-rendered; empty when no path.
    pub moves: Vec<String>,
    /// One rendered line per path state; empty when no path.
    pub lines: Vec<String>,
    /// Canonical JSON bytes of the report.
    pub report_bytes: Vec<u8>,
    /// `canonical_hash(SearchReport, report_bytes)`.
    pub digest: ContentHash,
}

impl<S> SearchReportV1<S> {
    /// Number of states on the returned path, if any.
    #[must_use]
    pub fn path_len(&self) -> Option<usize> {
        self.result.path.as_ref().map(PathV1::len)
    }
}

/// Run `algorithm` over `world` from its start state to its goal state.
///
/// # Errors
///
/// Returns [`SearchRunError::Search`] for pre-flight rejections,
/// [`SearchRunError::ReplayDivergence`] if a found path fails kernel replay,
/// and [`SearchRunError::CanonFailed`] if the report cannot be canonicalized.
pub fn run_search<W: SearchWorldV1>(
    world: &W,
    algorithm: AlgorithmV1,
    policy: &SearchPolicyV1,
) -> Result<SearchReportV1<W::State>, SearchRunError> {
    let start = world.start_state();
    let goal = world.goal_state();
    let result = search(world, &start, &goal, algorithm, world.evaluator(), policy)?;

    let (moves, lines, path_json, path_digest) = match &result.path {
        Some(path) => {
            let moves = verify_path(world, path, &start, &goal)?;
            let projected = serde_json::Value::Array(
                path.iter().map(|s| world.describe_state(s)).collect(),
            );
            let digest = canonical_hash(HashDomain::SearchPath, &canonical_json_bytes(&projected)?);
            (moves, render_path(world, path), projected, Some(digest))
        }
        None => (Vec::new(), Vec::new(), serde_json::Value::Null, None),
    };

    let policy_bytes = canonical_json_bytes(&policy.to_json_value())?;
    let policy_digest = canonical_hash(HashDomain::PolicySnapshot, &policy_bytes);

    let mut report = serde_json::json!({
        "algorithm": algorithm.as_str(),
        "evaluator": world.evaluator().evaluator_id(),
        "goal": state_entry(world, &goal)?,
        "moves": &moves,
        "path": path_json,
        "path_digest": path_digest.as_ref().map(ContentHash::as_str),
        "policy": policy.to_json_value(),
        "policy_digest": policy_digest.as_str(),
        "schema_version": REPORT_SCHEMA_VERSION,
        "start": state_entry(world, &start)?,
        "stats": result.stats.to_json_value(),
        "termination": result.termination_reason.to_json_value(),
        "world_id": world.domain_id(),
    });
    if policy.record_expansions {
        let log: Vec<serde_json::Value> = result
            .expansions
            .iter()
            .map(|e| {
                serde_json::json!({
                    "depth": e.depth,
                    "expansion_order": e.expansion_order,
                    "iteration": e.iteration,
                    "state": world.describe_state(&e.state),
                    "successor_count": e.successor_count,
                })
            })
            .collect();
        report["expansions"] = serde_json::Value::Array(log);
    }

    let report_bytes = canonical_json_bytes(&report)?;
    let digest = canonical_hash(HashDomain::SearchReport, &report_bytes);

    log::info!(
        "{} {algorithm}: {} ({} expansions) digest {digest}",
        world.domain_id(),
        result.termination_reason.as_str(),
        result.stats.total_expansions,
    );

    Ok(SearchReportV1 {
        world_id: world.domain_id().to_string(),
        algorithm,
        result,
        moves,
        lines,
        report_bytes,
        digest,
    })
}

/// Content fingerprint of one state's JSON projection.
///
/// # Errors
///
/// Returns [`SearchRunError::CanonFailed`] if the projection holds a float.
pub fn state_fingerprint<D: DomainModelV1>(
    domain: &D,
    state: &D::State,
) -> Result<ContentHash, SearchRunError> {
    let bytes = canonical_json_bytes(&domain.describe_state(state))?;
    Ok(canonical_hash(HashDomain::StateFingerprint, &bytes))
}

fn state_entry<D: DomainModelV1>(
    domain: &D,
    state: &D::State,
) -> Result<serde_json::Value, SearchRunError> {
    let fingerprint = state_fingerprint(domain, state)?;
    Ok(serde_json::json!({
        "fingerprint": fingerprint.as_str(),
        "state": domain.describe_state(state),
    }))
}

/// Check endpoints, then replay every step through the kernel.
fn verify_path<D: DomainModelV1>(
    domain: &D,
    path: &PathV1<D::State>,
    start: &D::State,
    goal: &D::State,
) -> Result<Vec<String>, SearchRunError> {
    if path.start() != start {
        return Err(divergence(0, "path does not begin at the start state".into()));
    }
    if path.last() != goal {
        return Err(divergence(
            path.len() - 1,
            "path does not end at the goal state".into(),
        ));
    }

    let verdict = replay_verify(domain, path.states()).map_err(|e| SearchRunError::ReplayFailed {
        detail: e.to_string(),
    })?;
    match verdict {
        ReplayVerdict::Match { moves } => Ok(moves.iter().map(|m| format!("{m:?}")).collect()),
        ReplayVerdict::Divergence { index, kind } => Err(divergence(index, format!("{kind:?}"))),
    }
}

fn divergence(index: usize, detail: String) -> SearchRunError {
    log::warn!("replay divergence at state {index}: {detail}");
    SearchRunError::ReplayDivergence { index, detail }
}
