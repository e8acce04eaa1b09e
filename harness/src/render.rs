//! Plain-text rendering of paths and run summaries.

use traverse_search::path::PathV1;

use crate::contract::SearchWorldV1;
use crate::runner::SearchReportV1;

/// One line per path state: `"<index>: <rendered state>"`, indices padded to
/// the width of the last index.
#[must_use]
pub fn render_path<W: SearchWorldV1>(world: &W, path: &PathV1<W::State>) -> Vec<String> {
    let width = (path.len() - 1).to_string().len();
    path.iter()
        .enumerate()
        .map(|(i, state)| format!("{i:>width$}: {}", world.render_state(state)))
        .collect()
}

/// `key=value` summary lines, stable across runs with identical inputs.
#[must_use]
pub fn render_summary<S>(report: &SearchReportV1<S>) -> Vec<String> {
    let stats = &report.result.stats;
    let path_len = report
        .path_len()
        .map_or_else(|| "none".to_string(), |n| n.to_string());
    vec![
        format!("world={}", report.world_id),
        format!("algorithm={}", report.algorithm),
        format!("termination={}", report.result.termination_reason.as_str()),
        format!("path_len={path_len}"),
        format!("expansions={}", stats.total_expansions),
        format!("visited={}", stats.visited_count),
        format!("iterations={}", stats.iterations),
        format!("digest={}", report.digest),
    ]
}
