//! Traverse Search: uninformed and lightly-informed state-space search over
//! any [`DomainModelV1`](traverse_kernel::domain::DomainModelV1).
//!
//! This crate depends only on `traverse_kernel`. It does NOT depend on
//! `traverse_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! traverse_kernel  ←  traverse_search  ←  traverse_harness
//! (domain, proof)     (frontier, nodes)    (worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`search::AlgorithmV1`]: the five exploration strategies
//! - [`search::SearchResult`]: path, termination reason, counters, expansion log
//! - [`path::PathV1`]: a non-empty start-to-goal state sequence
//! - [`policy::SearchPolicyV1`]: expansion budget and depth ceiling
//! - [`scorer::StateEvaluator`]: integer state scoring for move ordering

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod frontier;
pub mod graph;
pub mod iterative;
pub mod node;
pub mod path;
pub mod policy;
pub mod scorer;
pub mod search;

#[cfg(test)]
pub(crate) mod test_domain;
