//! Traverse Harness: world-level orchestration for the search engine.
//!
//! The harness runs a world through the search crate, verifies any returned
//! path by kernel replay, and packages the result as a canonical JSON report
//! with a content digest.
//!
//! The harness does NOT implement search or proof logic. It delegates to
//! `traverse_search` and `traverse_kernel`. Worlds provide domain data only;
//! the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod render;
pub mod runner;
pub mod worlds;
