//! World implementations for the harness runner.

pub mod cyclic_ladder;
pub mod river_crossing;
