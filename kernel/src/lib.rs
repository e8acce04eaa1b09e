//! Traverse Kernel: the domain contract and the proof utilities built on it.
//!
//! # API Surface
//!
//! - [`domain::DomainModelV1`] -- the interface every searchable problem implements
//! - [`proof::replay::replay_verify`] -- verify a state sequence by re-applying moves
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON writer
//!
//! # Module Dependency Direction
//!
//! `domain` ← `proof`
//!
//! One-way only. The kernel knows nothing about frontiers or algorithms.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod domain;
pub mod proof;
