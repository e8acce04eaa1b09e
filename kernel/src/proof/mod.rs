//! Proof module: canonical hashing and path replay verification.
//!
//! Depends on `domain`. Nothing in the kernel depends on `proof`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
pub mod replay;
