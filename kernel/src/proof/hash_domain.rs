//! Typed domain separators for canonical hashing.
//!
//! Every hash computed in the workspace selects a domain via [`HashDomain`],
//! so two artifacts with identical bytes but different roles never share a
//! digest.

/// Typed domain separator for [`super::hash::canonical_hash`].
///
/// Each variant maps to a unique, null-terminated byte string used as a
/// SHA-256 prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// A single state's canonical JSON projection.
    StateFingerprint,
    /// A reconstructed path (ordered state projections).
    SearchPath,
    /// Search policy echo.
    PolicySnapshot,
    /// The complete search report (harness-originated).
    SearchReport,
    /// Benchmark determinism guard.
    BenchGuard,
}

impl HashDomain {
    /// All domain variants in declaration order.
    pub const ALL: &'static [HashDomain] = &[
        Self::StateFingerprint,
        Self::SearchPath,
        Self::PolicySnapshot,
        Self::SearchReport,
        Self::BenchGuard,
    ];

    /// The raw domain-separator bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::StateFingerprint => b"TRAVERSE::STATE_FINGERPRINT::V1\0",
            Self::SearchPath => b"TRAVERSE::SEARCH_PATH::V1\0",
            Self::PolicySnapshot => b"TRAVERSE::POLICY_SNAPSHOT::V1\0",
            Self::SearchReport => b"TRAVERSE::SEARCH_REPORT::V1\0",
            Self::BenchGuard => b"TRAVERSE::BENCH_GUARD::V1\0",
        }
    }
}

impl std::fmt::Display for HashDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::StateFingerprint => "StateFingerprint",
            Self::SearchPath => "SearchPath",
            Self::PolicySnapshot => "PolicySnapshot",
            Self::SearchReport => "SearchReport",
            Self::BenchGuard => "BenchGuard",
        };
        f.write_str(name)
    }
}
