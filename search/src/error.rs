//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. "No path" and budget
//! exhaustion are ordinary outcomes expressed via
//! [`crate::graph::TerminationReasonV1`].

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before the first frontier pop. No statistics are
/// produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start state fails the domain's validity predicate.
    InvalidStartState { detail: String },
    /// The goal state fails the domain's validity predicate.
    InvalidGoalState { detail: String },
    /// The policy cannot drive a search (zero budget or zero depth bound).
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStartState { detail } => write!(f, "invalid start state: {detail}"),
            Self::InvalidGoalState { detail } => write!(f, "invalid goal state: {detail}"),
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
