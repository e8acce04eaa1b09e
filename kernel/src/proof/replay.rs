//! `replay_verify()`: check a state sequence against its domain by re-applying moves.
//!
//! A path is replayable when every state is valid, no two consecutive states
//! are equal, and each adjacent pair is connected by exactly one move from
//! `valid_moves`. The verifier recovers that move list, so a caller can
//! reproduce the path from its first state alone.

use crate::domain::DomainModelV1;

/// Error during replay (distinct from a divergence verdict).
///
/// A `ReplayError` means there was nothing to replay.
/// A [`ReplayVerdict::Divergence`] means replay ran and found a mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The path has no states.
    EmptyPath,
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "cannot replay an empty path"),
        }
    }
}

impl std::error::Error for ReplayError {}

/// Why replay diverged at a given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivergenceKind {
    /// The state at `index` fails `is_valid`.
    InvalidState,
    /// The state at `index` equals the state before it.
    RepeatedState,
    /// No move leads from `index - 1` to `index`.
    NoConnectingMove,
    /// More than one move leads from `index - 1` to `index`.
    AmbiguousMove { candidates: usize },
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayVerdict<M> {
    /// Every step replayed; `moves[i]` leads from state `i` to state `i + 1`.
    Match { moves: Vec<M> },
    /// The first offending index.
    Divergence { index: usize, kind: DivergenceKind },
}

impl<M> ReplayVerdict<M> {
    /// Returns `true` for [`ReplayVerdict::Match`].
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// Result type for replay verification.
pub type ReplayResult<M> = Result<ReplayVerdict<M>, ReplayError>;

/// Verify `states` by deterministic replay against `domain`.
///
/// # Errors
///
/// Returns [`ReplayError::EmptyPath`] if `states` is empty.
pub fn replay_verify<D: DomainModelV1>(domain: &D, states: &[D::State]) -> ReplayResult<D::Move> {
    let Some(first) = states.first() else {
        return Err(ReplayError::EmptyPath);
    };
    if !domain.is_valid(first) {
        return Ok(ReplayVerdict::Divergence {
            index: 0,
            kind: DivergenceKind::InvalidState,
        });
    }

    let mut moves = Vec::with_capacity(states.len() - 1);
    for (offset, pair) in states.windows(2).enumerate() {
        let index = offset + 1;
        let (prev, next) = (&pair[0], &pair[1]);
        if !domain.is_valid(next) {
            return Ok(ReplayVerdict::Divergence {
                index,
                kind: DivergenceKind::InvalidState,
            });
        }
        if prev == next {
            return Ok(ReplayVerdict::Divergence {
                index,
                kind: DivergenceKind::RepeatedState,
            });
        }

        let mut connecting = domain
            .valid_moves()
            .iter()
            .filter(|mv| domain.apply(prev, mv) == *next);
        let Some(mv) = connecting.next() else {
            return Ok(ReplayVerdict::Divergence {
                index,
                kind: DivergenceKind::NoConnectingMove,
            });
        };
        let extra = connecting.count();
        if extra > 0 {
            return Ok(ReplayVerdict::Divergence {
                index,
                kind: DivergenceKind::AmbiguousMove {
                    candidates: extra + 1,
                },
            });
        }
        moves.push(mv.clone());
    }

    Ok(ReplayVerdict::Match { moves })
}
