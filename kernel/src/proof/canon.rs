//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! Rules:
//! 1. Object keys sorted lexicographically (`serde_json`'s default `Map` is
//!    ordered; the `preserve_order` feature must stay off).
//! 2. Compact form, no whitespace.
//! 3. Numbers must be integers; floats would make digests depend on float
//!    formatting and are rejected.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
    /// `serde_json` failed to write the value.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Serialize { detail } => write!(f, "canonical JSON serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64`
/// or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    reject_non_integers(value)?;
    serde_json::to_vec(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

fn reject_non_integers(value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(CanonError::NonIntegerNumber { raw: n.to_string() })
        }
        serde_json::Value::Array(items) => items.iter().try_for_each(reject_non_integers),
        serde_json::Value::Object(map) => map.values().try_for_each(reject_non_integers),
        _ => Ok(()),
    }
}
