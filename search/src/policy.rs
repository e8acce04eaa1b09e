//! Search policy: budgets that keep every algorithm terminating.

use crate::error::SearchError;

/// Search budget configuration.
///
/// The same policy drives every algorithm. `max_depth_limit` is read only by
/// iterative deepening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions (successor generations), summed over all
    /// iterative-deepening passes.
    pub max_expansions: u64,
    /// Largest path length (in states) iterative deepening will try.
    pub max_depth_limit: u32,
    /// Keep an ordered log of expansions in the search statistics.
    pub record_expansions: bool,
}

impl SearchPolicyV1 {
    /// A policy with no practical caps.
    ///
    /// Breadth-first and depth-first search without a visited set may not
    /// terminate on a cyclic state graph under this policy.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_expansions: u64::MAX,
            max_depth_limit: u32::MAX,
            record_expansions: false,
        }
    }

    /// Same policy with a different expansion cap.
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Same policy with a different iterative-deepening bound.
    #[must_use]
    pub fn with_max_depth_limit(mut self, max_depth_limit: u32) -> Self {
        self.max_depth_limit = max_depth_limit;
        self
    }

    /// Same policy with expansion logging switched on.
    #[must_use]
    pub fn recording(mut self) -> Self {
        self.record_expansions = true;
        self
    }

    /// Check that the policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if either budget is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_depth_limit == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_depth_limit must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Canonical JSON projection (integers and booleans only).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_depth_limit": self.max_depth_limit,
            "max_expansions": self.max_expansions,
            "record_expansions": self.record_expansions,
        })
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_expansions: 1_000_000,
            max_depth_limit: 64,
            record_expansions: false,
        }
    }
}
