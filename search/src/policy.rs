//! Search policy types.

use crate::error::SearchError;

/// Search budgets and dedup configuration.
///
/// Defaults are generous enough that every exercise-sized problem runs to
/// exhaustion; the budgets exist for callers that feed in large inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Hard cap on visited nodes (root included).
    pub max_expansions: u64,
    /// Depth cutoff (`None` = unbounded). Nodes at this depth are not expanded.
    pub max_depth: Option<u32>,
    /// Stop after this many accepted solutions (`None` = all solutions).
    pub max_solutions: Option<u64>,
    /// How repeated solutions are handled.
    pub dedup: DedupPolicyV1,
}

impl SearchPolicyV1 {
    /// Policy that stops at the first accepted solution.
    #[must_use]
    pub fn first_solution() -> Self {
        Self {
            max_solutions: Some(1),
            ..Self::default()
        }
    }

    /// Same policy with a different dedup mode.
    #[must_use]
    pub fn with_dedup(mut self, dedup: DedupPolicyV1) -> Self {
        self.dedup = dedup;
        self
    }

    /// Validate that every budget is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero or
    /// `max_solutions` is `Some(0)`.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_solutions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_solutions must be at least 1 when set".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_expansions: 50_000_000,
            max_depth: None,
            max_solutions: None,
            dedup: DedupPolicyV1::KeepAll,
        }
    }
}

/// Dedup policy: whether equal solutions reached by different paths collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupPolicyV1 {
    /// Every goal node is reported.
    KeepAll,
    /// Solutions are keyed by their canonical tuple; first-seen wins.
    CanonicalTuple,
}

impl DedupPolicyV1 {
    /// Stable name used in reports and CLI flags.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeepAll => "keep_all",
            Self::CanonicalTuple => "canonical_tuple",
        }
    }
}
