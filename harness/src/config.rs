//! Run configuration: caller overrides layered over per-variant defaults.
//!
//! The runner derives a [`SearchPolicyV1`] from a [`RunConfig`] and the
//! variant being run. Worlds do NOT declare policy.
//!
//! Dedup defaults: permutations, word-grid and power-of-two searches collapse
//! equal solutions (their trees reach the same tuple along several paths);
//! subset-sum and operator insertion report every goal node.

use combsearch_search::{DedupPolicyV1, SearchPolicyV1};
use thiserror::Error;

use crate::contract::Variant;

/// Environment variable that overrides the expansion budget.
pub const ENV_MAX_EXPANSIONS: &str = "COMBSEARCH_MAX_EXPANSIONS";

/// Configuration that can override defaults.
///
/// Every `None` field falls back to the variant default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Hard cap on visited nodes.
    pub max_expansions: Option<u64>,
    /// Depth cutoff.
    pub max_depth: Option<u32>,
    /// Stop after this many solutions.
    pub max_solutions: Option<u64>,
    /// Dedup override.
    pub dedup: Option<DedupPolicyV1>,
}

/// Error reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable held an unparsable value.
    #[error("{name}={value:?} is not a positive integer")]
    InvalidEnv { name: &'static str, value: String },
}

impl RunConfig {
    /// Fill unset fields from the process environment.
    ///
    /// Explicit fields win over the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if a variable is set but unparsable.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_env_lookup(|name| std::env::var(name).ok())
    }

    /// [`RunConfig::with_env`] with an injectable lookup, for tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if a variable is set but unparsable.
    pub fn with_env_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if self.max_expansions.is_none() {
            if let Some(value) = lookup(ENV_MAX_EXPANSIONS) {
                let parsed = value
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|v| *v > 0)
                    .ok_or(ConfigError::InvalidEnv {
                        name: ENV_MAX_EXPANSIONS,
                        value,
                    })?;
                self.max_expansions = Some(parsed);
            }
        }
        Ok(self)
    }

    /// Merge with the defaults for `variant`.
    #[must_use]
    pub fn to_search_policy(&self, variant: Variant) -> SearchPolicyV1 {
        let defaults = default_policy(variant);
        SearchPolicyV1 {
            max_expansions: self.max_expansions.unwrap_or(defaults.max_expansions),
            max_depth: self.max_depth.or(defaults.max_depth),
            max_solutions: self.max_solutions.or(defaults.max_solutions),
            dedup: self.dedup.unwrap_or(defaults.dedup),
        }
    }
}

/// The policy a variant runs with when nothing is overridden.
#[must_use]
pub fn default_policy(variant: Variant) -> SearchPolicyV1 {
    let dedup = match variant {
        Variant::SubsetSum | Variant::OperatorInsertion => DedupPolicyV1::KeepAll,
        Variant::Permutations | Variant::WordGrid | Variant::PowerOfTwo => {
            DedupPolicyV1::CanonicalTuple
        }
    };
    SearchPolicyV1::default().with_dedup(dedup)
}
