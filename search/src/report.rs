//! `SearchReportV1`: aggregate audit summary of one search.
//!
//! The report carries no solutions, only their digest. Two reports with the
//! same canonical bytes describe searches that visited the same number of
//! nodes, made the same prune decisions and accepted the same solution set.

use crate::digest::{canonical_hash, canonical_json_bytes, CanonError, ContentHash, HashDomain};
use crate::policy::SearchPolicyV1;

/// Counters accumulated during traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Nodes visited, root included.
    pub nodes_expanded: u64,
    /// Candidates returned by `candidates()` across all expanded nodes.
    pub candidates_generated: u64,
    /// Branches abandoned because `is_prunable` held.
    pub branches_pruned: u64,
    /// Goal states reached (before dedup).
    pub goals_reached: u64,
    /// Goal states whose solution repeated an earlier one.
    pub duplicates_suppressed: u64,
    /// Non-goal, non-pruned nodes left unexpanded by `max_depth`.
    pub depth_cutoffs: u64,
    /// Deepest depth visited.
    pub deepest_depth: u32,
}

/// Why the search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// Every branch from the root was explored or pruned.
    Exhausted,
    /// `max_solutions` accepted solutions were collected.
    SolutionLimitReached,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
    /// A problem callback panicked; solutions found before it are kept.
    InternalPanic { detail: String },
}

impl TerminationReasonV1 {
    /// Stable snake-case tag for serialization.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exhausted => "exhausted",
            Self::SolutionLimitReached => "solution_limit_reached",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::InternalPanic { .. } => "internal_panic",
        }
    }
}

/// Report for one completed search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1 {
    pub problem_id: String,
    pub policy: SearchPolicyV1,
    pub stats: SearchStatsV1,
    pub termination_reason: TerminationReasonV1,
    pub solution_count: u64,
    /// Order-independent digest of the accepted solutions.
    pub solution_digest: ContentHash,
}

impl SearchReportV1 {
    /// True when the whole tree was explored, so the solution set is complete.
    #[must_use]
    pub fn is_exhaustive(&self) -> bool {
        self.termination_reason == TerminationReasonV1::Exhausted && self.stats.depth_cutoffs == 0
    }

    /// Serialize the report to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Digest of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchReport, &bytes))
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "policy": policy_to_json(&self.policy),
            "problem_id": self.problem_id,
            "solution_count": self.solution_count,
            "solution_digest": self.solution_digest.as_str(),
            "stats": stats_to_json(&self.stats),
            "termination_reason": termination_to_json(&self.termination_reason),
        })
    }
}

fn policy_to_json(p: &SearchPolicyV1) -> serde_json::Value {
    serde_json::json!({
        "dedup": p.dedup.as_str(),
        "max_depth": p.max_depth,
        "max_expansions": p.max_expansions,
        "max_solutions": p.max_solutions,
    })
}

fn stats_to_json(s: &SearchStatsV1) -> serde_json::Value {
    serde_json::json!({
        "branches_pruned": s.branches_pruned,
        "candidates_generated": s.candidates_generated,
        "deepest_depth": s.deepest_depth,
        "depth_cutoffs": s.depth_cutoffs,
        "duplicates_suppressed": s.duplicates_suppressed,
        "goals_reached": s.goals_reached,
        "nodes_expanded": s.nodes_expanded,
    })
}

fn termination_to_json(t: &TerminationReasonV1) -> serde_json::Value {
    match t {
        TerminationReasonV1::InternalPanic { detail } => {
            serde_json::json!({"detail": detail, "type": t.as_str()})
        }
        _ => serde_json::json!({"type": t.as_str()}),
    }
}
