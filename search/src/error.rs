//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures and a problem whose solution
//! encoding cannot be digested. Runtime terminations
//! (budget exhaustion, solution limits, caught panics) are expressed via
//! [`crate::report::TerminationReasonV1`] and always come with the solutions
//! found so far.

use thiserror::Error;

/// Typed search failure.
///
/// No report is produced for either variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A policy field holds a value the engine cannot honour.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// `solution_json` produced a value that is not canonical JSON.
    #[error("solution encoding is not canonical: {detail}")]
    NonCanonicalSolution { detail: String },
}
