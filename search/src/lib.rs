//! Combsearch Search: deterministic depth-first backtracking over a finite
//! branching tree.
//!
//! This crate owns the traversal only. Problems describe themselves through
//! [`contract::SearchProblemV1`]; the engine decides the visiting order,
//! applies budgets, suppresses duplicate solutions and reports how the
//! search ended.
//!
//! # Crate dependency graph
//!
//! ```text
//! combsearch_search  ←  combsearch_harness
//! (engine, policy)      (worlds, input, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblemV1`]: candidate generation, extension, goal and prune tests
//! - [`SearchPolicyV1`]: budgets and dedup configuration
//! - [`SearchResult`]: accepted solutions in discovery order plus a report
//! - [`SearchReportV1`]: counters and termination reason, canonically serializable
//! - [`ContentHash`]: `sha256:<hex>` digests used for determinism checks

#![forbid(unsafe_code)]

pub mod contract;
pub mod digest;
pub mod error;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;

pub use contract::SearchProblemV1;
pub use digest::ContentHash;
pub use error::SearchError;
pub use policy::{DedupPolicyV1, SearchPolicyV1};
pub use report::{SearchReportV1, SearchStatsV1, TerminationReasonV1};
pub use search::{search, SearchResult};
