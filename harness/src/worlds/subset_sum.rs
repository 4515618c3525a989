//! `SubsetSum`: index-monotonic combinations that add up to a target.
//!
//! Candidates at a state are the indices strictly after the last chosen
//! index, so each combination of positions is built in exactly one order.
//! All values are positive, which makes running sums non-decreasing along a
//! path and "sum already exceeds target" a sound prune.

use combsearch_search::SearchProblemV1;

use crate::contract::{Variant, WorldV1};
use crate::input::InputError;

/// Default target of the "add up to 21" exercise.
pub const DEFAULT_TARGET: u64 = 21;

/// Subset-sum world over a fixed sequence of positive values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSum {
    values: Vec<u64>,
    target: u64,
    world_id: String,
}

/// Partial combination: chosen values, their sum, and the next eligible index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetState {
    pub next_index: usize,
    pub path: Vec<u64>,
    pub total: u64,
}

impl SubsetSum {
    /// Construct a subset-sum world.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonPositive`] for the first zero value; the
    /// prune rule needs strictly positive values.
    pub fn new(values: Vec<u64>, target: u64) -> Result<Self, InputError> {
        if let Some(position) = values.iter().position(|v| *v == 0) {
            return Err(InputError::NonPositive {
                value: 0,
                position: position + 1,
            });
        }
        Ok(Self::from_positive(values, target))
    }

    /// Values already known to be positive.
    pub(crate) fn from_positive(values: Vec<u64>, target: u64) -> Self {
        debug_assert!(values.iter().all(|v| *v > 0));
        let world_id = format!("subset_sum:v1:n{}:t{}", values.len(), target);
        Self {
            values,
            target,
            world_id,
        }
    }

    /// The target sum.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// The input sequence.
    #[must_use]
    pub fn values(&self) -> &[u64] {
        &self.values
    }
}

impl SearchProblemV1 for SubsetSum {
    type State = SubsetState;
    type Candidate = usize;
    type Solution = Vec<u64>;

    fn problem_id(&self) -> &str {
        &self.world_id
    }

    fn root(&self) -> SubsetState {
        SubsetState {
            next_index: 0,
            path: Vec::new(),
            total: 0,
        }
    }

    fn candidates(&self, state: &SubsetState) -> Vec<usize> {
        (state.next_index..self.values.len()).collect()
    }

    fn extend(&self, state: &SubsetState, candidate: &usize) -> SubsetState {
        let value = self.values[*candidate];
        let mut path = Vec::with_capacity(state.path.len() + 1);
        path.extend_from_slice(&state.path);
        path.push(value);
        SubsetState {
            next_index: candidate + 1,
            path,
            total: state.total.saturating_add(value),
        }
    }

    fn is_goal(&self, state: &SubsetState) -> bool {
        !state.path.is_empty() && state.total == self.target
    }

    fn is_prunable(&self, state: &SubsetState) -> bool {
        state.total > self.target
    }

    fn solution(&self, state: &SubsetState) -> Vec<u64> {
        state.path.clone()
    }

    fn solution_json(&self, solution: &Vec<u64>) -> serde_json::Value {
        serde_json::json!(solution)
    }
}

impl WorldV1 for SubsetSum {
    fn variant(&self) -> Variant {
        Variant::SubsetSum
    }

    fn render(&self, solution: &Vec<u64>) -> String {
        join_numbers(solution)
    }
}

/// Space-joined numbers.
pub(crate) fn join_numbers<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
