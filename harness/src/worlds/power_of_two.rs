//! `PowerOfTwoSums`: ways to write `n` as a sum of powers of two, each power
//! used at most twice (Project Euler 169).
//!
//! The candidate pool holds every power of two up to `n` twice, in ascending
//! order, and the search is a plain [`SubsetSum`] over that pool. The two
//! copies of a power produce the same tuple along different index paths, so
//! this world must run with canonical-tuple dedup to count correctly.

use combsearch_search::SearchProblemV1;

use crate::contract::{Variant, WorldV1};
use crate::worlds::subset_sum::{SubsetState, SubsetSum};

/// Euler 169 world for a fixed `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerOfTwoSums {
    n: u64,
    inner: SubsetSum,
    world_id: String,
}

impl PowerOfTwoSums {
    #[must_use]
    pub fn new(n: u64) -> Self {
        Self {
            n,
            inner: SubsetSum::from_positive(power_pool(n), n),
            world_id: format!("power_of_two:v1:n{n}"),
        }
    }

    #[must_use]
    pub fn n(&self) -> u64 {
        self.n
    }
}

/// `[1, 1, 2, 2, 4, 4, ...]` up to the highest power not above `n`.
#[must_use]
pub fn power_pool(n: u64) -> Vec<u64> {
    let mut pool = Vec::new();
    let mut power: u64 = 1;
    while power <= n {
        pool.push(power);
        pool.push(power);
        match power.checked_mul(2) {
            Some(next) => power = next,
            None => break,
        }
    }
    pool
}

impl SearchProblemV1 for PowerOfTwoSums {
    type State = SubsetState;
    type Candidate = usize;
    type Solution = Vec<u64>;

    fn problem_id(&self) -> &str {
        &self.world_id
    }

    fn root(&self) -> SubsetState {
        self.inner.root()
    }

    fn candidates(&self, state: &SubsetState) -> Vec<usize> {
        self.inner.candidates(state)
    }

    fn extend(&self, state: &SubsetState, candidate: &usize) -> SubsetState {
        self.inner.extend(state, candidate)
    }

    fn is_goal(&self, state: &SubsetState) -> bool {
        self.inner.is_goal(state)
    }

    fn is_prunable(&self, state: &SubsetState) -> bool {
        self.inner.is_prunable(state)
    }

    fn solution(&self, state: &SubsetState) -> Vec<u64> {
        self.inner.solution(state)
    }

    fn solution_json(&self, solution: &Vec<u64>) -> serde_json::Value {
        self.inner.solution_json(solution)
    }
}

impl WorldV1 for PowerOfTwoSums {
    fn variant(&self) -> Variant {
        Variant::PowerOfTwo
    }

    fn render(&self, solution: &Vec<u64>) -> String {
        solution
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
