//! World contract: what a search problem must add to be run by the harness.
//!
//! The search crate only knows how to traverse. A world additionally names
//! its variant (which selects default policy and output framing) and renders
//! its own solutions for the console. Worlds may NOT run the search or decide
//! budgets; those are runner and config concerns.

use combsearch_search::SearchProblemV1;

/// The instantiations of the backtracking engine that the harness knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// Index-monotonic subsets summing to a target.
    SubsetSum,
    /// `+`, `-` or nothing between consecutive digits.
    OperatorInsertion,
    /// All orderings of a sequence.
    Permutations,
    /// Keyword paths through a character grid.
    WordGrid,
    /// Sums of powers of two, each used at most twice.
    PowerOfTwo,
}

impl Variant {
    /// All variants in declaration order.
    pub const ALL: [Variant; 5] = [
        Self::SubsetSum,
        Self::OperatorInsertion,
        Self::Permutations,
        Self::WordGrid,
        Self::PowerOfTwo,
    ];

    /// Stable snake-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SubsetSum => "subset_sum",
            Self::OperatorInsertion => "operator_insertion",
            Self::Permutations => "permutations",
            Self::WordGrid => "word_grid",
            Self::PowerOfTwo => "power_of_two",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A search problem the harness can run and print.
pub trait WorldV1: SearchProblemV1 {
    /// Which variant this world instantiates.
    fn variant(&self) -> Variant;

    /// One console line for an accepted solution.
    fn render(&self, solution: &Self::Solution) -> String;
}
