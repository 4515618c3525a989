//! World implementations for the harness runner.

pub mod operator_insertion;
pub mod permutations;
pub mod power_of_two;
pub mod subset_sum;
pub mod word_grid;
