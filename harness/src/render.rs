//! Console framing for each variant.
//!
//! Every function takes solutions in discovery order and returns the lines
//! the CLI prints, without trailing newlines.

use crate::contract::WorldV1;
use crate::worlds::operator_insertion::{operator_count, OperatorInsertion};
use crate::worlds::permutations::Permutations;
use crate::worlds::power_of_two::PowerOfTwoSums;
use crate::worlds::subset_sum::{join_numbers, SubsetSum};
use crate::worlds::word_grid::{WordGrid, WordMatch};

#[must_use]
pub fn subset_sum_lines(world: &SubsetSum, solutions: &[Vec<u64>]) -> Vec<String> {
    if solutions.is_empty() {
        return vec![format!(
            "No combination of numbers add to {}",
            world.target()
        )];
    }
    solutions
        .iter()
        .map(|s| format!("The values {} add up to {}", world.render(s), world.target()))
        .collect()
}

#[must_use]
pub fn group_sum_line(found: bool) -> String {
    found.to_string()
}

/// Expressions verbatim, or only the one with the fewest signs.
#[must_use]
pub fn operator_lines(
    world: &OperatorInsertion,
    solutions: &[String],
    target: Option<i64>,
    fewest: bool,
) -> Vec<String> {
    let picked: Vec<String> = if fewest {
        solutions
            .iter()
            .min_by_key(|expr| operator_count(expr))
            .map(|expr| world.render(expr))
            .into_iter()
            .collect()
    } else {
        solutions.iter().map(|expr| world.render(expr)).collect()
    };
    match (picked.is_empty(), target) {
        (true, Some(t)) => vec![format!("No expression evaluates to {t}")],
        _ => picked,
    }
}

/// Header quoting the input, then one ordering per line.
#[must_use]
pub fn permutation_lines(world: &Permutations, solutions: &[Vec<i64>]) -> Vec<String> {
    let mut lines = Vec::with_capacity(solutions.len() + 1);
    lines.push(format!(
        "The following combinations are all permutations from the input \"{}\"",
        join_numbers(world.items())
    ));
    lines.extend(solutions.iter().map(|s| world.render(s)));
    lines
}

/// One line per occurrence, then the total.
#[must_use]
pub fn grid_lines(world: &WordGrid, solutions: &[WordMatch], keyword: &str) -> Vec<String> {
    let mut lines: Vec<String> = solutions
        .iter()
        .map(|m| format!("Possible solution : {}", world.render(m)))
        .collect();
    let noun = if solutions.len() == 1 {
        "occurrence"
    } else {
        "occurrences"
    };
    lines.push(format!("{} {noun} of {keyword}", solutions.len()));
    lines
}

/// `f(n) = count`, optionally preceded by every representation.
#[must_use]
pub fn power_lines(world: &PowerOfTwoSums, solutions: &[Vec<u64>], list: bool) -> Vec<String> {
    // The empty sum is the one representation of zero.
    let count = if world.n() == 0 {
        1
    } else {
        solutions.len()
    };
    let mut lines = Vec::new();
    if list {
        lines.extend(solutions.iter().map(|s| world.render(s)));
    }
    lines.push(format!("f({}) = {count}", world.n()));
    lines
}
