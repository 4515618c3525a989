//! `Permutations`: every ordering of a sequence.
//!
//! Two renditions of the swap method live here:
//!
//! - [`Permutations`] runs through the engine. Each child copies the
//!   arrangement and swaps position `placed` with a later position, so no
//!   branch ever depends on another branch restoring shared data.
//! - [`permute_in_place`] mutates one slice: swap, recurse, swap back. The
//!   slice is back in its original order when the call returns.

use combsearch_search::SearchProblemV1;

use crate::contract::{Variant, WorldV1};
use crate::worlds::subset_sum::join_numbers;

/// Permutation world over a sequence of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutations {
    items: Vec<i64>,
    world_id: String,
}

/// Arrangement with positions `0..placed` fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    pub items: Vec<i64>,
    pub placed: usize,
}

impl Permutations {
    #[must_use]
    pub fn new(items: Vec<i64>) -> Self {
        let world_id = format!("permutations:v1:n{}", items.len());
        Self { items, world_id }
    }

    /// The input sequence.
    #[must_use]
    pub fn items(&self) -> &[i64] {
        &self.items
    }
}

impl SearchProblemV1 for Permutations {
    type State = Arrangement;
    type Candidate = usize;
    type Solution = Vec<i64>;

    fn problem_id(&self) -> &str {
        &self.world_id
    }

    fn root(&self) -> Arrangement {
        Arrangement {
            items: self.items.clone(),
            placed: 0,
        }
    }

    fn candidates(&self, state: &Arrangement) -> Vec<usize> {
        (state.placed..state.items.len()).collect()
    }

    fn extend(&self, state: &Arrangement, candidate: &usize) -> Arrangement {
        let mut items = state.items.clone();
        items.swap(state.placed, *candidate);
        Arrangement {
            items,
            placed: state.placed + 1,
        }
    }

    fn is_goal(&self, state: &Arrangement) -> bool {
        !state.items.is_empty() && state.placed == state.items.len()
    }

    fn is_prunable(&self, _state: &Arrangement) -> bool {
        false
    }

    fn solution(&self, state: &Arrangement) -> Vec<i64> {
        state.items.clone()
    }

    fn solution_json(&self, solution: &Vec<i64>) -> serde_json::Value {
        serde_json::json!(solution)
    }
}

impl WorldV1 for Permutations {
    fn variant(&self) -> Variant {
        Variant::Permutations
    }

    fn render(&self, solution: &Vec<i64>) -> String {
        join_numbers(solution)
    }
}

/// Visit every ordering of `items` by swapping in place.
///
/// Each recursive call is bracketed by a swap and the inverse swap, so
/// `items` is in its original order when this returns. An empty slice is
/// visited once (the empty ordering).
pub fn permute_in_place<T>(items: &mut [T], visit: &mut impl FnMut(&[T])) {
    permute_from(items, 0, visit);
}

fn permute_from<T>(items: &mut [T], index: usize, visit: &mut impl FnMut(&[T])) {
    if index >= items.len() {
        visit(items);
        return;
    }
    for i in index..items.len() {
        items.swap(index, i);
        permute_from(items, index + 1, visit);
        items.swap(index, i);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::config::default_policy;
    use combsearch_search::search;

    fn orderings(items: Vec<i64>) -> Vec<Vec<i64>> {
        let world = Permutations::new(items);
        search(&world, &default_policy(Variant::Permutations))
            .unwrap()
            .solutions
    }

    #[test]
    fn three_items_give_six_orderings_in_swap_order() {
        assert_eq!(
            orderings(vec![5, 6, 7]),
            vec![
                vec![5, 6, 7],
                vec![5, 7, 6],
                vec![6, 5, 7],
                vec![6, 7, 5],
                vec![7, 6, 5],
                vec![7, 5, 6],
            ]
        );
    }

    #[test]
    fn repeated_items_collapse_to_distinct_orderings() {
        let result = orderings(vec![1, 1, 2]);
        assert_eq!(result.len(), 3);
        let distinct: BTreeSet<_> = result.iter().cloned().collect();
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn empty_sequence_has_no_orderings() {
        assert!(orderings(Vec::new()).is_empty());
    }

    #[test]
    fn in_place_visits_same_orderings_and_restores_input() {
        let mut items = vec![5, 6, 7];
        let mut seen = Vec::new();
        permute_in_place(&mut items, &mut |p: &[i64]| seen.push(p.to_vec()));
        assert_eq!(items, vec![5, 6, 7]);
        assert_eq!(seen, orderings(vec![5, 6, 7]));
    }

    #[test]
    fn in_place_visits_empty_slice_once() {
        let mut items: Vec<char> = Vec::new();
        let mut count = 0;
        permute_in_place(&mut items, &mut |_: &[char]| count += 1);
        assert_eq!(count, 1);
    }

    proptest::proptest! {
        #[test]
        fn in_place_always_restores_input(items in proptest::collection::vec(-9i64..9, 0..6)) {
            let mut buf = items.clone();
            let mut visits = 0usize;
            permute_in_place(&mut buf, &mut |_: &[i64]| visits += 1);
            proptest::prop_assert_eq!(&buf, &items);
            proptest::prop_assert_eq!(visits, (1..=items.len()).product::<usize>());
        }
    }
}
