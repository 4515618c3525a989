//! Property tests over randomly generated inputs.

use std::collections::BTreeSet;

use combsearch_harness::config::default_policy;
use combsearch_harness::contract::Variant;
use combsearch_harness::worlds::operator_insertion::{evaluate, OperatorInsertion};
use combsearch_harness::worlds::permutations::Permutations;
use combsearch_harness::worlds::subset_sum::SubsetSum;
use combsearch_search::search;
use proptest::prelude::*;

/// Every index subset of `values` summing to `target`, values in index order.
fn brute_force_subsets(values: &[u64], target: u64) -> Vec<Vec<u64>> {
    let mut found = Vec::new();
    for mask in 1u32..(1 << values.len()) {
        let picked: Vec<u64> = values
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, v)| *v)
            .collect();
        if picked.iter().sum::<u64>() == target {
            found.push(picked);
        }
    }
    found.sort();
    found
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

proptest! {
    #[test]
    fn subset_sum_is_sound_and_complete(
        values in prop::collection::vec(1u64..=20, 0..=10),
        target in 1u64..=60,
    ) {
        let world = SubsetSum::new(values.clone(), target).unwrap();
        let result = search(&world, &default_policy(Variant::SubsetSum)).unwrap();

        for solution in &result.solutions {
            prop_assert_eq!(solution.iter().sum::<u64>(), target);
        }
        let mut found = result.solutions.clone();
        found.sort();
        prop_assert_eq!(found, brute_force_subsets(&values, target));
    }

    #[test]
    fn subset_sum_is_idempotent(
        values in prop::collection::vec(1u64..=30, 0..=12),
        target in 1u64..=80,
    ) {
        let world = SubsetSum::new(values, target).unwrap();
        let policy = default_policy(Variant::SubsetSum);
        let first = search(&world, &policy).unwrap();
        let second = search(&world, &policy).unwrap();
        prop_assert_eq!(&first.solutions, &second.solutions);
        prop_assert_eq!(first.report, second.report);
    }

    #[test]
    fn distinct_items_give_n_factorial_orderings(
        items in prop::collection::btree_set(-50i64..50, 1..=6),
    ) {
        let items: Vec<i64> = items.into_iter().collect();
        let n = items.len();
        let result = search(
            &Permutations::new(items.clone()),
            &default_policy(Variant::Permutations),
        )
        .unwrap();

        prop_assert_eq!(result.len(), factorial(n));
        let distinct: BTreeSet<Vec<i64>> = result.solutions.iter().cloned().collect();
        prop_assert_eq!(distinct.len(), factorial(n));
        let expected: BTreeSet<i64> = items.iter().copied().collect();
        for ordering in &result.solutions {
            let as_set: BTreeSet<i64> = ordering.iter().copied().collect();
            prop_assert_eq!(&as_set, &expected);
        }
    }

    #[test]
    fn operator_insertion_generates_every_expression(
        digits in prop::collection::vec(0u8..=9, 1..=6),
    ) {
        let world = OperatorInsertion::new(digits.clone(), None).unwrap();
        let result = search(&world, &default_policy(Variant::OperatorInsertion)).unwrap();
        prop_assert_eq!(result.len(), 3usize.pow(u32::try_from(digits.len() - 1).unwrap()));

        let distinct: BTreeSet<&String> = result.solutions.iter().collect();
        prop_assert_eq!(distinct.len(), result.len());
        for expr in &result.solutions {
            let stripped: String = expr.chars().filter(char::is_ascii_digit).collect();
            let original: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
            prop_assert_eq!(stripped, original);
            prop_assert!(evaluate(expr).is_some());
        }
    }
}
