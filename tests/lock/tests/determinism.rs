//! In-process determinism: repeated runs give byte-identical digests, and the
//! solution-set digest does not depend on discovery order.

use combsearch_harness::config::{default_policy, RunConfig};
use combsearch_harness::contract::Variant;
use combsearch_harness::worlds::permutations::Permutations;
use combsearch_harness::worlds::subset_sum::SubsetSum;
use combsearch_search::digest::solution_set_digest;
use combsearch_search::search;
use lock_tests::{fixture_lines, run_scenarios};

#[test]
fn fixture_lines_are_stable_across_runs() {
    let config = RunConfig::default();
    let first = fixture_lines(&config).unwrap();
    for _ in 0..5 {
        assert_eq!(first, fixture_lines(&config).unwrap());
    }
    assert_eq!(first.len(), 5 * 5);
}

#[test]
fn every_scenario_is_exhaustive_under_defaults() {
    for outcome in run_scenarios(&RunConfig::default()).unwrap() {
        assert!(
            outcome.report.is_exhaustive(),
            "{} stopped early: {:?}",
            outcome.variant,
            outcome.report.termination_reason
        );
    }
}

#[test]
fn permutation_digest_ignores_input_order() {
    let policy = default_policy(Variant::Permutations);
    let a = search(&Permutations::new(vec![5, 6, 7]), &policy).unwrap();
    let b = search(&Permutations::new(vec![7, 5, 6]), &policy).unwrap();
    assert_ne!(a.solutions, b.solutions, "discovery order should differ");
    assert_eq!(a.report.solution_digest, b.report.solution_digest);
}

#[test]
fn reported_digest_matches_recomputed_digest() {
    let world = SubsetSum::new(vec![5, 6, 7, 10, 11, 7, 3], 21).unwrap();
    let result = search(&world, &default_policy(Variant::SubsetSum)).unwrap();
    let mut reversed = result.solutions.clone();
    reversed.reverse();
    let recomputed = solution_set_digest(&reversed, |s| serde_json::json!(s)).unwrap();
    assert_eq!(result.report.solution_digest, recomputed);
}

#[test]
fn separate_calls_do_not_share_solutions() {
    let policy = default_policy(Variant::SubsetSum);
    let first = search(&SubsetSum::new(vec![10, 11], 21).unwrap(), &policy).unwrap();
    let second = search(&SubsetSum::new(vec![1, 2], 21).unwrap(), &policy).unwrap();
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}
