//! Exercise scenarios, run end to end through the harness runner.

use combsearch_harness::config::{default_policy, RunConfig};
use combsearch_harness::contract::Variant;
use combsearch_harness::runner::{run_request, RunRequest};
use combsearch_harness::worlds::operator_insertion::OperatorInsertion;
use combsearch_harness::worlds::permutations::Permutations;
use combsearch_harness::worlds::subset_sum::SubsetSum;
use combsearch_harness::worlds::word_grid::{Direction, WordGrid, WordMatch};
use combsearch_search::{search, TerminationReasonV1};

#[test]
fn subset_sum_twenty_one() {
    let world = SubsetSum::new(vec![5, 6, 7, 10, 11, 7, 3], 21).unwrap();
    let result = search(&world, &default_policy(Variant::SubsetSum)).unwrap();

    assert!(result.solutions.contains(&vec![10, 11]));
    assert!(result.solutions.contains(&vec![11, 7, 3]));
    for solution in &result.solutions {
        assert_eq!(solution.iter().sum::<u64>(), 21, "{solution:?}");
        // Every prefix stayed within the target.
        let mut running = 0;
        for value in solution {
            running += value;
            assert!(running <= 21);
        }
    }
    assert!(result.report.stats.branches_pruned > 0);
    assert_eq!(result.report.termination_reason, TerminationReasonV1::Exhausted);
}

#[test]
fn operator_insertion_one_two_three() {
    let world = OperatorInsertion::new(vec![1, 2, 3], None).unwrap();
    let result = search(&world, &default_policy(Variant::OperatorInsertion)).unwrap();
    assert_eq!(result.len(), 9);
    assert!(result.solutions.iter().any(|s| s == "123"));
}

#[test]
fn permutations_five_six_seven() {
    let world = Permutations::new(vec![5, 6, 7]);
    let result = search(&world, &default_policy(Variant::Permutations)).unwrap();
    assert_eq!(result.len(), 6);
    let mut sorted = result.solutions.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 6);
}

#[test]
fn diagonal_win_reports_directions() {
    let grid = vec![
        "W..".chars().collect(),
        ".I.".chars().collect(),
        "..N".chars().collect(),
    ];
    let world = WordGrid::new(grid, "WIN");
    let result = search(&world, &default_policy(Variant::WordGrid)).unwrap();
    assert_eq!(
        result.solutions,
        vec![WordMatch {
            row: 0,
            col: 0,
            steps: vec![Direction::SE, Direction::SE],
        }]
    );
}

#[test]
fn empty_sequence_is_empty_result_not_error() {
    let world = SubsetSum::new(Vec::new(), 21).unwrap();
    let result = search(&world, &default_policy(Variant::SubsetSum)).unwrap();
    assert!(result.is_empty());

    let outcome =
        run_request(&RunRequest::SubsetSum { target: 21 }, "", &RunConfig::default()).unwrap();
    assert_eq!(outcome.lines, vec!["No combination of numbers add to 21"]);
}

#[test]
fn fewest_operators_hundred() {
    let outcome = run_request(
        &RunRequest::Operators {
            target: Some(100),
            fewest: true,
        },
        "123456789",
        &RunConfig::default(),
    )
    .unwrap();
    assert_eq!(outcome.lines, vec!["123-45-67+89"]);
}

#[test]
fn euler_169_ten() {
    let outcome = run_request(
        &RunRequest::Powers { list: false },
        "10",
        &RunConfig::default(),
    )
    .unwrap();
    assert_eq!(outcome.lines, vec!["f(10) = 5"]);
}

#[test]
fn budget_exhaustion_is_reported_not_raised() {
    let config = RunConfig {
        max_expansions: Some(10),
        ..RunConfig::default()
    };
    let outcome = run_request(&RunRequest::Permute, "1 2 3 4 5 6", &config).unwrap();
    assert_eq!(
        outcome.report.termination_reason,
        TerminationReasonV1::ExpansionBudgetExceeded
    );
    assert!(!outcome.report.is_exhaustive());
    assert!(outcome.report.stats.nodes_expanded <= 10);
}
