//! Harness runner: parse input, build a world, search, render.
//!
//! # Pipeline
//!
//! ```text
//! RunRequest + input text
//!   → input::parse_*()        (fail fast on malformed tokens)
//!   → World::new()
//!   → RunConfig::to_search_policy(variant)
//!   → combsearch_search::search()
//!   → render::*_lines()       (variant framing, discovery order)
//! ```

use combsearch_search::{search, SearchError, SearchReportV1};
use thiserror::Error;
use tracing::info;

use crate::config::RunConfig;
use crate::contract::{Variant, WorldV1};
use crate::input::{parse_count, parse_digits, parse_grid, parse_numbers, parse_positive, InputError};
use crate::render;
use crate::worlds::operator_insertion::OperatorInsertion;
use crate::worlds::permutations::Permutations;
use crate::worlds::power_of_two::PowerOfTwoSums;
use crate::worlds::subset_sum::SubsetSum;
use crate::worlds::word_grid::{DirectionSet, PathShape, WordGrid};

/// Usage line for the permutation variant's empty-input exit.
pub const PERMUTE_USAGE: &str = "Please provide a sequence of space separated numbers";
const OPERATORS_USAGE: &str = "Please provide a string of digits, e.g. 123";
const GRID_USAGE: &str = "Please provide a grid of characters, one row per line";
const POWERS_USAGE: &str = "Please provide a single non-negative integer";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// Required input was empty; the caller should print `usage` and exit.
    #[error("{usage}")]
    EmptyInput { variant: Variant, usage: &'static str },
    /// Input could not be parsed.
    #[error(transparent)]
    Input(InputError),
    /// Pre-flight search validation failed.
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// What to run, with the variant-specific parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunRequest {
    /// All combinations summing to `target`.
    SubsetSum { target: u64 },
    /// Whether any combination sums to `target`.
    GroupSum { target: u64 },
    /// Operator insertion, optionally filtered by value, optionally reduced
    /// to the expression with the fewest signs.
    Operators { target: Option<i64>, fewest: bool },
    /// All orderings.
    Permute,
    /// Keyword occurrences in a grid.
    Grid {
        keyword: String,
        directions: DirectionSet,
        shape: PathShape,
    },
    /// Euler 169 count, optionally listing each representation.
    Powers { list: bool },
}

impl RunRequest {
    /// The variant this request runs.
    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            Self::SubsetSum { .. } | Self::GroupSum { .. } => Variant::SubsetSum,
            Self::Operators { .. } => Variant::OperatorInsertion,
            Self::Permute => Variant::Permutations,
            Self::Grid { .. } => Variant::WordGrid,
            Self::Powers { .. } => Variant::PowerOfTwo,
        }
    }
}

/// Rendered console output plus the engine's report.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub variant: Variant,
    /// Lines for stdout, in discovery order.
    pub lines: Vec<String>,
    pub report: SearchReportV1,
}

/// Solutions and report from running one world.
#[derive(Debug, Clone)]
pub struct WorldRun<T> {
    pub solutions: Vec<T>,
    pub report: SearchReportV1,
}

/// Run any world under the policy derived from `config`.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the derived policy is invalid.
pub fn run_world<W: WorldV1>(world: &W, config: &RunConfig) -> Result<WorldRun<W::Solution>, RunError> {
    let policy = config.to_search_policy(world.variant());
    let result = search(world, &policy)?;
    info!(
        variant = world.variant().as_str(),
        problem_id = world.problem_id(),
        solutions = result.len(),
        termination = result.report.termination_reason.as_str(),
        "world run finished"
    );
    Ok(WorldRun {
        solutions: result.solutions,
        report: result.report,
    })
}

/// Parse `input`, run the requested world and render its output.
///
/// Grid requests read every line of `input`; all others read the first line.
///
/// # Errors
///
/// Returns [`RunError::EmptyInput`] when a variant that needs input got none,
/// [`RunError::Input`] for malformed input, and [`RunError::Search`] for an
/// invalid policy.
pub fn run_request(
    request: &RunRequest,
    input: &str,
    config: &RunConfig,
) -> Result<RunOutcome, RunError> {
    let first_line = input.lines().next().unwrap_or("");
    let variant = request.variant();

    let (lines, report) = match request {
        RunRequest::SubsetSum { target } => {
            let world = SubsetSum::new(parse_positive(first_line).map_err(RunError::Input)?, *target)
                .map_err(RunError::Input)?;
            let run = run_world(&world, config)?;
            (render::subset_sum_lines(&world, &run.solutions), run.report)
        }
        RunRequest::GroupSum { target } => {
            let world = SubsetSum::new(parse_positive(first_line).map_err(RunError::Input)?, *target)
                .map_err(RunError::Input)?;
            let config = RunConfig {
                max_solutions: Some(1),
                ..config.clone()
            };
            let run = run_world(&world, &config)?;
            (vec![render::group_sum_line(!run.solutions.is_empty())], run.report)
        }
        RunRequest::Operators { target, fewest } => {
            let digits = parse_digits(first_line).map_err(|e| empty_as_usage(e, variant, OPERATORS_USAGE))?;
            let world = OperatorInsertion::new(digits, *target).map_err(RunError::Input)?;
            let run = run_world(&world, config)?;
            (render::operator_lines(&world, &run.solutions, *target, *fewest), run.report)
        }
        RunRequest::Permute => {
            let items = parse_numbers(first_line).map_err(RunError::Input)?;
            if items.is_empty() {
                return Err(RunError::EmptyInput {
                    variant,
                    usage: PERMUTE_USAGE,
                });
            }
            let world = Permutations::new(items);
            let run = run_world(&world, config)?;
            (render::permutation_lines(&world, &run.solutions), run.report)
        }
        RunRequest::Grid {
            keyword,
            directions,
            shape,
        } => {
            let grid = parse_grid(input).map_err(|e| empty_as_usage(e, variant, GRID_USAGE))?;
            let world = WordGrid::with_rules(grid, keyword, *directions, *shape);
            let run = run_world(&world, config)?;
            (render::grid_lines(&world, &run.solutions, keyword), run.report)
        }
        RunRequest::Powers { list } => {
            let n = parse_count(first_line).map_err(|e| empty_as_usage(e, variant, POWERS_USAGE))?;
            let world = PowerOfTwoSums::new(n);
            let run = run_world(&world, config)?;
            (render::power_lines(&world, &run.solutions, *list), run.report)
        }
    };

    Ok(RunOutcome {
        variant,
        lines,
        report,
    })
}

fn empty_as_usage(err: InputError, variant: Variant, usage: &'static str) -> RunError {
    match err {
        InputError::Empty => RunError::EmptyInput { variant, usage },
        other => RunError::Input(other),
    }
}
