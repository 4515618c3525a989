//! combsearch - bounded backtracking search over small combinatorial puzzles
//!
//! Usage:
//!   echo "5 6 7 10 11 7 3" | combsearch sum
//!   echo "5 6 7" | combsearch permute
//!   combsearch grid --keyword WIN --input map.txt

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use combsearch_harness::config::RunConfig;
use combsearch_harness::runner::{run_request, RunError, RunRequest};
use combsearch_harness::worlds::operator_insertion::HUNDRED;
use combsearch_harness::worlds::subset_sum::DEFAULT_TARGET;
use combsearch_harness::worlds::word_grid::{DirectionSet, PathShape};
use combsearch_search::{DedupPolicyV1, TerminationReasonV1};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "combsearch")]
#[command(about = "Bounded backtracking search over small combinatorial puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct CommonArgs {
    /// Read input from this file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Print the canonical JSON search report to stderr
    #[arg(long, global = true)]
    report: bool,

    /// Hard cap on visited nodes (overrides COMBSEARCH_MAX_EXPANSIONS)
    #[arg(long, global = true)]
    max_expansions: Option<u64>,

    /// Depth cutoff
    #[arg(long, global = true)]
    max_depth: Option<u32>,

    /// Stop after this many solutions
    #[arg(long, global = true)]
    max_solutions: Option<u64>,

    /// Override the variant's duplicate handling
    #[arg(long, global = true, value_enum)]
    dedup: Option<DedupArg>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every combination of the input numbers that adds up to the target
    Sum {
        #[arg(long, default_value_t = DEFAULT_TARGET)]
        target: u64,
    },
    /// Print whether any combination adds up to the target
    GroupSum {
        #[arg(long)]
        target: u64,
    },
    /// Insert +, - or nothing between digits
    Operators {
        /// Only keep expressions evaluating to this value
        #[arg(long, allow_negative_numbers = true)]
        target: Option<i64>,
        /// Print only the expression with the fewest signs (implies --target 100 if unset)
        #[arg(long)]
        fewest: bool,
    },
    /// Print every ordering of the input numbers
    Permute,
    /// Find a keyword in a character grid read from all input lines
    Grid {
        #[arg(long)]
        keyword: String,
        /// Disallow diagonal steps
        #[arg(long)]
        orthogonal: bool,
        /// Keep one direction for the whole word
        #[arg(long)]
        straight: bool,
    },
    /// Count the ways to write n as a sum of powers of two, each used at most twice
    Powers {
        /// Print each representation before the count
        #[arg(long)]
        list: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DedupArg {
    KeepAll,
    CanonicalTuple,
}

impl From<DedupArg> for DedupPolicyV1 {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::KeepAll => Self::KeepAll,
            DedupArg::CanonicalTuple => Self::CanonicalTuple,
        }
    }
}

impl Commands {
    fn to_request(&self) -> RunRequest {
        match self {
            Self::Sum { target } => RunRequest::SubsetSum { target: *target },
            Self::GroupSum { target } => RunRequest::GroupSum { target: *target },
            Self::Operators { target, fewest } => RunRequest::Operators {
                target: target.or(fewest.then_some(HUNDRED)),
                fewest: *fewest,
            },
            Self::Permute => RunRequest::Permute,
            Self::Grid {
                keyword,
                orthogonal,
                straight,
            } => RunRequest::Grid {
                keyword: keyword.clone(),
                directions: if *orthogonal {
                    DirectionSet::Orthogonal4
                } else {
                    DirectionSet::Compass8
                },
                shape: if *straight {
                    PathShape::Straight
                } else {
                    PathShape::Winding
                },
            },
            Self::Powers { list } => RunRequest::Powers { list: *list },
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let input = read_input(cli.common.input.as_ref())?;
    let config = RunConfig {
        max_expansions: cli.common.max_expansions,
        max_depth: cli.common.max_depth,
        max_solutions: cli.common.max_solutions,
        dedup: cli.common.dedup.map(Into::into),
    }
    .with_env()?;

    let request = cli.command.to_request();
    let outcome = match run_request(&request, &input, &config) {
        Ok(outcome) => outcome,
        Err(RunError::EmptyInput { usage, .. }) => {
            eprintln!("{usage}");
            return Ok(ExitCode::from(2));
        }
        Err(e) => return Err(e).context(format!("{} run failed", request.variant())),
    };

    for line in &outcome.lines {
        println!("{line}");
    }
    if cli.common.report {
        let bytes = outcome.report.to_canonical_json_bytes()?;
        eprintln!("{}", String::from_utf8_lossy(&bytes));
    }
    let report = &outcome.report;
    if let TerminationReasonV1::InternalPanic { detail } = &report.termination_reason {
        eprintln!("error: search aborted: {detail}");
        return Ok(ExitCode::FAILURE);
    }
    if report.stats.depth_cutoffs > 0
        || report.termination_reason == TerminationReasonV1::ExpansionBudgetExceeded
    {
        tracing::warn!(
            termination = report.termination_reason.as_str(),
            nodes_expanded = report.stats.nodes_expanded,
            depth_cutoffs = report.stats.depth_cutoffs,
            "search did not exhaust the tree; output is partial"
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
