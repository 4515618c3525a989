//! Shared workloads for combsearch benchmark suites.

use combsearch_harness::config::RunConfig;
use combsearch_harness::runner::{run_request, RunOutcome, RunRequest};
use combsearch_harness::worlds::word_grid::{DirectionSet, PathShape};

/// A named request plus the stdin text it runs on.
pub struct Workload {
    pub name: &'static str,
    pub request: RunRequest,
    pub input: String,
}

/// `1 2 3 ... n` as one input line.
#[must_use]
pub fn ascending_line(n: u64) -> String {
    (1..=n).map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}

/// Square grid of `size` rows filled with a repeating alphabet.
#[must_use]
pub fn alphabet_grid(size: usize) -> String {
    let letters: Vec<char> = ('A'..='Z').collect();
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| letters[(row * 7 + col * 3) % letters.len()])
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The workloads measured end to end, one or more per variant.
#[must_use]
pub fn workloads() -> Vec<Workload> {
    vec![
        Workload {
            name: "subset_sum/1..=18_t21",
            request: RunRequest::SubsetSum { target: 21 },
            input: ascending_line(18),
        },
        Workload {
            name: "subset_sum/1..=18_t60",
            request: RunRequest::SubsetSum { target: 60 },
            input: ascending_line(18),
        },
        Workload {
            name: "operators/1..=9_t100",
            request: RunRequest::Operators {
                target: Some(100),
                fewest: false,
            },
            input: "123456789".into(),
        },
        Workload {
            name: "permute/7",
            request: RunRequest::Permute,
            input: ascending_line(7),
        },
        Workload {
            name: "grid/16x16_winding",
            request: RunRequest::Grid {
                keyword: "HADG".into(),
                directions: DirectionSet::Compass8,
                shape: PathShape::Winding,
            },
            input: alphabet_grid(16),
        },
        Workload {
            name: "powers/1000",
            request: RunRequest::Powers { list: false },
            input: "1000".into(),
        },
    ]
}

/// Run one workload under default configuration.
///
/// # Panics
///
/// Panics if the run fails. Benchmark workloads are expected to succeed.
#[must_use]
pub fn run_workload(workload: &Workload) -> RunOutcome {
    run_request(&workload.request, &workload.input, &RunConfig::default())
        .expect("benchmark workload should run")
}
