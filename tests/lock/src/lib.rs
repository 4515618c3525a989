//! Shared fixtures for the lock tests and the `search_fixture` binary.
//!
//! [`fixture_lines`] runs one canonical scenario per variant and renders the
//! results as `key=value` lines. The in-process determinism tests and the
//! cross-process test compare exactly these lines.

use combsearch_harness::config::RunConfig;
use combsearch_harness::runner::{run_request, RunOutcome, RunRequest};
use combsearch_harness::worlds::word_grid::{DirectionSet, PathShape};

/// Grid with four winding paths spelling WIN.
pub const WIN_MAP: &str = "\
+------------+
|xxxxWxxxxxxx|
|xxxNIIxxxxxx|
|xxxxNxNxxxxx|
|xxxxxxxxxxxx|
+------------+
";

/// One canonical request and its input per variant.
#[must_use]
pub fn scenarios() -> Vec<(RunRequest, &'static str)> {
    vec![
        (RunRequest::SubsetSum { target: 21 }, "5 6 7 10 11 7 3"),
        (
            RunRequest::Operators {
                target: None,
                fewest: false,
            },
            "123",
        ),
        (RunRequest::Permute, "5 6 7"),
        (
            RunRequest::Grid {
                keyword: "WIN".into(),
                directions: DirectionSet::Compass8,
                shape: PathShape::Winding,
            },
            WIN_MAP,
        ),
        (RunRequest::Powers { list: false }, "10"),
    ]
}

/// Run every scenario under `config`.
///
/// # Errors
///
/// Returns the first run error.
pub fn run_scenarios(config: &RunConfig) -> anyhow::Result<Vec<RunOutcome>> {
    scenarios()
        .iter()
        .map(|(request, input)| Ok(run_request(request, input, config)?))
        .collect()
}

/// `variant.key=value` lines describing every scenario's outcome.
///
/// # Errors
///
/// Returns an error if a scenario fails or its report cannot be digested.
pub fn fixture_lines(config: &RunConfig) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for outcome in run_scenarios(config)? {
        let v = outcome.variant.as_str();
        let report = &outcome.report;
        lines.push(format!("{v}.solution_count={}", report.solution_count));
        lines.push(format!("{v}.solution_digest={}", report.solution_digest));
        lines.push(format!("{v}.report_digest={}", report.digest()?));
        lines.push(format!(
            "{v}.termination_reason={}",
            report.termination_reason.as_str()
        ));
        lines.push(format!("{v}.nodes_expanded={}", report.stats.nodes_expanded));
    }
    Ok(lines)
}
