//! Binary that runs every canonical scenario and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: `variant.key=value` lines (see `lock_tests::fixture_lines`).

use combsearch_harness::config::RunConfig;

fn main() -> anyhow::Result<()> {
    for line in lock_tests::fixture_lines(&RunConfig::default())? {
        println!("{line}");
    }
    Ok(())
}
