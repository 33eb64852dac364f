//! gtest-report - Google Test result to markdown converter
//!
//! A CLI tool that turns a Google Test JSON result file into a markdown
//! summary linked back to the commit that produced it, suitable for
//! posting from a CI pipeline.
//!
//! ## Usage
//!
//! ```bash
//! # Print the summary for a commit to stdout
//! gtest-report abc123 test_results.json
//!
//! # Write it to a file instead
//! gtest-report abc123 test_results.json --output report.md
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod models;
mod output;

use cli::Args;
use models::TestReport;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let document = load_report(&args.report)?;
    let report = TestReport::from_value(&document)?;

    info!(
        "Report for commit {}: {} suite(s), {} case(s) ({} passed, {} failed)",
        args.commit,
        report.suites.len(),
        report.case_count(),
        report.passed(),
        report.failed()
    );

    let markdown = output::render_markdown(&args.commit, &report);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &markdown)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Saved markdown report to {}", path.display());
        }
        None => print!("{markdown}"),
    }

    Ok(())
}

/// Load a Google Test result file as unvalidated JSON.
fn load_report(path: &Path) -> Result<Value> {
    debug!("Loading test results from {}", path.display());

    let file = File::open(path)
        .with_context(|| format!("Failed to open report file {}", path.display()))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse report file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_report() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"testsuites": []}}"#).unwrap();

        let document = load_report(file.path()).unwrap();
        assert!(document.get("testsuites").is_some());
    }

    #[test]
    fn test_load_report_missing_file() {
        let err = load_report(Path::new("/nonexistent/results.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open report file"));
    }

    #[test]
    fn test_load_report_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_report(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse report file"));
    }
}
