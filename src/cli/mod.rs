//! CLI argument parsing
//!
//! Defines the command-line interface using clap.

use std::path::PathBuf;

use clap::Parser;

/// Google Test report to markdown converter
#[derive(Parser, Debug)]
#[command(name = "gtest-report")]
#[command(version)]
#[command(about = "Convert a Google Test JSON result file into a commit-linked markdown summary")]
#[command(long_about = None)]
pub struct Args {
    /// Commit hash the test run belongs to
    pub commit: String,

    /// Path to the Google Test JSON result file
    pub report: PathBuf,

    /// Write the markdown report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
