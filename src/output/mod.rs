//! Report output module
//!
//! Markdown rendering of validated test reports.

mod formatter;

pub use formatter::{render_markdown, COMMIT_BASE_URL};
