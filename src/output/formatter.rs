//! Markdown report rendering
//!
//! Turns a validated test report into the commit-linked summary document.

use std::fmt::Write;

use crate::models::TestReport;

/// Commit URL prefix the rendered report links back to
pub const COMMIT_BASE_URL: &str = "https://github.com/flylai/gameboy/commit/";

/// Render a validated report as markdown.
///
/// Suites and cases appear in input order, one line per case. The same
/// report and commit always produce byte-identical output.
pub fn render_markdown(commit_id: &str, report: &TestReport) -> String {
    let mut output = String::new();

    writeln!(output, "# Google Test Report\n").unwrap();
    writeln!(output, "Commit: [{commit_id}]({COMMIT_BASE_URL}{commit_id})\n").unwrap();

    for suite in &report.suites {
        writeln!(output, "## Suite: {}", suite.name).unwrap();
        for case in &suite.cases {
            writeln!(
                output,
                "- {} **Test**: {}",
                case.status().glyph(),
                case.value_param
            )
            .unwrap();
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestReport;
    use serde_json::json;

    fn sample_report() -> TestReport {
        let document = json!({
            "testsuites": [
                {
                    "name": "CPU",
                    "testsuite": [
                        {"value_param": "ADD"},
                        {"value_param": "SUB", "failures": ["mismatch"]}
                    ]
                }
            ]
        });
        TestReport::from_value(&document).unwrap()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let markdown = render_markdown("abc123", &sample_report());

        assert_eq!(
            markdown,
            "# Google Test Report\n\
             \n\
             Commit: [abc123](https://github.com/flylai/gameboy/commit/abc123)\n\
             \n\
             ## Suite: CPU\n\
             - ✅ **Test**: ADD\n\
             - ❌ **Test**: SUB\n"
        );
    }

    #[test]
    fn test_commit_id_appears_twice() {
        let markdown = render_markdown("deadbeef", &sample_report());
        assert_eq!(markdown.matches("deadbeef").count(), 2);
        assert!(markdown.contains(&format!("({COMMIT_BASE_URL}deadbeef)")));
    }

    #[test]
    fn test_empty_suite_list() {
        let report = TestReport::from_value(&json!({"testsuites": []})).unwrap();
        let markdown = render_markdown("abc123", &report);

        assert!(markdown.starts_with("# Google Test Report\n"));
        assert!(!markdown.contains("## Suite:"));
        assert!(markdown.ends_with("/commit/abc123)\n\n"));
    }

    #[test]
    fn test_one_line_per_case_in_input_order() {
        let document = json!({
            "testsuites": [
                {"name": "B", "testsuite": [{"value_param": "Z"}, {"value_param": "A"}]},
                {"name": "A", "testsuite": [{"value_param": "M", "failures": [1]}]}
            ]
        });
        let report = TestReport::from_value(&document).unwrap();
        let markdown = render_markdown("c0ffee", &report);

        let case_lines: Vec<&str> = markdown
            .lines()
            .filter(|l| l.starts_with("- "))
            .collect();
        assert_eq!(case_lines.len(), report.case_count());
        assert_eq!(case_lines[0], "- ✅ **Test**: Z");
        assert_eq!(case_lines[1], "- ✅ **Test**: A");
        assert_eq!(case_lines[2], "- ❌ **Test**: M");

        let suite_lines: Vec<&str> = markdown
            .lines()
            .filter(|l| l.starts_with("## Suite: "))
            .collect();
        assert_eq!(suite_lines, ["## Suite: B", "## Suite: A"]);
    }

    #[test]
    fn test_suite_name_rendered_verbatim() {
        let document = json!({
            "testsuites": [{"name": "ppu/SpriteTest", "testsuite": []}]
        });
        let report = TestReport::from_value(&document).unwrap();
        let markdown = render_markdown("abc123", &report);
        assert!(markdown.contains("## Suite: ppu/SpriteTest\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let report = sample_report();
        let first = render_markdown("abc123", &report);
        let second = render_markdown("abc123", &report);
        assert_eq!(first, second);
    }
}
