//! Report formatting for test outcomes
//!
//! Turns a [`TestOutcome`] into the lines printed for it:
//!
//! ```text
//! ✓ should pass src/main.rs:10 (<1ms)
//! x should fail src/main.rs:13 (0.02ms)
//! Test failed at src/main.rs:14
//!     Expected:
//!         4
//!     Got:
//!         2
//! ```

use super::duration::format_duration;
use super::sink::ReportLine;
use super::style::{render, Style};
use crate::models::{Fault, RunSummary, TestOutcome, TestStatus};

/// Result formatter
#[derive(Clone, Debug)]
pub struct ResultFormatter {
    colorize: bool,
}

impl ResultFormatter {
    pub fn new() -> Self {
        Self { colorize: true }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn is_colorized(&self) -> bool {
        self.colorize
    }

    fn paint(&self, text: impl std::fmt::Display, style: Style) -> String {
        if self.colorize {
            render(text, style)
        } else {
            text.to_string()
        }
    }

    /// Format every line reported for one test
    pub fn format_outcome(&self, outcome: &TestOutcome) -> Vec<ReportLine> {
        match &outcome.status {
            TestStatus::Passed => vec![ReportLine::stdout(self.format_banner(outcome))],
            TestStatus::Failed(fault) => {
                let mut lines = vec![ReportLine::stderr(self.format_banner(outcome))];
                lines.extend(self.format_fault(fault).into_iter().map(ReportLine::stderr));
                lines
            }
        }
    }

    /// Summary line: status glyph, name, location, elapsed time
    pub fn format_banner(&self, outcome: &TestOutcome) -> String {
        let glyph_style = if outcome.is_success() {
            Style::Success
        } else {
            Style::Failure
        };
        format!(
            "{} {} {} {}",
            self.paint(outcome.status.symbol(), glyph_style),
            outcome.name,
            self.paint(outcome.location, Style::Muted),
            self.paint(
                format!("({})", format_duration(outcome.duration)),
                Style::Warning
            )
        )
    }

    fn format_fault(&self, fault: &Fault) -> Vec<String> {
        match fault {
            Fault::Assertion(failure) => {
                let mut lines = vec![format!(
                    "Test failed at {}",
                    self.paint(failure.location, Style::Muted)
                )];
                if let Some(expected) = &failure.expected {
                    lines.push(self.paint(format!("\t{}:", failure.expected_label()), Style::Info));
                    lines.push(self.paint(format!("\t\t{expected}"), Style::Info));
                }
                lines.push(self.paint("\tGot:", Style::Error));
                lines.push(self.paint(format!("\t\t{}", failure.actual), Style::Error));
                lines
            }
            Fault::Described(description) => vec![format!(
                "\tTest raised an error: {}",
                self.paint(description, Style::Failure)
            )],
            Fault::Unknown => vec![self.paint("\tTest raised an unknown fault", Style::Failure)],
        }
    }

    /// Closing line of a run
    pub fn format_summary(&self, summary: &RunSummary) -> ReportLine {
        let passed = self.paint(format!("{} passed", summary.passed), Style::Success);
        let failed_style = if summary.failed > 0 {
            Style::Failure
        } else {
            Style::Muted
        };
        let failed = self.paint(format!("{} failed", summary.failed), failed_style);
        let text = format!(
            "{passed}, {failed} {}",
            self.paint(
                format!("({})", format_duration(summary.duration)),
                Style::Warning
            )
        );
        if summary.failed > 0 {
            ReportLine::stderr(text)
        } else {
            ReportLine::stdout(text)
        }
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssertionFailure, SourceLocation};
    use crate::output::Stream;
    use std::time::Duration;

    fn location(line: u32) -> SourceLocation {
        SourceLocation::new("demo.rs", line, 1)
    }

    fn texts(lines: &[ReportLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_formatter_creation() {
        assert!(ResultFormatter::new().is_colorized());
        assert!(!ResultFormatter::new().no_color().is_colorized());
        assert!(!ResultFormatter::new().with_color(false).is_colorized());
    }

    #[test]
    fn test_pass_line() {
        let outcome = TestOutcome::passed("should pass", location(4), Duration::ZERO);
        let lines = ResultFormatter::new().no_color().format_outcome(&outcome);

        assert_eq!(lines, vec![ReportLine::stdout("✓ should pass demo.rs:4 (<1ms)")]);
    }

    #[test]
    fn test_pass_line_colored() {
        let outcome = TestOutcome::passed("ok", location(1), Duration::ZERO);
        let banner = ResultFormatter::new().format_banner(&outcome);
        assert!(banner.starts_with("\x1b[92m✓\x1b[0m ok "));
        assert!(banner.contains("\x1b[90mdemo.rs:1\x1b[0m"));
    }

    #[test]
    fn test_assertion_failure_lines() {
        let failure = AssertionFailure::new(location(8), "2").with_expected("4");
        let outcome = TestOutcome::failed(
            "should fail",
            location(7),
            Duration::from_millis(3),
            Fault::Assertion(failure),
        );
        let lines = ResultFormatter::new().no_color().format_outcome(&outcome);

        assert!(lines.iter().all(|l| l.stream == Stream::Stderr));
        assert_eq!(
            texts(&lines),
            [
                "x should fail demo.rs:7 (3.00ms)",
                "Test failed at demo.rs:8",
                "\tExpected:",
                "\t\t4",
                "\tGot:",
                "\t\t2",
            ]
        );
    }

    #[test]
    fn test_negated_and_predicate_failures() {
        let negated = AssertionFailure::new(location(2), "5")
            .with_expected("5")
            .negated(true);
        let outcome = TestOutcome::failed("neg", location(1), Duration::ZERO, Fault::Assertion(negated));
        let lines = ResultFormatter::new().no_color().format_outcome(&outcome);
        assert_eq!(lines[2].text, "\tExpected NOT:");

        let predicate = AssertionFailure::new(location(2), "3");
        let outcome =
            TestOutcome::failed("pred", location(1), Duration::ZERO, Fault::Assertion(predicate));
        let lines = ResultFormatter::new().no_color().format_outcome(&outcome);
        assert_eq!(texts(&lines)[2..], ["\tGot:", "\t\t3"]);
    }

    #[test]
    fn test_fault_lines() {
        let described = TestOutcome::failed(
            "raises",
            location(1),
            Duration::ZERO,
            Fault::Described("unlucky".into()),
        );
        let lines = ResultFormatter::new().no_color().format_outcome(&described);
        assert_eq!(texts(&lines)[1], "\tTest raised an error: unlucky");

        let unknown = TestOutcome::failed("opaque", location(1), Duration::ZERO, Fault::Unknown);
        let lines = ResultFormatter::new().no_color().format_outcome(&unknown);
        assert_eq!(texts(&lines)[1], "\tTest raised an unknown fault");
    }

    #[test]
    fn test_summary_line() {
        let summary = RunSummary {
            total: 3,
            passed: 2,
            failed: 1,
            duration: Duration::from_secs(2),
        };
        let line = ResultFormatter::new().no_color().format_summary(&summary);
        assert_eq!(line, ReportLine::stderr("2 passed, 1 failed (2.00s)"));
    }
}
