//! Test execution runner
//!
//! Runs one test body inside a failure boundary. Errors returned by the body
//! and panics raised by it are both caught here and never escape.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error};

use super::context::RunContext;
use super::panic_guard::PanicGuard;
use crate::models::{Fault, SourceLocation, TestOutcome, TestStatus};
use crate::output::ResultFormatter;
use crate::utils::Timer;

/// Runs test bodies and publishes their reports
#[derive(Clone, Debug)]
pub struct TestRunner {
    context: Arc<RunContext>,
    formatter: ResultFormatter,
}

impl TestRunner {
    pub fn new(context: Arc<RunContext>, formatter: ResultFormatter) -> Self {
        Self { context, formatter }
    }

    pub fn context(&self) -> &Arc<RunContext> {
        &self.context
    }

    pub fn formatter(&self) -> &ResultFormatter {
        &self.formatter
    }

    /// Run a single test on the current thread
    ///
    /// Exactly one outcome is produced and published, whatever the body does.
    pub fn run<F, E>(&self, name: &str, location: SourceLocation, body: F) -> TestOutcome
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<anyhow::Error>,
    {
        debug!("Running test '{}' ({})", name, location);
        let timer = Timer::start(name);

        let status = {
            let _guard = PanicGuard::enter();
            match panic::catch_unwind(AssertUnwindSafe(body)) {
                Ok(Ok(())) => TestStatus::Passed,
                Ok(Err(err)) => TestStatus::Failed(Fault::from_error(err.into())),
                Err(payload) => TestStatus::Failed(Fault::from_panic(payload)),
            }
        };

        let outcome = TestOutcome {
            name: name.to_string(),
            location,
            duration: timer.stop(),
            status,
        };
        debug!("Finished {}", outcome);
        self.publish(&outcome);
        outcome
    }

    /// Record a test whose thread could not be started
    pub fn report_spawn_failure(
        &self,
        name: &str,
        location: SourceLocation,
        err: &io::Error,
    ) -> TestOutcome {
        error!("Failed to spawn thread for test '{}': {}", name, err);
        let outcome = TestOutcome::failed(
            name,
            location,
            Default::default(),
            Fault::Described(format!("failed to spawn test thread: {err}")),
        );
        self.publish(&outcome);
        outcome
    }

    fn publish(&self, outcome: &TestOutcome) {
        let lines = self.formatter.format_outcome(outcome);
        self.context.publish(&outcome.status, &lines);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::matcher::expect;
    use crate::models::ProcessOutcome;
    use crate::output::{OutputSink, Stream};

    fn runner() -> TestRunner {
        TestRunner::new(
            Arc::new(RunContext::new(OutputSink::buffer())),
            ResultFormatter::new().no_color(),
        )
    }

    fn here() -> SourceLocation {
        SourceLocation::new("runner.rs", 1, 1)
    }

    #[test]
    fn test_passing_body() {
        let runner = runner();
        let outcome = runner.run("passes", here(), || expect(&3).to_be(3));

        assert!(outcome.is_success());
        assert_eq!(runner.context().outcome(), ProcessOutcome::Pass);
        let lines = runner.context().take_captured();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].stream, Stream::Stdout);
        assert!(lines[0].text.starts_with("✓ passes runner.rs:1 ("));
    }

    #[test]
    fn test_assertion_failure() {
        let runner = runner();
        let outcome = runner.run("fails", here(), || expect(&2).to_be(4));

        match outcome.status {
            TestStatus::Failed(Fault::Assertion(failure)) => {
                assert_eq!(failure.expected.as_deref(), Some("4"));
                assert_eq!(failure.actual, "2");
            }
            other => panic!("unexpected status {other:?}"),
        }
        assert_eq!(runner.context().outcome(), ProcessOutcome::Fail);

        let lines = runner.context().take_captured();
        assert!(lines.iter().all(|l| l.stream == Stream::Stderr));
        assert_eq!(lines.last().map(|l| l.text.as_str()), Some("\t\t2"));
    }

    #[test]
    fn test_question_mark_stops_at_first_failure() {
        let runner = runner();
        let outcome = runner.run("early exit", here(), || -> anyhow::Result<()> {
            expect(&1).to_be(2)?;
            panic!("body continued after failed assertion");
        });
        assert!(outcome.status.fault().is_some_and(Fault::is_assertion));
    }

    #[test]
    fn test_returned_error_is_a_failure() {
        let runner = runner();
        let outcome = runner.run("raises", here(), || -> anyhow::Result<()> {
            anyhow::bail!("out of range: unlucky")
        });

        assert_eq!(
            outcome.status,
            TestStatus::Failed(Fault::Described("out of range: unlucky".to_string()))
        );
        assert_eq!(runner.context().outcome(), ProcessOutcome::Fail);
    }

    #[test]
    fn test_panics_are_caught() {
        let runner = runner();
        let described = runner.run("panics", here(), || -> anyhow::Result<()> {
            panic!("unlucky")
        });
        assert_eq!(
            described.status,
            TestStatus::Failed(Fault::Described("unlucky".to_string()))
        );

        let opaque = runner.run("panics opaquely", here(), || -> anyhow::Result<()> {
            panic::panic_any(7_u32)
        });
        assert_eq!(opaque.status, TestStatus::Failed(Fault::Unknown));

        let lines = runner.context().take_captured();
        assert_eq!(lines.last().map(|l| l.text.as_str()), Some("\tTest raised an unknown fault"));
    }

    #[test]
    fn test_k_of_n_failures() {
        let runner = runner();
        let n = 10;
        let failing = [1, 4, 7];
        let mut failures = 0;
        for i in 0..n {
            let should_fail = failing.contains(&i);
            let outcome = runner.run(&format!("case {i}"), here(), move || {
                expect(&should_fail).to_be(false)
            });
            if !outcome.is_success() {
                failures += 1;
            }
        }

        let summary = runner.context().summary();
        assert_eq!(failures, failing.len());
        assert_eq!(summary.failed, failing.len());
        assert_eq!(summary.passed, n - failing.len());
        assert_eq!(runner.context().outcome(), ProcessOutcome::Fail);
    }

    #[test]
    fn test_all_passing_keeps_process_outcome() {
        let runner = runner();
        for i in 0..5 {
            runner.run(&format!("case {i}"), here(), || expect(&i).to_pass(|v| *v < 5));
        }
        assert_eq!(runner.context().outcome(), ProcessOutcome::Pass);
    }

    #[test]
    fn test_spawn_failure_is_reported() {
        let runner = runner();
        let err = io::Error::new(io::ErrorKind::Other, "no threads left");
        let outcome = runner.report_spawn_failure("parallel", here(), &err);

        assert!(!outcome.is_success());
        assert_eq!(runner.context().outcome(), ProcessOutcome::Fail);
    }
}
