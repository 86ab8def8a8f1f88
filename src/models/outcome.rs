//! Test outcome models
//!
//! Defines per-test outcomes, the process-wide pass/fail flag and the run summary.

use std::fmt;
use std::process::ExitCode;
use std::time::Duration;

use super::{Fault, SourceLocation};

/// Final state of a single test
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed(Fault),
}

impl TestStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            TestStatus::Passed => "✓",
            TestStatus::Failed(_) => "x",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }

    pub fn fault(&self) -> Option<&Fault> {
        match self {
            TestStatus::Passed => None,
            TestStatus::Failed(fault) => Some(fault),
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => write!(f, "PASS"),
            TestStatus::Failed(_) => write!(f, "FAIL"),
        }
    }
}

/// Result of running one test declaration
#[derive(Clone, Debug)]
pub struct TestOutcome {
    pub name: String,
    pub location: SourceLocation,
    pub duration: Duration,
    pub status: TestStatus,
}

impl TestOutcome {
    pub fn passed(name: impl Into<String>, location: SourceLocation, duration: Duration) -> Self {
        Self {
            name: name.into(),
            location,
            duration,
            status: TestStatus::Passed,
        }
    }

    pub fn failed(
        name: impl Into<String>,
        location: SourceLocation,
        duration: Duration,
        fault: Fault,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            duration,
            status: TestStatus::Failed(fault),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}ms]",
            self.status.symbol(),
            self.name,
            self.location,
            self.duration.as_millis()
        )?;
        if let Some(fault) = self.status.fault() {
            write!(f, " - {fault}")?;
        }
        Ok(())
    }
}

/// Cumulative pass/fail flag for the whole run
///
/// Starts as `Pass` and only ever moves to `Fail`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProcessOutcome {
    #[default]
    Pass,
    Fail,
}

impl ProcessOutcome {
    pub fn mark_failed(&mut self) {
        *self = ProcessOutcome::Fail;
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, ProcessOutcome::Pass)
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            ProcessOutcome::Pass => ExitCode::SUCCESS,
            ProcessOutcome::Fail => ExitCode::FAILURE,
        }
    }
}

/// Counts gathered over a run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl RunSummary {
    pub fn record(&mut self, status: &TestStatus) {
        self.total += 1;
        if status.is_success() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} passed, {} failed", self.passed, self.failed)
    }
}
