//! Process-scoped run state
//!
//! Output sink, pass/fail flag and counters live behind a single lock, so a
//! test's report and its effect on the process outcome are applied together
//! and reports from concurrent tests never interleave.

use parking_lot::Mutex;
use std::time::Instant;
use tracing::warn;

use crate::models::{ProcessOutcome, RunSummary, TestStatus};
use crate::output::{OutputSink, ReportLine};

#[derive(Debug)]
struct RunState {
    sink: OutputSink,
    outcome: ProcessOutcome,
    summary: RunSummary,
}

/// Shared state for one run
#[derive(Debug)]
pub struct RunContext {
    state: Mutex<RunState>,
    started: Instant,
}

impl RunContext {
    pub fn new(sink: OutputSink) -> Self {
        Self {
            state: Mutex::new(RunState {
                sink,
                outcome: ProcessOutcome::Pass,
                summary: RunSummary::default(),
            }),
            started: Instant::now(),
        }
    }

    /// Write a test's report and record its status in one critical section
    pub fn publish(&self, status: &TestStatus, lines: &[ReportLine]) {
        let mut state = self.state.lock();
        if let Err(err) = state.sink.write_block(lines) {
            warn!("Failed to write test report: {}", err);
        }
        state.summary.record(status);
        if !status.is_success() {
            state.outcome.mark_failed();
        }
    }

    /// Write lines that are not tied to a test
    pub fn emit(&self, lines: &[ReportLine]) {
        let mut state = self.state.lock();
        if let Err(err) = state.sink.write_block(lines) {
            warn!("Failed to write report: {}", err);
        }
    }

    pub fn outcome(&self) -> ProcessOutcome {
        self.state.lock().outcome
    }

    /// Counts so far, with the time elapsed since the context was created
    pub fn summary(&self) -> RunSummary {
        let mut summary = self.state.lock().summary.clone();
        summary.duration = self.started.elapsed();
        summary
    }

    pub fn take_captured(&self) -> Vec<ReportLine> {
        self.state.lock().sink.take_captured()
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new(OutputSink::Console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fault;

    #[test]
    fn test_starts_passing() {
        let context = RunContext::new(OutputSink::buffer());
        assert_eq!(context.outcome(), ProcessOutcome::Pass);
        assert_eq!(context.summary().total, 0);
    }

    #[test]
    fn test_publish_records_and_writes() {
        let context = RunContext::new(OutputSink::buffer());
        context.publish(&TestStatus::Passed, &[ReportLine::stdout("ok")]);
        assert_eq!(context.outcome(), ProcessOutcome::Pass);

        context.publish(
            &TestStatus::Failed(Fault::Unknown),
            &[ReportLine::stderr("bad"), ReportLine::stderr("detail")],
        );
        context.publish(&TestStatus::Passed, &[ReportLine::stdout("ok again")]);

        assert_eq!(context.outcome(), ProcessOutcome::Fail);
        let summary = context.summary();
        assert_eq!((summary.total, summary.passed, summary.failed), (3, 2, 1));
        assert_eq!(context.take_captured().len(), 4);
    }

    #[test]
    fn test_emit_does_not_count() {
        let context = RunContext::new(OutputSink::buffer());
        context.emit(&[ReportLine::stdout("banner")]);
        assert_eq!(context.summary().total, 0);
        assert_eq!(context.take_captured(), vec![ReportLine::stdout("banner")]);
    }
}
