//! Test suite facade
//!
//! A [`Suite`] owns the run context for one program run. Tests are declared
//! as plain statements; sequential tests run immediately, parallel ones on
//! their own thread. [`Suite::finish`] joins any parallel test whose
//! [`ParallelHandle`] was leaked before it reads the process outcome.

use std::process::ExitCode;
use std::sync::Arc;
use std::thread;
use tracing::info;

use super::context::RunContext;
use super::parallel::{ParallelExecutor, ParallelHandle, ParallelScope};
use super::runner::TestRunner;
use crate::config::SuiteConfig;
use crate::models::{ProcessOutcome, RunSummary, SourceLocation, TestOutcome};
use crate::output::{OutputSink, ReportLine};

/// Entry point for declaring and running tests
#[derive(Debug)]
pub struct Suite {
    runner: TestRunner,
    executor: ParallelExecutor,
    print_summary: bool,
}

impl Suite {
    /// Suite reporting to the console
    pub fn new(config: &SuiteConfig) -> Self {
        Self::with_sink(config, OutputSink::Console)
    }

    /// Suite reporting to the given sink
    pub fn with_sink(config: &SuiteConfig, sink: OutputSink) -> Self {
        let context = Arc::new(RunContext::new(sink));
        let runner = TestRunner::new(context, config.formatter());
        Self {
            executor: ParallelExecutor::new(runner.clone()),
            runner,
            print_summary: config.summary,
        }
    }

    /// Suite capturing its reports in memory (see [`RunReport::output`])
    pub fn capturing(config: &SuiteConfig) -> Self {
        Self::with_sink(config, OutputSink::buffer())
    }

    /// Run a test now, on the calling thread
    #[track_caller]
    pub fn test<F, E>(&self, name: &str, body: F) -> TestOutcome
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<anyhow::Error>,
    {
        self.runner.run(name, SourceLocation::caller(), body)
    }

    /// Run a test on its own thread; the returned handle joins it on drop
    #[track_caller]
    pub fn test_parallel<F, E>(&self, name: &str, body: F) -> ParallelHandle<'_>
    where
        F: FnOnce() -> Result<(), E> + Send + 'static,
        E: Into<anyhow::Error>,
    {
        self.executor.spawn(name, SourceLocation::caller(), body)
    }

    /// Run a batch of parallel tests that may borrow local data
    ///
    /// Returns once every test spawned through the scope has finished.
    pub fn scope<'env, F, T>(&'env self, f: F) -> T
    where
        F: for<'scope> FnOnce(&ParallelScope<'scope, 'env>) -> T,
    {
        thread::scope(|scope| f(&ParallelScope::new(scope, &self.runner)))
    }

    /// Close the run: print the summary line and return the final report
    pub fn finish(self) -> RunReport {
        let leaked = self.executor.join_pending();
        let context = self.runner.context();
        let summary = context.summary();

        if self.print_summary {
            let line = self.runner.formatter().format_summary(&summary);
            context.emit(&[line]);
        }

        info!(
            "Run finished in {}ms - {} ({:.1}%), {} leaked handle(s) joined",
            summary.duration.as_millis(),
            summary,
            summary.pass_rate(),
            leaked
        );

        RunReport {
            outcome: context.outcome(),
            summary,
            output: context.take_captured(),
        }
    }
}

impl Default for Suite {
    fn default() -> Self {
        Self::new(&SuiteConfig::default())
    }
}

/// What a finished run produced
#[derive(Clone, Debug)]
pub struct RunReport {
    pub outcome: ProcessOutcome,
    pub summary: RunSummary,
    /// Report lines, when the suite was capturing
    pub output: Vec<ReportLine>,
}

impl RunReport {
    pub fn exit_code(&self) -> ExitCode {
        self.outcome.exit_code()
    }
}
