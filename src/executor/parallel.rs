//! Parallel test execution
//!
//! Each parallel test gets a dedicated OS thread. Two ways to wait for them:
//!
//! - [`ParallelHandle`]: joins its thread when dropped (or on [`ParallelHandle::join`])
//! - [`ParallelScope`]: every test spawned inside [`std::thread::scope`] is
//!   joined when the scope closure returns; tests may borrow local data
//!
//! There is no cancellation and no timeout; a test that never returns blocks
//! whoever waits for it.

use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle, Scope, ThreadId};
use tracing::{debug, error, warn};

use super::runner::TestRunner;
use crate::models::SourceLocation;

/// Spawns tests onto their own threads
///
/// Every spawned thread stays in a pending list until it is joined, either
/// through its [`ParallelHandle`] or by [`ParallelExecutor::join_pending`].
#[derive(Clone, Debug)]
pub struct ParallelExecutor {
    runner: TestRunner,
    pending: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl ParallelExecutor {
    pub fn new(runner: TestRunner) -> Self {
        Self {
            runner,
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Start a test on a new thread
    ///
    /// If the thread cannot be created the test is reported as failed and the
    /// returned handle has nothing to wait for.
    pub fn spawn<F, E>(&self, name: &str, location: SourceLocation, body: F) -> ParallelHandle<'_>
    where
        F: FnOnce() -> Result<(), E> + Send + 'static,
        E: Into<anyhow::Error>,
    {
        let runner = self.runner.clone();
        let owned_name = name.to_string();

        let spawned = thread::Builder::new()
            .name(thread_name(name))
            .spawn(move || {
                runner.run(&owned_name, location, body);
            });

        let thread = match spawned {
            Ok(thread) => {
                debug!("Spawned parallel test '{}'", name);
                let id = thread.thread().id();
                self.pending.lock().push(thread);
                Some(id)
            }
            Err(err) => {
                self.runner.report_spawn_failure(name, location, &err);
                None
            }
        };

        ParallelHandle {
            name: name.to_string(),
            thread,
            executor: self,
        }
    }

    /// Join every thread still pending, including those whose handle was
    /// leaked; returns how many were joined
    pub fn join_pending(&self) -> usize {
        let threads = std::mem::take(&mut *self.pending.lock());
        let count = threads.len();
        if count > 0 {
            warn!("Joining {} parallel test(s) whose handle was never joined", count);
        }
        for thread in threads {
            join_logged(thread);
        }
        count
    }

    fn join_thread(&self, id: ThreadId) {
        let thread = {
            let mut pending = self.pending.lock();
            pending
                .iter()
                .position(|thread| thread.thread().id() == id)
                .map(|index| pending.swap_remove(index))
        };
        if let Some(thread) = thread {
            join_logged(thread);
        }
    }
}

fn join_logged(thread: JoinHandle<()>) {
    let name = thread.thread().name().unwrap_or("cest:?").to_string();
    if thread.join().is_err() {
        error!("Thread '{}' panicked outside its test boundary", name);
    }
}

/// An in-flight parallel test
///
/// Dropping the handle blocks until the test has finished and reported.
#[must_use = "dropping a ParallelHandle immediately waits for its test to finish"]
#[derive(Debug)]
pub struct ParallelHandle<'a> {
    name: String,
    thread: Option<ThreadId>,
    executor: &'a ParallelExecutor,
}

impl ParallelHandle<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Block until the test has finished
    pub fn join(mut self) {
        self.wait();
    }

    fn wait(&mut self) {
        if let Some(id) = self.thread.take() {
            debug!("Joining parallel test '{}'", self.name);
            self.executor.join_thread(id);
        }
    }
}

impl Drop for ParallelHandle<'_> {
    fn drop(&mut self) {
        self.wait();
    }
}

/// Spawns borrowing tests inside a thread scope; all are joined at scope exit
pub struct ParallelScope<'scope, 'env: 'scope> {
    scope: &'scope Scope<'scope, 'env>,
    runner: &'env TestRunner,
}

impl<'scope, 'env> ParallelScope<'scope, 'env> {
    pub fn new(scope: &'scope Scope<'scope, 'env>, runner: &'env TestRunner) -> Self {
        Self { scope, runner }
    }

    /// Start a test on a new thread within this scope
    #[track_caller]
    pub fn test<F, E>(&self, name: &str, body: F)
    where
        F: FnOnce() -> Result<(), E> + Send + 'scope,
        E: Into<anyhow::Error>,
    {
        let location = SourceLocation::caller();
        let runner = self.runner;
        let owned_name = name.to_string();

        let spawned = thread::Builder::new()
            .name(thread_name(name))
            .spawn_scoped(self.scope, move || {
                runner.run(&owned_name, location, body);
            });

        if let Err(err) = spawned {
            runner.report_spawn_failure(name, location, &err);
        }
    }
}

/// Thread names may not contain NUL bytes
fn thread_name(test_name: &str) -> String {
    format!("cest:{}", test_name.replace('\0', " "))
}
