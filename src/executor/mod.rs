//! Test execution engine
//!
//! Provides sequential and parallel test execution capabilities.

mod context;
mod panic_guard;
mod parallel;
mod runner;
mod suite;

pub use context::RunContext;
pub use panic_guard::PanicGuard;
pub use parallel::{ParallelExecutor, ParallelHandle, ParallelScope};
pub use runner::TestRunner;
pub use suite::{RunReport, Suite};
