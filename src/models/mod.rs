//! Data models for test execution
//!
//! Source locations, the failure taxonomy, and per-test and per-run outcomes.

mod failure;
mod location;
mod outcome;

pub(crate) use failure::describe_panic;
pub use failure::{AssertionFailure, Fault};
pub use location::SourceLocation;
pub use outcome::{ProcessOutcome, RunSummary, TestOutcome, TestStatus};
