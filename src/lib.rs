//! cest - a minimal unit-testing runtime
//!
//! Declare named tests as plain statements in `main`, assert with
//! expect-style matchers, run tests sequentially or on their own threads,
//! and turn the result into the process exit status.
//!
//! ## Features
//!
//! - Matchers: `to_be`, `to_be_close_to`, `to_pass`, `to_pass_with`, `to_throw`,
//!   each negatable with `not()`
//! - Failures carry the assertion site plus expected/actual renderings
//! - Errors and panics inside a test are caught at the test boundary
//! - Parallel tests with join-on-drop handles or a scoped batch join
//! - Reports from concurrent tests never interleave
//!
//! ## Usage
//!
//! ```no_run
//! use cest::{expect, Suite, SuiteConfig};
//! use std::process::ExitCode;
//!
//! fn is_even(value: &i32) -> bool {
//!     value % 2 == 0
//! }
//!
//! fn main() -> ExitCode {
//!     let suite = Suite::new(&SuiteConfig::default());
//!
//!     suite.test("adds", || expect(&(1 + 2)).to_be(3));
//!     suite.test("even", || expect(&4).to_pass(is_even));
//!
//!     let slow = suite.test_parallel("slow", || {
//!         expect(&0.1_f64).not().to_be_close_to(0.2)
//!     });
//!     drop(slow);
//!
//!     suite.finish().exit_code()
//! }
//! ```

pub mod config;
pub mod executor;
pub mod matcher;
pub mod models;
pub mod output;
pub mod utils;

pub use config::{ColorMode, SuiteConfig};
pub use executor::{ParallelHandle, ParallelScope, RunReport, Suite};
pub use matcher::{expect, Expectation, MatchResult};
pub use models::{AssertionFailure, Fault, ProcessOutcome, SourceLocation, TestOutcome, TestStatus};
