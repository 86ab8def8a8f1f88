//! Assertion matchers
//!
//! [`expect`] borrows the value under test and returns an [`Expectation`].
//! Every terminal matcher consumes the expectation and returns
//! `Result<(), AssertionFailure>`, so a failing check unwinds the test body
//! with `?` up to the runner boundary.
//!
//! ```ignore
//! expect(&total).to_be(42)?;
//! expect(&ratio).not().to_be_close_to(0.5)?;
//! expect(&parse).to_throw::<ParseIntError>()?;
//! ```
//!
//! All matchers share one rule: a matcher with positive condition `c`
//! succeeds iff `c != negated`.

mod approx;
mod equality;
mod predicate;
mod throws;

pub use approx::{ApproxFloat, DEFAULT_EPSILON};
pub use throws::ThrowOutcome;

use std::fmt::Debug;

use crate::models::{AssertionFailure, SourceLocation};

/// Result of a terminal matcher
pub type MatchResult = Result<(), AssertionFailure>;

/// Borrowed value under test plus its assertion site
///
/// Not `Clone`; each expectation is consumed by exactly one terminal matcher.
#[must_use = "an expectation does nothing until a matcher is called"]
pub struct Expectation<'a, T: ?Sized> {
    value: &'a T,
    location: SourceLocation,
    negated: bool,
}

/// Start an assertion on `value`, recording the caller's location
#[track_caller]
pub fn expect<T: ?Sized>(value: &T) -> Expectation<'_, T> {
    Expectation::new(value, SourceLocation::caller())
}

impl<'a, T: ?Sized> Expectation<'a, T> {
    pub fn new(value: &'a T, location: SourceLocation) -> Self {
        Self {
            value,
            location,
            negated: false,
        }
    }

    /// Flip the sense of the matcher that follows
    pub fn not(self) -> Self {
        Self {
            negated: !self.negated,
            ..self
        }
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Apply the shared negation rule to a positive-sense condition
    fn check(&self, condition: bool, failure: impl FnOnce() -> AssertionFailure) -> MatchResult {
        if condition != self.negated {
            Ok(())
        } else {
            Err(failure())
        }
    }

    fn failure(&self, actual: String) -> AssertionFailure {
        AssertionFailure::new(self.location, actual).negated(self.negated)
    }
}

impl<T: ?Sized + Debug> Expectation<'_, T> {
    fn render_actual(&self) -> String {
        render(self.value)
    }
}

/// Text rendering used for expected/actual values in reports
pub fn render<T: ?Sized + Debug>(value: &T) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_records_call_site() {
        let value = 1;
        let expectation = expect(&value);
        assert_eq!(expectation.location().line, line!() - 1);
        assert!(expectation.location().file.ends_with("mod.rs"));
        assert!(!expectation.is_negated());
    }

    #[test]
    fn test_not_is_involutive() {
        let value = 5;
        assert!(expect(&value).not().is_negated());
        assert!(!expect(&value).not().not().is_negated());

        assert!(expect(&value).not().not().to_be(5).is_ok());
        assert!(expect(&value).not().not().to_be(6).is_err());
        assert!(expect(&value).not().not().to_pass(|v| *v > 0).is_ok());
        assert!(expect(&value).not().not().to_be_close_to(5.0).is_ok());
        assert!(expect(&value)
            .not()
            .not()
            .to_pass_with(|v, d| v % d == 0, 5)
            .is_ok());
        assert!(expect(&value)
            .not()
            .not()
            .to_pass_with(|v, d| v % d == 0, 3)
            .is_err());
    }

    #[test]
    fn test_not_keeps_location() {
        let value = "x";
        let expectation = expect(value);
        let location = expectation.location();
        assert_eq!(expectation.not().location(), location);
    }

    #[test]
    fn test_render_uses_debug() {
        assert_eq!(render(&3), "3");
        assert_eq!(render("abc"), "\"abc\"");
        assert_eq!(render(&vec![1, 2]), "[1, 2]");
    }
}
