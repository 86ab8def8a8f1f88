//! `to_pass`: user-supplied predicates

use std::fmt::Debug;

use super::{Expectation, MatchResult};

impl<T: ?Sized + Debug> Expectation<'_, T> {
    /// Succeeds when `predicate(value)` holds (or does not, when negated)
    ///
    /// A predicate has no canonical expected value, so failures only carry
    /// the rendering of the value under test.
    pub fn to_pass<F>(self, predicate: F) -> MatchResult
    where
        F: FnOnce(&T) -> bool,
    {
        let passed = predicate(self.value);
        self.check(passed, || self.failure(self.render_actual()))
    }

    /// Like [`to_pass`](Self::to_pass) for a binary predicate applied as
    /// `predicate(value, param)`
    pub fn to_pass_with<P, F>(self, predicate: F, param: P) -> MatchResult
    where
        F: FnOnce(&T, P) -> bool,
    {
        let passed = predicate(self.value, param);
        self.check(passed, || self.failure(self.render_actual()))
    }
}

#[cfg(test)]
mod tests {
    use crate::matcher::expect;

    fn is_even(value: &i32) -> bool {
        value % 2 == 0
    }

    fn is_multiple_of(value: &i32, divisor: i32) -> bool {
        value % divisor == 0
    }

    #[test]
    fn test_predicate_holds() {
        assert!(expect(&2).to_pass(is_even).is_ok());
        assert!(expect(&2).not().to_pass(is_even).is_err());
    }

    #[test]
    fn test_predicate_failure_has_no_expected_side() {
        let failure = expect(&3).to_pass(is_even).unwrap_err();
        assert_eq!(failure.expected, None);
        assert_eq!(failure.actual, "3");
        assert!(!failure.negated);
    }

    #[test]
    fn test_binary_predicate() {
        assert!(expect(&12).to_pass_with(is_multiple_of, 4).is_ok());
        assert!(expect(&12).to_pass_with(is_multiple_of, 5).is_err());
        assert!(expect(&12).not().to_pass_with(is_multiple_of, 5).is_ok());
    }

    #[test]
    fn test_closure_predicate() {
        let name = String::from("parallel runner");
        assert!(expect(&name).to_pass(|n| n.contains("runner")).is_ok());
        assert!(expect(name.as_str()).to_pass(|n| n.is_empty()).is_err());
    }
}
