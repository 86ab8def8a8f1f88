//! `to_be`: equality matcher

use std::fmt::Debug;

use super::{render, Expectation, MatchResult};

impl<T: ?Sized + Debug> Expectation<'_, T> {
    /// Succeeds when the value equals `expected` (or differs, when negated)
    ///
    /// On failure both sides are rendered with `Debug`.
    pub fn to_be<U>(self, expected: U) -> MatchResult
    where
        T: PartialEq<U>,
        U: Debug,
    {
        let equal = *self.value == expected;
        self.check(equal, || {
            self.failure(self.render_actual())
                .with_expected(render(&expected))
        })
    }
}
