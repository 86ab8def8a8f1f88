//! `to_be_close_to`: approximate equality for numeric values
//!
//! The tolerance is relative to the magnitude of the value under test:
//! `actual` is close to `expected` when they are equal or when
//! `|actual - expected| < epsilon * |actual|`. NaN is never close to anything.

use std::fmt::Debug;

use super::{render, Expectation, MatchResult};

/// Relative tolerance used by [`Expectation::to_be_close_to`]
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Values that can be compared as `f64`
pub trait ApproxFloat: Debug {
    fn as_f64(&self) -> f64;
}

macro_rules! impl_approx_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ApproxFloat for $ty {
                fn as_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_approx_float!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: ApproxFloat + ?Sized> ApproxFloat for &T {
    fn as_f64(&self) -> f64 {
        (**self).as_f64()
    }
}

/// Relative-epsilon comparison shared by the matcher and its tests
pub(crate) fn is_close(actual: f64, expected: f64, epsilon: f64) -> bool {
    actual == expected || (actual - expected).abs() < epsilon * actual.abs()
}

impl<T: ?Sized + ApproxFloat> Expectation<'_, T> {
    /// Approximate equality with [`DEFAULT_EPSILON`]
    pub fn to_be_close_to<U: ApproxFloat>(self, expected: U) -> MatchResult {
        self.to_be_close_to_within(expected, DEFAULT_EPSILON)
    }

    /// Approximate equality with a caller-supplied relative epsilon
    pub fn to_be_close_to_within<U: ApproxFloat>(self, expected: U, epsilon: f64) -> MatchResult {
        let close = is_close(self.value.as_f64(), expected.as_f64(), epsilon);
        self.check(close, || {
            self.failure(render(self.value))
                .with_expected(render(&expected))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::expect;

    #[test]
    fn test_reflexive() {
        for x in [0.0_f64, -1.5, 1e-12, 3.25e9, f64::MAX] {
            assert!(expect(&x).to_be_close_to(x).is_ok(), "{x} should be close to itself");
        }
    }

    #[test]
    fn test_default_tolerance() {
        let near = 4.999_999_9_f64;
        assert!(expect(&near).to_be_close_to(5).is_ok());

        let far = 4.9_f64;
        let failure = expect(&far).to_be_close_to(5).unwrap_err();
        assert_eq!(failure.expected.as_deref(), Some("5"));
        assert_eq!(failure.actual, "4.9");
    }

    #[test]
    fn test_negated() {
        let far = 4.9_f64;
        assert!(expect(&far).not().to_be_close_to(5.0).is_ok());

        let near = 4.999_999_9_f64;
        let failure = expect(&near).not().to_be_close_to(5.0).unwrap_err();
        assert!(failure.negated);
    }

    #[test]
    fn test_custom_epsilon() {
        let value = 4.9_f32;
        assert!(expect(&value).to_be_close_to_within(5.0, 0.05).is_ok());
        assert!(expect(&value).to_be_close_to_within(5.0, 0.01).is_err());
    }

    #[test]
    fn test_tolerance_is_relative_to_actual() {
        assert!(is_close(1000.0, 1000.05, DEFAULT_EPSILON));
        assert!(!is_close(0.001, 0.001_05, DEFAULT_EPSILON));
        assert!(!is_close(0.0, 1e-9, DEFAULT_EPSILON));
    }

    #[test]
    fn test_nan_never_close() {
        let nan = f64::NAN;
        assert!(expect(&nan).to_be_close_to(f64::NAN).is_err());
        assert!(expect(&nan).not().to_be_close_to(0.0).is_ok());
    }

    #[test]
    fn test_integer_values() {
        let count = 10_u32;
        assert!(expect(&count).to_be_close_to(10.000_01).is_ok());
    }
}
