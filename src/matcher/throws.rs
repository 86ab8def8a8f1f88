//! `to_throw`: intercepting errors raised by a thunk
//!
//! The wrapped value must be a zero-argument callable returning `Result`.
//! It is invoked inside a panic boundary and the result is classified into
//! exactly one [`ThrowOutcome`]. An error "of kind `K`" is either an `Err`
//! whose error downcasts to `K`, or a panic whose payload is a `K`
//! (raised with [`std::panic::panic_any`]).

use std::any::type_name;
use std::fmt::{Debug, Display};
use std::panic::{self, AssertUnwindSafe};

use super::{Expectation, MatchResult};
use crate::executor::PanicGuard;
use crate::models::{describe_panic, AssertionFailure};

/// What happened when a thunk was invoked
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThrowOutcome {
    /// Raised the expected kind; carries its description
    Matched(String),
    /// Completed without raising
    Nothing,
    /// Raised something else that has a description
    Other(String),
    /// Panicked with an opaque payload
    Unrecognized,
}

impl ThrowOutcome {
    /// Invoke `thunk` and classify what it raised against kind `K`
    pub fn classify<K, F, R, E>(thunk: &F) -> Self
    where
        K: Display + Debug + Send + Sync + 'static,
        F: Fn() -> Result<R, E> + ?Sized,
        E: Into<anyhow::Error>,
    {
        let result = {
            let _guard = PanicGuard::enter();
            panic::catch_unwind(AssertUnwindSafe(thunk))
        };

        match result {
            Ok(Ok(_)) => ThrowOutcome::Nothing,
            Ok(Err(error)) => {
                let error: anyhow::Error = error.into();
                if error.is::<K>() {
                    ThrowOutcome::Matched(format!("{error:#}"))
                } else {
                    ThrowOutcome::Other(format!("{error:#}"))
                }
            }
            Err(payload) => {
                if let Some(raised) = payload.downcast_ref::<K>() {
                    ThrowOutcome::Matched(raised.to_string())
                } else if let Some(description) = describe_panic(payload.as_ref()) {
                    ThrowOutcome::Other(description)
                } else {
                    ThrowOutcome::Unrecognized
                }
            }
        }
    }
}

/// Last path segment of a type name, keeping generic arguments intact
fn short_type_name<K: ?Sized>() -> &'static str {
    let full = type_name::<K>();
    let path_end = full.find('<').unwrap_or(full.len());
    match full[..path_end].rfind("::") {
        Some(index) => &full[index + 2..],
        None => full,
    }
}

impl<F, R, E> Expectation<'_, F>
where
    F: Fn() -> Result<R, E> + ?Sized,
    E: Into<anyhow::Error>,
{
    /// Succeeds when invoking the thunk raises an error of kind `K`
    ///
    /// Negated, it succeeds only when the thunk completes normally. Raising
    /// any other kind fails in both senses.
    pub fn to_throw<K>(self) -> MatchResult
    where
        K: Display + Debug + Send + Sync + 'static,
    {
        let kind = short_type_name::<K>();
        let expected = format!("throws {kind}");

        match ThrowOutcome::classify::<K, F, R, E>(self.value) {
            ThrowOutcome::Matched(description) => self.check(true, || {
                self.failure(format!("threw {kind}: {description}"))
                    .with_expected(expected)
            }),
            ThrowOutcome::Nothing => self.check(false, || {
                self.failure("nothing raised".to_string())
                    .with_expected(expected)
            }),
            ThrowOutcome::Other(description) => {
                Err(self.unexpected_fault(expected, description))
            }
            ThrowOutcome::Unrecognized => {
                Err(self.unexpected_fault(expected, "unrecognized fault".to_string()))
            }
        }
    }

    fn unexpected_fault(&self, expected: String, actual: String) -> AssertionFailure {
        let expected = if self.negated {
            "nothing raised".to_string()
        } else {
            expected
        };
        AssertionFailure::new(self.location, actual).with_expected(expected)
    }
}
