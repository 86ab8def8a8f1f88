//! Failure taxonomy for test bodies
//!
//! A test fails in one of three ways: an assertion that did not hold, any
//! other fault that carries a description, or an opaque panic payload.

use std::any::Any;
use std::fmt;
use thiserror::Error;

use super::SourceLocation;

/// Structured reason a matcher did not hold
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("assertion failed at {location}")]
pub struct AssertionFailure {
    /// Where the `expect` call was made
    pub location: SourceLocation,
    /// Rendering of the expected side, when the matcher has one
    pub expected: Option<String>,
    /// Rendering of the value under test
    pub actual: String,
    /// Whether the matcher ran in negated sense
    pub negated: bool,
}

impl AssertionFailure {
    pub fn new(location: SourceLocation, actual: impl Into<String>) -> Self {
        Self {
            location,
            expected: None,
            actual: actual.into(),
            negated: false,
        }
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn negated(mut self, negated: bool) -> Self {
        self.negated = negated;
        self
    }

    /// Label for the expected line of a report
    pub fn expected_label(&self) -> &'static str {
        if self.negated {
            "Expected NOT"
        } else {
            "Expected"
        }
    }
}

/// Why a test failed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fault {
    /// A matcher did not hold
    Assertion(AssertionFailure),
    /// Any other error or panic with a retrievable description
    Described(String),
    /// A panic whose payload carries no description
    Unknown,
}

impl Fault {
    /// Classify an error returned from a test body
    pub fn from_error(error: anyhow::Error) -> Self {
        match error.downcast::<AssertionFailure>() {
            Ok(failure) => Fault::Assertion(failure),
            Err(other) => Fault::Described(format!("{other:#}")),
        }
    }

    /// Classify a payload caught by `catch_unwind`
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<AssertionFailure>() {
            Ok(failure) => return Fault::Assertion(*failure),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<anyhow::Error>() {
            Ok(error) => return Fault::from_error(*error),
            Err(payload) => payload,
        };
        match describe_panic(payload.as_ref()) {
            Some(description) => Fault::Described(description),
            None => Fault::Unknown,
        }
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, Fault::Assertion(_))
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Assertion(failure) => write!(f, "{failure}"),
            Fault::Described(description) => write!(f, "{description}"),
            Fault::Unknown => write!(f, "unknown fault"),
        }
    }
}

/// Extract a description from a panic payload, if it has one
pub(crate) fn describe_panic(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        return Some((*message).to_string());
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return Some(message.clone());
    }
    if let Some(error) = payload.downcast_ref::<anyhow::Error>() {
        return Some(format!("{error:#}"));
    }
    payload
        .downcast_ref::<Box<dyn std::error::Error + Send + Sync>>()
        .map(|error| error.to_string())
}
