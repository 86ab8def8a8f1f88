//! Showcase suite
//!
//! Exercises every matcher and every way a test can fail. Several cases fail
//! on purpose, so the demo exits with a failure status.

use std::num::ParseIntError;
use std::panic;
use std::thread;
use std::time::Duration;
use thiserror::Error;

use cest::{expect, MatchResult, Suite};

#[derive(Error, Debug)]
#[error("out of range: {0}")]
struct OutOfRange(&'static str);

/// Panic payload with no description
struct Opaque;

fn is_even(value: &i32) -> bool {
    value % 2 == 0
}

fn is_multiple_of(value: &i32, divisor: i32) -> bool {
    value % divisor == 0
}

fn parse(text: &str) -> Result<i32, ParseIntError> {
    text.parse()
}

fn should_pass() -> MatchResult {
    expect(&3).to_be(3)
}

fn should_fail() -> MatchResult {
    expect(&2).to_be(4)
}

fn should_raise() -> anyhow::Result<()> {
    Err(OutOfRange("unlucky").into())
}

fn should_raise_opaque() -> anyhow::Result<()> {
    panic::panic_any(Opaque)
}

fn should_pass_own_condition() -> MatchResult {
    expect(&2).to_pass(is_even)
}

fn should_fail_own_condition() -> MatchResult {
    expect(&3).to_pass(is_even)
}

fn should_pass_binary_condition() -> MatchResult {
    expect(&12).to_pass_with(is_multiple_of, 4)
}

fn should_differ() -> MatchResult {
    expect(&"cest").not().to_be("jest")
}

fn should_fail_negated() -> MatchResult {
    expect(&7).not().to_be(7)
}

fn should_be_close() -> anyhow::Result<()> {
    expect(&4.999_999_9_f64).to_be_close_to(5)?;
    expect(&4.9_f64).not().to_be_close_to(5)?;
    Ok(())
}

fn should_throw_parse_error() -> MatchResult {
    expect(&|| parse("twelve")).to_throw::<ParseIntError>()
}

fn should_fail_wrong_error_kind() -> MatchResult {
    let thunk = || -> Result<(), OutOfRange> { Err(OutOfRange("wrong kind")) };
    expect(&thunk).to_throw::<ParseIntError>()
}

fn should_fail_nothing_thrown() -> MatchResult {
    expect(&|| parse("12")).to_throw::<ParseIntError>()
}

fn should_take_a_while() -> MatchResult {
    thread::sleep(Duration::from_millis(25));
    expect(&(1..=10).sum::<i32>()).to_be(55)
}

/// Declare every showcase test on the calling thread
pub fn run_sequential(suite: &Suite) {
    suite.test("should pass", should_pass);
    suite.test("should fail", should_fail);
    suite.test("should raise", should_raise);
    suite.test("should raise opaque payload", should_raise_opaque);
    suite.test("should pass own condition", should_pass_own_condition);
    suite.test("should fail own condition", should_fail_own_condition);
    suite.test("should pass binary condition", should_pass_binary_condition);
    suite.test("should differ", should_differ);
    suite.test("should fail negated", should_fail_negated);
    suite.test("should be close", should_be_close);
    suite.test("should throw parse error", should_throw_parse_error);
    suite.test("should fail wrong error kind", should_fail_wrong_error_kind);
    suite.test("should fail nothing thrown", should_fail_nothing_thrown);
    suite.test("should take a while", should_take_a_while);
}

/// Declare every showcase test on its own thread
pub fn run_parallel(suite: &Suite) {
    let handles = [
        suite.test_parallel("should pass", should_pass),
        suite.test_parallel("should fail", should_fail),
        suite.test_parallel("should raise", should_raise),
        suite.test_parallel("should raise opaque payload", should_raise_opaque),
        suite.test_parallel("should pass own condition", should_pass_own_condition),
        suite.test_parallel("should fail own condition", should_fail_own_condition),
        suite.test_parallel("should pass binary condition", should_pass_binary_condition),
        suite.test_parallel("should differ", should_differ),
        suite.test_parallel("should fail negated", should_fail_negated),
        suite.test_parallel("should be close", should_be_close),
        suite.test_parallel("should throw parse error", should_throw_parse_error),
        suite.test_parallel("should fail wrong error kind", should_fail_wrong_error_kind),
        suite.test_parallel("should fail nothing thrown", should_fail_nothing_thrown),
        suite.test_parallel("should take a while", should_take_a_while),
    ];

    let primes = vec![2, 3, 5, 7, 11];
    suite.scope(|scope| {
        scope.test("primes are sorted", || {
            expect(&primes).to_pass(|p| p.windows(2).all(|w| w[0] < w[1]))
        });
        scope.test("primes sum", || expect(&primes.iter().sum::<i32>()).to_be(28));
    });

    drop(handles);
}
