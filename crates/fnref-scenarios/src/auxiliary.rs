//! Other callable shapes: comparator, shape mismatch, consumer, runnable
//! and the contract's provided operation.

use crate::construction::ExplicitSummator;
use fnref_core::{expect_eq, Comparator, ScenarioResult, Summator};
use parking_lot::Mutex;
use std::cmp::Ordering;

/// Comparator that treats every pair as equal
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysEqual;

impl Comparator<str> for AlwaysEqual {
    fn compare(&self, _a: &str, _b: &str) -> Ordering {
        Ordering::Equal
    }
}

/// Lines written by consumers and runnables
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Mutex<Vec<String>>,
}

impl Transcript {
    /// Create empty transcript
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Print `line` and keep a copy
    pub fn record(&self, line: &str) {
        tracing::info!("{}", line);
        self.lines.lock().push(line.to_owned());
    }

    /// Everything recorded so far
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

/// Stable sort under [`AlwaysEqual`] keeps input order
pub fn comparator() -> ScenarioResult {
    let comparator = AlwaysEqual;
    let mut words = vec!["b".to_owned(), "a".to_owned(), "c".to_owned()];
    words.sort_by(|a, b| comparator.compare(a.as_str(), b.as_str()));
    expect_eq(words, ["b", "a", "c"].map(String::from).to_vec())?;

    let by_length = |a: &str, b: &str| a.len().cmp(&b.len());
    expect_eq(by_length.compare("aa", "b"), Ordering::Greater)?;
    Ok(())
}

/// `(i32, i32) -> String` has the argument list of a summator but not its result
pub fn shape_mismatch() -> ScenarioResult {
    let fun = |_left: i32, _right: i32| -> String { "left + right".to_owned() };
    expect_eq(fun(1, 2), "left + right")?;

    let sum = |left: i32, right: i32| left + right;
    expect_eq(sum.sum(1, 2), 3)?;
    Ok(())
}

/// `&str -> ()` consumer and `() -> ()` runnable
pub fn consumer_and_runnable() -> ScenarioResult {
    let transcript = Transcript::new();

    let printer = |line: &str| transcript.record(line);
    printer("hello from lambda");

    let say_hello = || transcript.record("Hello from runnable!");
    say_hello();
    say_hello();

    expect_eq(
        transcript.lines(),
        vec![
            "hello from lambda".to_owned(),
            "Hello from runnable!".to_owned(),
            "Hello from runnable!".to_owned(),
        ],
    )?;
    Ok(())
}

/// Provided `another()` is zero for every implementor
pub fn default_operation() -> ScenarioResult {
    let add = |l: i64, r: i64| l + r;
    expect_eq(Summator::<i64>::another(&add), 0)?;
    expect_eq(Summator::<String>::another(&ExplicitSummator), 0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios_pass() {
        assert!(comparator().is_ok());
        assert!(shape_mismatch().is_ok());
        assert!(consumer_and_runnable().is_ok());
        assert!(default_operation().is_ok());
    }

    #[test]
    fn test_always_equal() {
        assert_eq!(AlwaysEqual.compare("z", "a"), Ordering::Equal);
    }

    #[test]
    fn test_transcript_starts_empty() {
        assert!(Transcript::new().lines().is_empty());
    }
}
