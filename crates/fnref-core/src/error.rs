//! Scenario failures and the equality helpers that raise them

use std::fmt::Debug;
use std::panic::Location;

/// Result alias for scenario bodies
pub type ScenarioResult = Result<(), ScenarioError>;

/// A failed expectation inside a scenario
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    /// Actual value differs from the expected one
    #[error("expected {expected}, got {actual} at {location}")]
    Mismatch {
        /// Debug rendering of the actual value
        actual: String,
        /// Debug rendering of the expected value
        expected: String,
        /// `file:line` of the failed check
        location: String,
    },

    /// A boolean condition did not hold
    #[error("condition violated: {what} at {location}")]
    Violated {
        /// Description of the condition
        what: String,
        /// `file:line` of the failed check
        location: String,
    },
}

impl ScenarioError {
    /// Create mismatch error
    pub fn mismatch(
        actual: impl Debug,
        expected: impl Debug,
        location: &Location<'_>,
    ) -> Self {
        Self::Mismatch {
            actual: format!("{actual:?}"),
            expected: format!("{expected:?}"),
            location: format!("{}:{}", location.file(), location.line()),
        }
    }

    /// Create violated-condition error
    pub fn violated(what: impl Into<String>, location: &Location<'_>) -> Self {
        Self::Violated {
            what: what.into(),
            location: format!("{}:{}", location.file(), location.line()),
        }
    }
}

/// Fail unless `actual == expected`
///
/// # Errors
/// [`ScenarioError::Mismatch`] naming both values and the caller location
#[track_caller]
pub fn expect_eq<A, E>(actual: A, expected: E) -> ScenarioResult
where
    A: PartialEq<E> + Debug,
    E: Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(ScenarioError::mismatch(actual, expected, Location::caller()))
    }
}

/// Fail unless `condition` holds
///
/// # Errors
/// [`ScenarioError::Violated`] carrying `what` and the caller location
#[track_caller]
pub fn expect_true(condition: bool, what: &str) -> ScenarioResult {
    if condition {
        Ok(())
    } else {
        Err(ScenarioError::violated(what, Location::caller()))
    }
}
