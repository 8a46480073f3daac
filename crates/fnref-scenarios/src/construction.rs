//! Four equivalent ways to build a [`Summator`]
//!
//! 1. explicit implementation of the contract
//! 2. block-body closure with explicit parameter types
//! 3. block-body closure with inferred parameter types
//! 4. expression closure

use fnref_core::{expect_eq, ScenarioResult, Summand, Summator};

/// Explicit implementation summing any [`Summand`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitSummator;

impl<T: Summand> Summator<T> for ExplicitSummator {
    fn sum(&self, a: T, b: T) -> T {
        a.plus(b)
    }
}

/// A labelled summing form
pub struct SummingForm<T> {
    /// How the form is written
    pub label: &'static str,
    /// The callable itself
    pub summator: Box<dyn Summator<T>>,
}

impl<T> SummingForm<T> {
    /// Box `summator` under `label`
    pub fn new(label: &'static str, summator: impl Summator<T> + 'static) -> Self {
        Self {
            label,
            summator: Box::new(summator),
        }
    }

    /// Invoke the form
    pub fn sum(&self, a: T, b: T) -> T {
        self.summator.sum(a, b)
    }
}

impl<T> std::fmt::Debug for SummingForm<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummingForm")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Gives a closure its parameter types from the contract's operand type
///
/// `summator::<i32, _>(|l, r| l + r)` plays the role of assigning the closure
/// to a `Summator<i32>` binding: the closure's own parameters stay unannotated.
#[inline]
pub fn summator<T, F>(f: F) -> F
where
    F: Fn(T, T) -> T,
{
    f
}

/// All four forms for operand type `T`
#[allow(clippy::needless_return, clippy::let_and_return)]
#[must_use]
pub fn summing_forms<T: Summand + 'static>() -> Vec<SummingForm<T>> {
    vec![
        SummingForm::new("explicit implementation", ExplicitSummator),
        SummingForm::new("typed block closure", |left: T, right: T| -> T {
            return left.plus(right);
        }),
        SummingForm::new(
            "inferred block closure",
            summator::<T, _>(|l, r| {
                let total = l.plus(r);
                total
            }),
        ),
        SummingForm::new("expression closure", summator::<T, _>(|l, r| l.plus(r))),
    ]
}

/// `sum(1, 2) == 3` for each form written out in place
#[allow(clippy::needless_return, clippy::let_and_return)]
pub fn numeric_forms() -> ScenarioResult {
    struct AnonSum;

    impl Summator<i32> for AnonSum {
        fn sum(&self, a: i32, b: i32) -> i32 {
            a + b
        }
    }

    expect_eq(AnonSum.sum(1, 2), 3)?;

    let sum = |left: i32, right: i32| -> i32 {
        return left + right;
    };
    expect_eq(sum.sum(1, 2), 3)?;

    let sum2 = summator::<i32, _>(|l, r| {
        let total = l + r;
        total
    });
    expect_eq(sum2.sum(1, 2), 3)?;

    let sum3 = summator::<i32, _>(|l, r| l + r);
    let result = sum3.sum(1, 2);
    expect_eq(result, 3)?;

    for form in summing_forms::<i32>() {
        tracing::trace!(form = form.label, "numeric form");
        expect_eq(form.sum(1, 2), 3)?;
    }
    Ok(())
}

/// `sum("a", "b") == "ab"` for each form
pub fn text_forms() -> ScenarioResult {
    for form in summing_forms::<String>() {
        tracing::trace!(form = form.label, "text form");
        expect_eq(form.sum("a".to_owned(), "b".to_owned()), "ab")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_numeric_forms_pass() {
        assert!(numeric_forms().is_ok());
    }

    #[test]
    fn test_text_forms_pass() {
        assert!(text_forms().is_ok());
    }

    #[test]
    fn test_four_distinct_forms() {
        let labels: HashSet<_> = summing_forms::<u8>().iter().map(|f| f.label).collect();
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn test_forms_work_for_floats() {
        for form in summing_forms::<f64>() {
            assert!((form.sum(1.5, 2.5) - 4.0).abs() < f64::EPSILON, "{}", form.label);
        }
    }

    #[test]
    fn test_same_inputs_same_output() {
        for form in summing_forms::<String>() {
            let first = form.sum("x".to_owned(), "y".to_owned());
            let second = form.sum("x".to_owned(), "y".to_owned());
            assert_eq!(first, second);
        }
    }
}
