//! Unbound method paths as single-argument transformations
//!
//! `str::len` takes its receiver as the first argument, so the bare path
//! satisfies `Fn(&str) -> usize` just like a closure does.

use fnref_core::{expect_eq, text_length, ScenarioResult};

/// A labelled text-length form
pub struct LengthForm {
    /// How the form is written
    pub label: &'static str,
    length: Box<dyn Fn(&str) -> usize>,
}

impl LengthForm {
    /// Box `length` under `label`
    pub fn new(label: &'static str, length: impl Fn(&str) -> usize + 'static) -> Self {
        Self {
            label,
            length: Box::new(length),
        }
    }

    /// Invoke the form
    #[must_use]
    pub fn apply(&self, text: &str) -> usize {
        (self.length)(text)
    }
}

impl std::fmt::Debug for LengthForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LengthForm")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// The four ways of writing `text -> length`
#[allow(clippy::redundant_closure, clippy::redundant_closure_for_method_calls)]
#[must_use]
pub fn length_forms() -> Vec<LengthForm> {
    vec![
        LengthForm::new("closure calling method", |s: &str| s.len()),
        LengthForm::new("closure calling helper", |s: &str| text_length(s)),
        LengthForm::new("helper function item", text_length),
        LengthForm::new("unbound method path", str::len),
    ]
}

/// `"1234"` is 4 long, `"123"` is 3 long, and every form agrees
pub fn length_forms_agree() -> ScenarioResult {
    let forms = length_forms();
    for form in &forms {
        tracing::trace!(form = form.label, "length form");
        expect_eq(form.apply("1234"), 4)?;
        expect_eq(form.apply("123"), 3)?;
    }
    for input in ["", "hello", "1234"] {
        let expected = forms[0].apply(input);
        for form in &forms[1..] {
            expect_eq(form.apply(input), expected)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_forms_agree_passes() {
        assert!(length_forms_agree().is_ok());
    }

    #[test]
    fn test_every_form_measures_bytes() {
        for form in length_forms() {
            assert_eq!(form.apply("héllo"), 6, "{}", form.label);
        }
    }
}
