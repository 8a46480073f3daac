//! Existing functions and methods standing in for a [`Summator`]
//!
//! Covers a free function, a method bound to the current instance, to an
//! external instance, to a fresh instance, and to one built by the
//! [`Joiner::with_delimiter`] factory helper.

use fnref_core::{expect_eq, string_sum, Joiner, ScenarioResult, Summator};
use std::sync::Arc;

fn ab(summator: &impl Summator<String>) -> String {
    summator.sum("a".to_owned(), "b".to_owned())
}

/// Free function used directly as a summator
pub fn static_function() -> ScenarioResult {
    let str_summator = string_sum;
    expect_eq(str_summator.sum("a".to_owned(), "b".to_owned()), "ab")?;
    expect_eq(str_summator.sum("b".to_owned(), "b".to_owned()), "bb")?;
    expect_eq(str_summator.sum("c".to_owned(), "b".to_owned()), "cb")?;
    Ok(())
}

/// Methods bound to this, external, fresh and factory-built joiners
pub fn instance_methods() -> ScenarioResult {
    let this = Joiner::new();
    expect_eq(this.join("a".to_owned(), "b".to_owned()), "a.b")?;

    let external = Arc::new(Joiner::new());
    external.set_delimiter("~");
    expect_eq(external.join("a".to_owned(), "b".to_owned()), "a~b")?;

    let this_summator = this.bound_to_self();
    expect_eq(ab(&this_summator), "a.b")?;

    let external_summator = external.bind();
    expect_eq(ab(&external_summator), "a~b")?;

    let on_new_instance = Joiner::new().into_summator();
    expect_eq(ab(&on_new_instance), "a.b")?;

    let on_factory_instance = Joiner::with_delimiter("--").into_summator();
    expect_eq(ab(&on_factory_instance), "a--b")?;
    Ok(())
}

/// Bound callables read the delimiter at call time
pub fn live_delimiter() -> ScenarioResult {
    let this = Joiner::new();
    let other = Arc::new(Joiner::new());

    let this_summator = this.bound_to_self();
    let other_summator = other.bind();
    expect_eq(ab(&this_summator), "a.b")?;

    this.set_delimiter("~");
    expect_eq(ab(&this_summator), "a~b")?;
    expect_eq(ab(&this_summator), "a~b")?;
    expect_eq(ab(&other_summator), "a.b")?;

    other.set_delimiter("--");
    expect_eq(ab(&other_summator), "a--b")?;
    expect_eq(ab(&this_summator), "a~b")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_function_passes() {
        assert!(static_function().is_ok());
    }

    #[test]
    fn test_instance_methods_pass() {
        assert!(instance_methods().is_ok());
    }

    #[test]
    fn test_live_delimiter_passes() {
        assert!(live_delimiter().is_ok());
    }

    #[test]
    fn test_delimiter_change_after_drop_of_owner_handle() {
        let joiner = Arc::new(Joiner::with_delimiter("+"));
        let bound = joiner.bind();
        joiner.set_delimiter("=");
        drop(joiner);
        assert_eq!(ab(&bound), "a=b");
    }
}
