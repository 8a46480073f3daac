//! Testing utilities for fnref workspace
//! 
//! Shared fixtures and strategies.

#![allow(missing_docs)]

use fnref_core::{Joiner, Person, Summator};
use proptest::prelude::*;
use std::sync::Arc;

pub fn ivan_ivanov(age: u32) -> Person {
    Person::new("Ivan".to_owned(), "Ivanov".to_owned(), age)
}

pub fn shared_joiner(delimiter: &str) -> Arc<Joiner> {
    Arc::new(Joiner::with_delimiter(delimiter))
}

/// `summator.sum("a", "b")`
pub fn sum_ab(summator: &impl Summator<String>) -> String {
    summator.sum("a".to_owned(), "b".to_owned())
}

/// Short printable strings, delimiters included
pub fn short_text() -> impl Strategy<Value = String> {
    "[ -~]{0,12}"
}

/// Ages a person can plausibly have
pub fn age() -> impl Strategy<Value = u32> {
    0..130u32
}
