//! Person record
//!
//! Plain value type. Equality compares every attribute; there is no identity
//! beyond the attribute values.

use std::fmt;

/// A person with name, surname and age
#[derive(Debug, Clone, Default)]
pub struct Person {
    name: String,
    surname: String,
    age: u32,
}

impl Person {
    /// Create person from all three attributes
    #[inline]
    #[must_use]
    pub fn new(name: String, surname: String, age: u32) -> Self {
        Self { name, surname, age }
    }

    /// Create person with age defaulted to zero
    #[inline]
    #[must_use]
    pub fn with_name(name: String, surname: String) -> Self {
        Self::new(name, surname, 0)
    }

    /// Given name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Family name
    #[inline]
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Age in years
    #[inline]
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Replace the age
    #[inline]
    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.surname == other.surname && self.age == other.age
    }
}

impl Eq for Person {}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.surname, self.age)
    }
}
