//! fnref Core
//!
//! Single-operation callable contracts and the values they operate on.
//!
//! # Overview
//!
//! - **Summator**: combine two values of one type
//! - **PersonFactory**: build a [`Person`] from name, surname and age
//! - **Comparator**: order two values
//! - **Joiner**: instance whose mutable delimiter is observed by bound callables
//! - **expect_eq / expect_true**: equality helpers returning [`ScenarioError`]
//!
//! Every contract is satisfied both by an explicit implementation and by any
//! closure or function item of matching shape.
//!
//! # Example
//!
//! ```rust
//! use fnref_core::{Joiner, Person, PersonFactory, Summator};
//!
//! let joiner = Joiner::new();
//! let bound = joiner.bound_to_self();
//! joiner.set_delimiter("~");
//! assert_eq!(bound.sum("a".to_owned(), "b".to_owned()), "a~b");
//!
//! let factory = Person::new;
//! let person = factory.create("Ivan".to_owned(), "Ivanov".to_owned(), 44);
//! assert_eq!(person.age(), 44);
//! ```

#![warn(missing_docs)]

pub mod contract;
pub mod error;
pub mod joiner;
pub mod person;
pub mod text;

// Re-exports
pub use contract::{Comparator, PersonFactory, Summand, Summator};
pub use error::{expect_eq, expect_true, ScenarioError, ScenarioResult};
pub use joiner::{Joiner, DEFAULT_DELIMITER};
pub use person::Person;
pub use text::{string_sum, text_length};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for callable demonstrations
    pub use crate::{
        expect_eq, expect_true, Comparator, Joiner, Person, PersonFactory, ScenarioError,
        ScenarioResult, Summand, Summator,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
