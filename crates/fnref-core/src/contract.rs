//! Single-operation callable contracts
//!
//! Each contract exposes exactly one required operation and carries a blanket
//! implementation for every closure or function item of the matching shape, so
//! that an explicit implementation and a closure are interchangeable wherever
//! the contract is expected.

use crate::person::Person;
use std::cmp::Ordering;

/// Combines two values of the same type into one
///
/// # Example
/// ```rust
/// use fnref_core::Summator;
///
/// let add = |l: i32, r: i32| l + r;
/// assert_eq!(add.sum(1, 2), 3);
/// ```
pub trait Summator<T> {
    /// Combine `a` and `b`
    fn sum(&self, a: T, b: T) -> T;

    /// Provided operation, never overridden by implementors
    #[inline]
    fn another(&self) -> i32 {
        0
    }
}

impl<T, F> Summator<T> for F
where
    F: Fn(T, T) -> T,
{
    #[inline]
    fn sum(&self, a: T, b: T) -> T {
        self(a, b)
    }
}

/// Operand that knows how to be summed with another of its kind
///
/// Numbers add, text concatenates.
pub trait Summand: Sized {
    /// Sum `self` and `rhs`
    #[must_use]
    fn plus(self, rhs: Self) -> Self;
}

macro_rules! numeric_summand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Summand for $ty {
                #[inline]
                fn plus(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

numeric_summand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Summand for String {
    #[inline]
    fn plus(mut self, rhs: Self) -> Self {
        self.push_str(&rhs);
        self
    }
}

/// Builds a [`Person`] from name, surname and age
pub trait PersonFactory {
    /// Create a new person
    fn create(&self, name: String, surname: String, age: u32) -> Person;
}

impl<F> PersonFactory for F
where
    F: Fn(String, String, u32) -> Person,
{
    #[inline]
    fn create(&self, name: String, surname: String, age: u32) -> Person {
        self(name, surname, age)
    }
}

/// Orders two values
pub trait Comparator<T: ?Sized> {
    /// Compare `a` against `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Concat;

    impl Summator<String> for Concat {
        fn sum(&self, a: String, b: String) -> String {
            a + &b
        }
    }

    fn apply<S: Summator<T>, T>(summator: &S, a: T, b: T) -> T {
        summator.sum(a, b)
    }

    #[test]
    fn test_closure_satisfies_summator() {
        let add = |l: i64, r: i64| l + r;
        assert_eq!(apply(&add, 40, 2), 42);
    }

    #[test]
    fn test_explicit_impl_satisfies_summator() {
        assert_eq!(apply(&Concat, "a".to_owned(), "b".to_owned()), "ab");
    }

    #[test]
    fn test_summator_behind_trait_object() {
        let forms: Vec<Box<dyn Summator<String>>> =
            vec![Box::new(Concat), Box::new(|l: String, r: String| l + &r)];
        for form in &forms {
            assert_eq!(form.sum("x".to_owned(), "y".to_owned()), "xy");
        }
    }

    #[test]
    fn test_another_defaults_to_zero() {
        let add = |l: u8, r: u8| l + r;
        assert_eq!(Summator::<String>::another(&Concat), 0);
        assert_eq!(Summator::<u8>::another(&add), 0);
    }

    #[test]
    fn test_summand_numbers_add() {
        assert_eq!(1_i32.plus(2), 3);
        assert_eq!(7_u64.plus(0), 7);
        assert!((0.5_f64.plus(0.25) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summand_text_concatenates() {
        assert_eq!("a".to_owned().plus("b".to_owned()), "ab");
        assert_eq!(String::new().plus(String::new()), "");
    }

    #[test]
    fn test_closure_satisfies_comparator() {
        let by_len = |a: &str, b: &str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare("ab", "a"), Ordering::Greater);
    }

    #[test]
    fn test_function_item_satisfies_factory() {
        let factory = Person::new;
        let person = factory.create("Ivan".to_owned(), "Ivanov".to_owned(), 44);
        assert_eq!(person.age(), 44);
    }
}
