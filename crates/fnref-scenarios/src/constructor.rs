//! Constructor functions as factories
//!
//! `Person::new` matches [`PersonFactory`] and `Person::with_name` matches the
//! two-argument shape `Fn(String, String) -> Person`.

use fnref_core::{expect_eq, Person, PersonFactory, ScenarioResult};

struct ExplicitFactory;

impl PersonFactory for ExplicitFactory {
    fn create(&self, name: String, surname: String, age: u32) -> Person {
        Person::new(name, surname, age)
    }
}

fn ivan_ivanov(factory: &dyn PersonFactory, age: u32) -> Person {
    factory.create("Ivan".to_owned(), "Ivanov".to_owned(), age)
}

/// Builds a person through any two-argument constructor shape
pub fn build_pair<F>(factory: F, name: &str, surname: &str) -> Person
where
    F: Fn(String, String) -> Person,
{
    factory(name.to_owned(), surname.to_owned())
}

/// Explicit implementation, closure and `Person::new` all build equal people
#[allow(clippy::redundant_closure)]
pub fn three_argument() -> ScenarioResult {
    let person = Person::new("Ivan".to_owned(), "Ivanov".to_owned(), 44);

    let factory1 = ExplicitFactory;
    let factory2 =
        |name: String, surname: String, age: u32| Person::new(name, surname, age);
    let factory3 = Person::new;

    expect_eq(ivan_ivanov(&factory1, 44), person.clone())?;
    expect_eq(ivan_ivanov(&factory2, 44), person.clone())?;

    let another = factory3.create("Ivan".to_owned(), "Ivanov".to_owned(), 44);
    expect_eq(another, person)?;
    Ok(())
}

/// `Person::with_name` leaves the age at zero
pub fn two_argument() -> ScenarioResult {
    let zero = build_pair(Person::with_name, "Ivan", "Ivanov");
    expect_eq(zero.age(), 0)?;
    expect_eq(zero.name(), "Ivan")?;
    expect_eq(zero.surname(), "Ivanov")?;
    Ok(())
}
