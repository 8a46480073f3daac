use fnref_core::{string_sum, text_length, Joiner, Person, PersonFactory, Summator};
use fnref_scenarios::construction::summing_forms;
use fnref_scenarios::constructor::build_pair;
use fnref_scenarios::unbound::length_forms;
use fnref_test_utils::{age, shared_joiner, short_text, sum_ab};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_numeric_forms_agree(a in -1_000_000i32..1_000_000, b in -1_000_000i32..1_000_000) {
        for form in summing_forms::<i32>() {
            prop_assert_eq!(form.sum(a, b), a + b, "{}", form.label);
        }
    }

    #[test]
    fn prop_text_forms_concatenate(a in short_text(), b in short_text()) {
        let expected = format!("{a}{b}");
        for form in summing_forms::<String>() {
            prop_assert_eq!(form.sum(a.clone(), b.clone()), expected.clone());
        }
        prop_assert_eq!(string_sum(a, b), expected);
    }

    #[test]
    fn prop_length_forms_agree(text in any::<String>()) {
        for form in length_forms() {
            prop_assert_eq!(form.apply(&text), text_length(&text), "{}", form.label);
        }
    }

    #[test]
    fn prop_bound_summator_tracks_delimiter(first in short_text(), second in short_text()) {
        let joiner = shared_joiner(&first);
        let bound = joiner.bind();
        prop_assert_eq!(sum_ab(&bound), format!("a{first}b"));
        joiner.set_delimiter(second.clone());
        prop_assert_eq!(sum_ab(&bound), format!("a{second}b"));
    }

    #[test]
    fn prop_other_instances_unaffected(delimiter in short_text()) {
        let this = Joiner::new();
        let other = Joiner::new();
        let bound_other = other.bound_to_self();
        this.set_delimiter(delimiter);
        prop_assert_eq!(sum_ab(&bound_other), "a.b");
    }

    #[test]
    fn prop_factory_agrees_with_constructor(
        name in short_text(),
        surname in short_text(),
        years in age(),
    ) {
        let factory = Person::new;
        let closure = |n: String, s: String, a: u32| Person::new(n, s, a);
        let expected = Person::new(name.clone(), surname.clone(), years);
        prop_assert_eq!(factory.create(name.clone(), surname.clone(), years), expected.clone());
        prop_assert_eq!(closure.create(name.clone(), surname.clone(), years), expected);
        prop_assert_eq!(build_pair(Person::with_name, &name, &surname).age(), 0);
    }
}

#[test]
fn test_factory_helper_binding() {
    let summator = Joiner::with_delimiter("--").into_summator();
    assert_eq!(summator.sum("a".to_owned(), "b".to_owned()), "a--b");
}
