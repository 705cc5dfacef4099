//! Property-based tests for the string predicates

use proptest::prelude::*;
use signup_validation::predicate::*;
use signup_validation::{validate, FieldValidator};
use unicode_segmentation::UnicodeSegmentation;

const CLASSES: [CharacterClass; 6] = [
    CharacterClass::EMPTY,
    CharacterClass::LETTERS,
    CharacterClass::DIGITS,
    CharacterClass::PUNCTUATION,
    CharacterClass::WHITESPACE,
    CharacterClass::UPPERCASE,
];

#[test]
fn empty_string_is_vacuously_contained() {
    for class in CLASSES {
        assert!(contains_only("", class), "{class:?}");
    }
}

#[test]
fn minimum_length_edges() {
    assert!(has_minimum_length("", 0));
    assert!(has_minimum_length("", -1));
    assert!(!has_minimum_length("", 1));
}

proptest! {
    #[test]
    fn prop_non_positive_minimum_always_holds(s in ".*", min in i64::MIN..=0) {
        prop_assert!(has_minimum_length(&s, min));
    }

    #[test]
    fn prop_minimum_length_matches_grapheme_count(s in ".{0,40}", min in 0i64..50) {
        let count = s.graphemes(true).count() as i64;
        prop_assert_eq!(has_minimum_length(&s, min), count >= min);
    }

    #[test]
    fn prop_validate_is_idempotent(name in ".{0,20}", password in ".{0,20}") {
        let validator = FieldValidator::new();
        prop_assert_eq!(
            validator.validate(&name, &password),
            validator.validate(&name, &password)
        );
    }

    #[test]
    fn prop_message_present_iff_invalid(name in ".{0,20}", password in ".{0,20}") {
        let result = validate(&name, &password);
        prop_assert_eq!(result.valid(), result.message().is_none());
    }

    #[test]
    fn prop_check_agrees_with_first_audit_entry(name in "[A-Za-z ]{0,16}", password in "[A-Za-z0-9]{0,10}") {
        let validator = FieldValidator::new();
        let first = validator.check(&name, &password).into_result().err();
        let all = validator.audit(&name, &password).into_result().err();
        prop_assert_eq!(first.as_ref(), all.as_ref().and_then(|v| v.first()));
    }

    #[test]
    fn prop_letter_pairs_are_two_names(a in "[a-zA-Z]{2,10}", b in "[a-zA-Z]{2,10}") {
        let joined = format!("{} {}", a, b);
        prop_assert!(has_two_name_components(&joined));
    }

    #[test]
    fn prop_single_word_is_never_two_names(word in "[a-zA-Z.\\-]{0,12}") {
        prop_assert!(!has_two_name_components(&word));
    }
}
