//! String predicates
//!
//! This module provides the checks the sign-up form is built from. Each one
//! has a predicate type (for composition) and a plain `fn(&str, ..) -> bool`
//! shorthand.
//!
//! Lengths are counted in extended grapheme clusters, so `"Ñamè"` has length
//! 4 whether its accents are precomposed or written as combining marks.

use unicode_segmentation::UnicodeSegmentation;

use super::charset::{is_horizontal_whitespace, CharacterClass};
use super::combinators::{Predicate, PredicateExt};

/// Characters allowed inside a single name component.
pub const NAME_CHARACTERS: CharacterClass =
    CharacterClass::LETTERS.union(CharacterClass::PUNCTUATION);

/// Predicate that checks a string has at least `minimum` user-perceived
/// characters.
///
/// The minimum is signed: zero or a negative minimum is always satisfied.
#[derive(Clone, Copy, Debug)]
pub struct MinLength {
    minimum: i64,
}

impl Predicate<str> for MinLength {
    #[inline]
    fn check(&self, value: &str) -> bool {
        if self.minimum <= 0 {
            return true;
        }
        // A string can't have more than usize::MAX graphemes, so a minimum
        // past that is unreachable.
        usize::try_from(self.minimum).is_ok_and(|min| value.graphemes(true).count() >= min)
    }
}

/// Create a predicate that checks if a string has at least `minimum` characters.
///
/// # Example
///
/// ```rust
/// use signup_validation::predicate::*;
///
/// assert!(min_length(4).check("John"));
/// assert!(!min_length(4).check("Jo"));
/// assert!(min_length(-1).check(""));
/// ```
pub fn min_length(minimum: i64) -> MinLength {
    MinLength { minimum }
}

/// Whether `value` has at least `minimum` characters.
pub fn has_minimum_length(value: &str, minimum: i64) -> bool {
    min_length(minimum).check(value)
}

/// Predicate that checks every character belongs to a class.
#[derive(Clone, Copy, Debug)]
pub struct AllIn(pub CharacterClass);

impl Predicate<str> for AllIn {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().all(|c| self.0.contains(c))
    }
}

/// Create a predicate that checks if every character belongs to `allowed`.
///
/// The empty string passes for any class.
///
/// # Example
///
/// ```rust
/// use signup_validation::predicate::*;
///
/// assert!(all_in(CharacterClass::LETTERS).check("Letters"));
/// assert!(!all_in(CharacterClass::LETTERS).check("    Letters"));
/// assert!(all_in(CharacterClass::EMPTY).check(""));
/// ```
pub fn all_in(allowed: CharacterClass) -> AllIn {
    AllIn(allowed)
}

/// Predicate that checks at least one character belongs to a class.
#[derive(Clone, Copy, Debug)]
pub struct AnyIn(pub CharacterClass);

impl Predicate<str> for AnyIn {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().any(|c| self.0.contains(c))
    }
}

/// Create a predicate that checks if some character belongs to `wanted`.
pub fn any_in(wanted: CharacterClass) -> AnyIn {
    AnyIn(wanted)
}

/// Whether every character of `value` belongs to `allowed`.
pub fn contains_only(value: &str, allowed: CharacterClass) -> bool {
    all_in(allowed).check(value)
}

/// Whether `value` has an uppercase letter.
///
/// ```rust
/// use signup_validation::predicate::contains_uppercase_letter;
///
/// assert!(contains_uppercase_letter("F1R57 N4m3"));
/// assert!(contains_uppercase_letter("Å"));
/// assert!(!contains_uppercase_letter("first name"));
/// ```
pub fn contains_uppercase_letter(value: &str) -> bool {
    any_in(CharacterClass::UPPERCASE).check(value)
}

/// Whether `value` has a digit.
pub fn contains_digit(value: &str) -> bool {
    any_in(CharacterClass::DIGITS).check(value)
}

/// Predicate that checks a string holds several personal names.
///
/// The value is trimmed of surrounding spaces and split on *each* space or
/// tab. Runs of whitespace are not collapsed: `"First  Name"` yields an empty
/// middle component and fails. Every component must be longer than one
/// character and made only of [`NAME_CHARACTERS`].
#[derive(Clone, Copy, Debug)]
pub struct NameComponents {
    at_least: usize,
}

impl Predicate<str> for NameComponents {
    fn check(&self, value: &str) -> bool {
        let component_ok = min_length(2).and(all_in(NAME_CHARACTERS));
        let components = value
            .trim_matches(is_horizontal_whitespace)
            .split(is_horizontal_whitespace);

        let mut count = 0;
        for component in components {
            if !component_ok.check(component) {
                return false;
            }
            count += 1;
        }
        count >= self.at_least
    }
}

/// Create a predicate requiring at least `at_least` name components.
pub fn name_components(at_least: usize) -> NameComponents {
    NameComponents { at_least }
}

/// Whether `value` holds at least a first and a family name.
///
/// ```rust
/// use signup_validation::predicate::has_two_name_components;
///
/// assert!(has_two_name_components("First Name"));
/// assert!(has_two_name_components("   First-Name Jr.  "));
/// assert!(!has_two_name_components("First"));
/// assert!(!has_two_name_components("F N"));
/// ```
pub fn has_two_name_components(value: &str) -> bool {
    name_components(2).check(value)
}
