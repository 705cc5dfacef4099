//! Validation integration for predicates

use super::combinators::Predicate;
use crate::Validation;

/// Turn a predicate check into a `Validation`.
///
/// Returns `Validation::success(())` if `value` satisfies the predicate,
/// otherwise `Validation::failure(error)`.
///
/// # Example
///
/// ```rust
/// use signup_validation::{Validation, Violation, predicate::*};
///
/// let ok = require("Abcdef1", any_in(CharacterClass::DIGITS), Violation::MissingDigit);
/// assert_eq!(ok, Validation::success(()));
///
/// let bad = require("Abcdef", any_in(CharacterClass::DIGITS), Violation::MissingDigit);
/// assert_eq!(bad, Validation::failure(Violation::MissingDigit));
/// ```
pub fn require<E, P>(value: &str, predicate: P, error: E) -> Validation<(), E>
where
    P: Predicate<str>,
{
    if predicate.check(value) {
        Validation::success(())
    } else {
        Validation::failure(error)
    }
}
