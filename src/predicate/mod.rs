//! Composable string predicates
//!
//! The sign-up checks are small predicates over `&str`. They can be used
//! directly through the plain functions ([`has_minimum_length`],
//! [`contains_only`], [`has_two_name_components`], ...) or combined with
//! [`PredicateExt::and`] / [`PredicateExt::not`] and fed to [`require`] to
//! produce a [`Validation`](crate::Validation).
//!
//! # Example
//!
//! ```rust
//! use signup_validation::predicate::*;
//!
//! let letters_only = all_in(CharacterClass::LETTERS);
//! assert!(letters_only.check("Smith"));
//! assert!(!letters_only.check("Sm1th"));
//!
//! assert!(has_two_name_components("John Smith"));
//! assert!(contains_digit("Abcdef1"));
//! ```

mod charset;
mod combinators;
mod string;
mod validation;

pub use charset::CharacterClass;
pub use combinators::{And, Not, Predicate, PredicateExt};
pub use string::{
    all_in, any_in, contains_digit, contains_only, contains_uppercase_letter,
    has_minimum_length, has_two_name_components, min_length, name_components, AllIn, AnyIn,
    MinLength, NameComponents, NAME_CHARACTERS,
};
pub use validation::require;
