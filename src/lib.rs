//! # signup-validation
//!
//! The validation core of a sign-up form: a name field, a password field and
//! an inline error message.
//!
//! The core is a handful of pure string predicates ([`predicate`]) and one
//! ordered pipeline ([`FieldValidator`]) that reports the first rule a form
//! breaks. The UI toolkit stays outside: it calls into a
//! [`SignUpScreen`](screen::SignUpScreen) and implements the small
//! [`ErrorDisplay`](screen::ErrorDisplay) port to show or hide the message.
//!
//! ## Quick Example
//!
//! ```rust
//! use signup_validation::validate;
//!
//! let result = validate("John Smith", "abcdef");
//! assert!(!result.valid());
//! assert_eq!(
//!     result.message(),
//!     Some("Password Must Contain At Least One Capitalized Letter")
//! );
//!
//! assert!(validate("John Smith", "Abcdef1").valid());
//! ```
//!
//! ## Collecting every failure
//!
//! ```rust
//! use signup_validation::{FieldValidator, Validation};
//!
//! let audit = FieldValidator::new().audit("John Smith", "abc");
//! assert!(matches!(audit, Validation::Failure(ref all) if all.len() == 3));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for failed rules and screen triggers
//! - `serde`: (de)serialize [`RuleTable`] and [`ValidationResult`]
//! - `proptest`: input strategies in [`testing::strategies`](testing)

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod form;
pub mod outcome;
pub mod predicate;
pub mod rules;
pub mod screen;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use form::{validate, FieldValidator};
pub use outcome::{ValidationResult, Violation};
pub use predicate::{
    contains_digit, contains_only, contains_uppercase_letter, has_minimum_length,
    has_two_name_components, CharacterClass,
};
pub use rules::{Field, FieldId, RuleTable, ValidationRule};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::form::{validate, FieldValidator};
    pub use crate::outcome::{ValidationResult, Violation};
    pub use crate::predicate::{CharacterClass, Predicate, PredicateExt};
    pub use crate::rules::{FieldId, RuleTable};
    pub use crate::screen::{ErrorDisplay, SignUpScreen};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
