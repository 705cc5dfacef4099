//! The sign-up form validator
//!
//! [`FieldValidator`] runs a fixed sequence of checks over the name and
//! password and reports the first one that fails:
//!
//! 1. neither field is blank
//! 2. the name holds at least two names (first, family)
//! 3. the password has an uppercase letter
//! 4. the password has a digit
//! 5. the name meets its minimum length
//! 6. the password meets its minimum length
//!
//! The order is part of the contract: `"Jo"` is rejected for missing a family
//! name, never for being too short.
//!
//! # Example
//!
//! ```
//! use signup_validation::{validate, FieldValidator, Violation, Validation};
//!
//! assert!(validate("John Smith", "Abcdef1").valid());
//!
//! let validator = FieldValidator::default();
//! assert_eq!(
//!     validator.check("John Smith", "Abcdef"),
//!     Validation::failure(Violation::MissingDigit)
//! );
//! ```

use crate::predicate::{any_in, name_components, require, CharacterClass};
use crate::{Field, FieldId, RuleTable, Validation, ValidationResult, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Check {
    Filled,
    TwoNames,
    Uppercase,
    Digit,
    Length(FieldId),
}

const CHECK_ORDER: [Check; 6] = [
    Check::Filled,
    Check::TwoNames,
    Check::Uppercase,
    Check::Digit,
    Check::Length(FieldId::Name),
    Check::Length(FieldId::Password),
];

#[derive(Debug, Clone, Copy)]
struct Form<'a> {
    name: Field<'a>,
    password: Field<'a>,
}

impl<'a> Form<'a> {
    fn new(name: &'a str, password: &'a str) -> Self {
        Form {
            name: Field::new(FieldId::Name, name),
            password: Field::new(FieldId::Password, password),
        }
    }

    fn field(&self, id: FieldId) -> Field<'a> {
        match id {
            FieldId::Name => self.name,
            FieldId::Password => self.password,
        }
    }
}

/// Validates a (name, password) pair against the sign-up rules.
///
/// The validator holds only its immutable [`RuleTable`]; every call is a pure
/// function of its arguments, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldValidator {
    rules: RuleTable,
}

impl FieldValidator {
    /// A validator with the default minimum lengths (name 4, password 6).
    pub fn new() -> Self {
        Self::default()
    }

    /// A validator with a custom minimum-length table.
    pub fn with_rules(rules: RuleTable) -> Self {
        FieldValidator { rules }
    }

    /// The minimum-length table in use.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Validate the form and render the outcome for display.
    ///
    /// ```
    /// use signup_validation::FieldValidator;
    ///
    /// let result = FieldValidator::new().validate("", "");
    /// assert_eq!(result.message(), Some("Must not leave any fields blank"));
    /// ```
    pub fn validate(&self, name: &str, password: &str) -> ValidationResult {
        self.check(name, password).into()
    }

    /// Validate the form, stopping at the first broken rule.
    pub fn check(&self, name: &str, password: &str) -> Validation<(), Violation> {
        let form = Form::new(name, password);
        CHECK_ORDER
            .iter()
            .fold(Validation::success(()), |outcome, &check| {
                outcome.and_then(|()| self.run(check, &form))
            })
    }

    /// Validate the form and collect every broken rule, in check order.
    ///
    /// A blank field is still reported alone: the remaining rules say nothing
    /// useful about an empty field.
    ///
    /// ```
    /// use signup_validation::{FieldId, FieldValidator, Validation, Violation};
    ///
    /// let audit = FieldValidator::new().audit("john", "abc");
    /// assert_eq!(
    ///     audit,
    ///     Validation::failure(vec![
    ///         Violation::MissingTwoNames,
    ///         Violation::MissingUppercase,
    ///         Violation::MissingDigit,
    ///         Violation::TooShort { field: FieldId::Password, minimum: 6 },
    ///     ])
    /// );
    /// ```
    pub fn audit(&self, name: &str, password: &str) -> Validation<(), Vec<Violation>> {
        let form = Form::new(name, password);
        let listed = |check| self.run(check, &form).map_err(|violation| vec![violation]);

        listed(Check::Filled).and_then(|()| {
            CHECK_ORDER[1..].iter().fold(
                Validation::<(), Vec<Violation>>::success(()),
                |outcome, &check| outcome.and(listed(check)).map(|_| ()),
            )
        })
    }

    fn run(&self, check: Check, form: &Form<'_>) -> Validation<(), Violation> {
        let outcome = match check {
            Check::Filled => {
                if form.name.value.is_empty() || form.password.value.is_empty() {
                    Validation::failure(Violation::BlankField)
                } else {
                    Validation::success(())
                }
            }
            Check::TwoNames => require(
                form.name.value,
                name_components(2),
                Violation::MissingTwoNames,
            ),
            Check::Uppercase => require(
                form.password.value,
                any_in(CharacterClass::UPPERCASE),
                Violation::MissingUppercase,
            ),
            Check::Digit => require(
                form.password.value,
                any_in(CharacterClass::DIGITS),
                Violation::MissingDigit,
            ),
            Check::Length(id) => self.rules.rule(id).check(form.field(id).value),
        };

        #[cfg(feature = "tracing")]
        if let Validation::Failure(violation) = &outcome {
            tracing::debug!(check = ?check, %violation, "sign-up rule failed");
        }

        outcome
    }
}

/// Validate a (name, password) pair with the default rules.
///
/// ```
/// use signup_validation::validate;
///
/// let result = validate("John", "");
/// assert!(!result.valid());
/// assert_eq!(result.message(), Some("Must not leave any fields blank"));
/// ```
pub fn validate(name: &str, password: &str) -> ValidationResult {
    FieldValidator::default().validate(name, password)
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_failure_is_logged() {
        let _ = validate("John Smith", "abcdef");
        assert!(logs_contain("sign-up rule failed"));
        assert!(logs_contain("Password Must Contain At Least One Capitalized Letter"));
    }

    #[traced_test]
    #[test]
    fn test_success_is_quiet() {
        let _ = validate("John Smith", "Abcdef1");
        assert!(!logs_contain("sign-up rule failed"));
    }
}
