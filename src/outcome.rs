//! Rule violations and the rendered form outcome
//!
//! [`Violation`] is the typed reason a rule failed; its `Display` text is the
//! message shown to the user. [`ValidationResult`] is the flattened
//! `{ valid, message }` pair handed to the UI layer.

use std::error::Error as StdError;
use std::fmt;

use crate::{FieldId, Validation};

/// A broken sign-up rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// At least one field is empty.
    BlankField,
    /// The name does not hold a first and a family name.
    MissingTwoNames,
    /// The password has no uppercase letter.
    MissingUppercase,
    /// The password has no digit.
    MissingDigit,
    /// A field is shorter than its configured minimum.
    TooShort {
        /// The offending field.
        field: FieldId,
        /// Its configured minimum.
        minimum: i64,
    },
    /// A keystroke inserted something other than letters or whitespace into
    /// the name field.
    InvalidNameCharacter,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::BlankField => f.write_str("Must not leave any fields blank"),
            Violation::MissingTwoNames => {
                f.write_str("Name Field Must Contain At Least 2 Names (First, Family)")
            }
            Violation::MissingUppercase => {
                f.write_str("Password Must Contain At Least One Capitalized Letter")
            }
            Violation::MissingDigit => f.write_str("Password Must Contain At Least One Number"),
            Violation::TooShort { field, minimum } => {
                write!(f, "You must have at least {minimum} letters in {field}")
            }
            Violation::InvalidNameCharacter => f.write_str("Your Name Can Only Contain Letters"),
        }
    }
}

impl StdError for Violation {}

/// Outcome of validating the form once.
///
/// `message` is `None` exactly when `valid` is `true`.
///
/// # Example
///
/// ```
/// use signup_validation::validate;
///
/// let result = validate("John Smith", "abcdef");
/// assert!(!result.valid());
/// assert_eq!(
///     result.message(),
///     Some("Password Must Contain At Least One Capitalized Letter")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    valid: bool,
    message: Option<String>,
}

impl ValidationResult {
    /// A passing result with no message.
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            message: None,
        }
    }

    /// A failing result carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Whether every rule passed.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// The reason for the first failed rule, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// `Ok(())` when valid, otherwise the message as the error.
    pub fn into_result(self) -> Result<(), String> {
        match self.message {
            Some(message) if !self.valid => Err(message),
            _ => Ok(()),
        }
    }
}

impl From<Validation<(), Violation>> for ValidationResult {
    fn from(validation: Validation<(), Violation>) -> Self {
        match validation {
            Validation::Success(()) => ValidationResult::success(),
            Validation::Failure(violation) => ValidationResult::failure(violation.to_string()),
        }
    }
}

impl From<Violation> for ValidationResult {
    fn from(violation: Violation) -> Self {
        ValidationResult::failure(violation.to_string())
    }
}
