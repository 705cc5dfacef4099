//! Testing utilities for code that embeds the sign-up validator
//!
//! This module provides a recording [`ErrorDisplay`] double, assertion macros
//! for form outcomes and, behind the `proptest` feature, input strategies.
//!
//! # Examples
//!
//! ```rust
//! use signup_validation::screen::SignUpScreen;
//! use signup_validation::testing::{DisplayEvent, RecordingDisplay};
//!
//! let mut screen = SignUpScreen::new(RecordingDisplay::new());
//! screen.submit(Some("John Smith"), Some("Abcdef1"));
//! assert_eq!(screen.display().events(), &[DisplayEvent::Cleared]);
//! ```
//!
//! ```rust
//! use signup_validation::{validate, assert_valid, assert_rejected};
//!
//! assert_valid!(validate("John Smith", "Abcdef1"));
//! assert_rejected!(validate("", ""), "Must not leave any fields blank");
//! ```

use crate::screen::ErrorDisplay;

/// One call made on a [`RecordingDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    /// `show_error` was called with this message.
    Shown(String),
    /// `clear_error` was called.
    Cleared,
}

/// An [`ErrorDisplay`] that records every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDisplay {
    events: Vec<DisplayEvent>,
}

impl RecordingDisplay {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, oldest first.
    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// The message the error area shows now, if it is visible.
    pub fn current(&self) -> Option<&str> {
        match self.events.last() {
            Some(DisplayEvent::Shown(message)) => Some(message),
            _ => None,
        }
    }
}

impl ErrorDisplay for RecordingDisplay {
    fn show_error(&mut self, message: &str) {
        self.events.push(DisplayEvent::Shown(message.to_string()));
    }

    fn clear_error(&mut self) {
        self.events.push(DisplayEvent::Cleared);
    }
}

/// Assert that a form outcome is valid.
///
/// This macro will panic with the failure message if the result is invalid.
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {{
        let result: $crate::ValidationResult = $result;
        if !result.valid() {
            panic!("Expected valid form, got: {:?}", result.message());
        }
    }};
}

/// Assert that a form outcome is invalid with the given message.
#[macro_export]
macro_rules! assert_rejected {
    ($result:expr, $message:expr) => {{
        let result: $crate::ValidationResult = $result;
        match result.message() {
            Some(message) if !result.valid() => assert_eq!(message, $message),
            _ => panic!("Expected rejection with {:?}, got a valid form", $message),
        }
    }};
}

/// Assert that a validation fails with a specific violation.
///
/// ```rust
/// use signup_validation::{FieldValidator, Violation, assert_violation};
///
/// assert_violation!(
///     FieldValidator::new().check("John Smith", "Abcdef"),
///     Violation::MissingDigit
/// );
/// ```
#[macro_export]
macro_rules! assert_violation {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(violation) => {
                assert_eq!(violation, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!("Expected Failure with {:?}, got Success: {:?}", $expected, v);
            }
        }
    };
}

/// Proptest strategies for sign-up inputs.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    /// A single name component: an uppercase initial followed by lowercase letters.
    pub fn name_component() -> impl Strategy<Value = String> {
        "[A-Z][a-z]{1,11}"
    }

    /// A full name of two to four components separated by single spaces.
    pub fn full_name() -> impl Strategy<Value = String> {
        prop::collection::vec(name_component(), 2..=4).prop_map(|parts| parts.join(" "))
    }

    /// A password with an uppercase letter, a digit and at least six characters.
    pub fn strong_password() -> impl Strategy<Value = String> {
        ("[A-Z]", "[a-z]{4,16}", "[0-9]{1,3}").prop_map(|(upper, lower, digits)| {
            format!("{upper}{lower}{digits}")
        })
    }
}
