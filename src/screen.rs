//! The sign-up screen port
//!
//! The UI toolkit owns widgets and event wiring. It hands text to
//! [`SignUpScreen`] at three trigger points and implements [`ErrorDisplay`]
//! so the screen can show or hide the inline error:
//!
//! - the submit button: [`SignUpScreen::submit`]
//! - the return key: [`SignUpScreen::on_return`]
//! - each keystroke: [`SignUpScreen::filter_input`]
//!
//! # Example
//!
//! ```
//! use signup_validation::screen::{ErrorDisplay, SignUpScreen};
//!
//! #[derive(Default)]
//! struct Label {
//!     text: Option<String>,
//! }
//!
//! impl ErrorDisplay for Label {
//!     fn show_error(&mut self, message: &str) {
//!         self.text = Some(message.to_string());
//!     }
//!
//!     fn clear_error(&mut self) {
//!         self.text = None;
//!     }
//! }
//!
//! let mut screen = SignUpScreen::new(Label::default());
//! assert!(!screen.submit(Some("John"), None));
//! assert_eq!(
//!     screen.display().text.as_deref(),
//!     Some("Must not leave any fields blank")
//! );
//!
//! assert!(screen.submit(Some("John Smith"), Some("Abcdef1")));
//! assert_eq!(screen.display().text, None);
//! ```

use crate::predicate::{all_in, CharacterClass, Predicate};
use crate::{FieldId, FieldValidator, Violation};

/// Characters a keystroke may insert into the name field.
const NAME_INPUT: CharacterClass = CharacterClass::LETTERS.union(CharacterClass::WHITESPACE);

/// Display callbacks the UI layer provides.
pub trait ErrorDisplay {
    /// Show `message` in the error area and keep it visible.
    fn show_error(&mut self, message: &str);

    /// Hide the error area.
    fn clear_error(&mut self);
}

impl<D: ErrorDisplay + ?Sized> ErrorDisplay for &mut D {
    fn show_error(&mut self, message: &str) {
        (**self).show_error(message);
    }

    fn clear_error(&mut self) {
        (**self).clear_error();
    }
}

/// Drives an [`ErrorDisplay`] from the form's trigger points.
#[derive(Debug, Clone)]
pub struct SignUpScreen<D> {
    validator: FieldValidator,
    display: D,
}

impl<D: ErrorDisplay> SignUpScreen<D> {
    /// A screen using the default validation rules.
    pub fn new(display: D) -> Self {
        Self::with_validator(FieldValidator::default(), display)
    }

    /// A screen using a custom validator.
    pub fn with_validator(validator: FieldValidator, display: D) -> Self {
        SignUpScreen { validator, display }
    }

    /// The display this screen drives.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Consume the screen and return its display.
    pub fn into_display(self) -> D {
        self.display
    }

    /// Handle the submit action.
    ///
    /// Missing text counts as empty. Returns whether the form is valid; the
    /// error area is shown with the first failure or hidden on success.
    pub fn submit(&mut self, name: Option<&str>, password: Option<&str>) -> bool {
        let name = name.unwrap_or_default();
        let password = password.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::trace!(name_len = name.len(), password_len = password.len(), "submit");

        let result = self.validator.validate(name, password);
        match result.message() {
            Some(message) => self.display.show_error(message),
            None => self.display.clear_error(),
        }
        result.valid()
    }

    /// Handle the return key in either field; same as [`submit`](Self::submit).
    pub fn on_return(&mut self, name: Option<&str>, password: Option<&str>) -> bool {
        #[cfg(feature = "tracing")]
        tracing::trace!("return key");

        self.submit(name, password)
    }

    /// Live keystroke filter for `field`.
    ///
    /// `replacement` is the text about to be inserted. Returns `false` when
    /// the edit must be reverted. Only the name field is filtered: deletions
    /// (empty `replacement`) always pass untouched, otherwise the text must be
    /// letters or whitespace. A rejected edit shows an error and an accepted
    /// one clears it.
    pub fn filter_input(&mut self, field: FieldId, replacement: &str) -> bool {
        if field != FieldId::Name || replacement.is_empty() {
            return true;
        }

        let accepted = all_in(NAME_INPUT).check(replacement);

        #[cfg(feature = "tracing")]
        tracing::trace!(%field, accepted, "filter keystroke");

        if accepted {
            self.display.clear_error();
        } else {
            self.display.show_error(&Violation::InvalidNameCharacter.to_string());
        }
        accepted
    }

    /// Live keystroke filter for the name field.
    pub fn filter_name_input(&mut self, replacement: &str) -> bool {
        self.filter_input(FieldId::Name, replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DisplayEvent, RecordingDisplay};

    fn screen() -> SignUpScreen<RecordingDisplay> {
        SignUpScreen::new(RecordingDisplay::new())
    }

    #[test]
    fn test_submit_invalid_shows_error() {
        let mut screen = screen();
        assert!(!screen.submit(Some("John Smith"), Some("abcdef")));
        assert_eq!(
            screen.display().events(),
            &[DisplayEvent::Shown(
                "Password Must Contain At Least One Capitalized Letter".to_string()
            )]
        );
    }

    #[test]
    fn test_submit_valid_clears_error() {
        let mut screen = screen();
        assert!(screen.submit(Some("John Smith"), Some("Abcdef1")));
        assert_eq!(screen.display().events(), &[DisplayEvent::Cleared]);
    }

    #[test]
    fn test_missing_text_is_blank() {
        let mut screen = screen();
        assert!(!screen.submit(None, None));
        assert_eq!(
            screen.display().current(),
            Some("Must not leave any fields blank")
        );
    }

    #[test]
    fn test_return_key_matches_submit() {
        let mut screen = screen();
        assert!(!screen.on_return(Some("Jo"), Some("Abcdef1")));
        assert_eq!(
            screen.display().current(),
            Some("Name Field Must Contain At Least 2 Names (First, Family)")
        );
        assert!(screen.on_return(Some("Jo Lo"), Some("Abcdef1")));
        assert_eq!(screen.display().current(), None);
    }

    #[test]
    fn test_filter_accepts_letters_and_spaces() {
        let mut screen = screen();
        assert!(screen.filter_name_input("a"));
        assert!(screen.filter_name_input(" "));
        assert!(screen.filter_name_input("Ñ"));
        assert!(screen.filter_name_input("\u{301}"));
        assert_eq!(screen.display().events().len(), 4);
        assert!(screen
            .display()
            .events()
            .iter()
            .all(|event| *event == DisplayEvent::Cleared));
    }

    #[test]
    fn test_filter_rejects_digits_and_symbols() {
        let mut screen = screen();
        assert!(!screen.filter_name_input("7"));
        assert!(!screen.filter_name_input("a-"));
        assert_eq!(
            screen.display().current(),
            Some("Your Name Can Only Contain Letters")
        );
    }

    #[test]
    fn test_filter_deletion_untouched() {
        let mut screen = screen();
        assert!(screen.filter_name_input(""));
        assert!(screen.display().events().is_empty());
    }

    #[test]
    fn test_filter_ignores_password() {
        let mut screen = screen();
        assert!(screen.filter_input(FieldId::Password, "$3"));
        assert!(screen.display().events().is_empty());
    }

    #[test]
    fn test_borrowed_display() {
        let mut display = RecordingDisplay::new();
        {
            let mut screen = SignUpScreen::new(&mut display);
            screen.submit(Some(""), Some(""));
        }
        assert_eq!(display.current(), Some("Must not leave any fields blank"));
    }
}
