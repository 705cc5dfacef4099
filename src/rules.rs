//! Form fields and the minimum-length rule table
//!
//! The table is keyed by the semantic field name (`name`, `password`), not by
//! any widget identity, so it can be built in code or loaded from a config
//! file when the `serde` feature is enabled.
//!
//! # Example
//!
//! ```
//! use signup_validation::{FieldId, RuleTable};
//!
//! let rules = RuleTable::default();
//! assert_eq!(rules.minimum_for(FieldId::Name), 4);
//! assert_eq!(rules.minimum_for(FieldId::Password), 6);
//!
//! let strict = rules.with_minimum(FieldId::Password, 12);
//! assert_eq!(strict.minimum_for(FieldId::Password), 12);
//! ```

use std::fmt;

use crate::predicate::{min_length, require};
use crate::{Validation, Violation};

/// Identity of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldId {
    /// The full-name field.
    Name,
    /// The password field.
    Password,
}

impl FieldId {
    /// Every field, in the order the form checks them.
    pub const ALL: [FieldId; 2] = [FieldId::Name, FieldId::Password];

    /// Logical name used in messages and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Password => "password",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current text of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    /// Which field this is.
    pub id: FieldId,
    /// Raw text as typed; may be empty.
    pub value: &'a str,
}

impl<'a> Field<'a> {
    /// Pair a field identity with its text.
    pub fn new(id: FieldId, value: &'a str) -> Self {
        Field { id, value }
    }
}

/// A minimum-length requirement attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationRule {
    /// Field the rule applies to.
    pub field: FieldId,
    /// Minimum number of characters; zero or less always passes.
    pub min_length: i64,
}

impl ValidationRule {
    /// Check `value` against this rule.
    ///
    /// ```
    /// use signup_validation::{FieldId, Validation, ValidationRule, Violation};
    ///
    /// let rule = ValidationRule { field: FieldId::Name, min_length: 4 };
    /// assert_eq!(
    ///     rule.check("Jo"),
    ///     Validation::failure(Violation::TooShort { field: FieldId::Name, minimum: 4 })
    /// );
    /// ```
    pub fn check(&self, value: &str) -> Validation<(), Violation> {
        require(
            value,
            min_length(self.min_length),
            Violation::TooShort {
                field: self.field,
                minimum: self.min_length,
            },
        )
    }
}

/// Minimum character counts per field.
///
/// Missing entries in a deserialized table fall back to the defaults
/// (name 4, password 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleTable {
    name: i64,
    password: i64,
}

impl RuleTable {
    /// Default minimum for the name field.
    pub const NAME_MINIMUM: i64 = 4;
    /// Default minimum for the password field.
    pub const PASSWORD_MINIMUM: i64 = 6;

    /// Build a table from explicit minimums.
    pub const fn new(name: i64, password: i64) -> Self {
        RuleTable { name, password }
    }

    /// Minimum length configured for `field`.
    pub fn minimum_for(&self, field: FieldId) -> i64 {
        match field {
            FieldId::Name => self.name,
            FieldId::Password => self.password,
        }
    }

    /// Return a copy with the minimum for `field` replaced.
    #[must_use]
    pub fn with_minimum(mut self, field: FieldId, minimum: i64) -> Self {
        match field {
            FieldId::Name => self.name = minimum,
            FieldId::Password => self.password = minimum,
        }
        self
    }

    /// The rule attached to `field`.
    pub fn rule(&self, field: FieldId) -> ValidationRule {
        ValidationRule {
            field,
            min_length: self.minimum_for(field),
        }
    }

    /// All rules in check order (name, then password).
    pub fn rules(&self) -> impl Iterator<Item = ValidationRule> {
        let table = *self;
        FieldId::ALL.into_iter().map(move |field| table.rule(field))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::new(Self::NAME_MINIMUM, Self::PASSWORD_MINIMUM)
    }
}
