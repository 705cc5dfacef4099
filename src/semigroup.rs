//! Semigroup trait for accumulating violations
//!
//! A Semigroup is a type with an associative binary operation. The form
//! validator uses it when it collects *every* violated rule (see
//! [`FieldValidator::audit`](crate::FieldValidator::audit)) instead of
//! stopping at the first one.
//!
//! For a valid instance the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use signup_validation::{Semigroup, Violation};
//!
//! let first = vec![Violation::MissingTwoNames];
//! let second = vec![Violation::MissingDigit];
//! assert_eq!(
//!     first.combine(second),
//!     vec![Violation::MissingTwoNames, Violation::MissingDigit]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value; clone first if the originals are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
