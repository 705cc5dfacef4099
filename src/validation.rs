//! Validation outcome type
//!
//! `Validation` is shaped like `Result` but carries two ways of combining
//! outcomes:
//!
//! - [`Validation::and_then`] short-circuits at the first failure. The ordered
//!   sign-up checks are chained this way.
//! - [`Validation::and`] keeps going and accumulates both sides' errors through
//!   [`Semigroup`]. This is how a full audit of a form collects every broken
//!   rule at once.
//!
//! # Examples
//!
//! ```
//! use signup_validation::{Validation, Violation};
//!
//! let first: Validation<(), Violation> = Validation::failure(Violation::MissingDigit);
//! let chained = first.and_then(|()| Validation::<(), _>::failure(Violation::BlankField));
//! assert_eq!(chained, Validation::Failure(Violation::MissingDigit));
//!
//! let v1 = Validation::<(), _>::failure(vec![Violation::MissingTwoNames]);
//! let v2 = Validation::<(), _>::failure(vec![Violation::MissingUppercase]);
//! assert_eq!(
//!     v1.and(v2),
//!     Validation::Failure(vec![Violation::MissingTwoNames, Violation::MissingUppercase])
//! );
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with an error
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` to accumulate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with its error(s)
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_validation::{Validation, Violation};
    ///
    /// let v = Validation::<(), _>::failure(Violation::BlankField);
    /// assert_eq!(v.into_result(), Err(Violation::BlankField));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_validation::{Validation, Violation};
    ///
    /// let v = Validation::<(), _>::failure(Violation::MissingDigit);
    /// assert_eq!(v.map_err(|e| vec![e]), Validation::Failure(vec![Violation::MissingDigit]));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function only runs when `self` succeeded, so the first failure in a
    /// chain is the one reported.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// Both sides are always evaluated. If both fail, the left errors come first.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_failure_flags() {
        let ok = Validation::<_, Vec<&str>>::success(());
        let bad = Validation::<(), _>::failure(vec!["blank"]);
        assert!(ok.is_success());
        assert!(!ok.is_failure());
        assert!(bad.is_failure());
        assert_eq!(bad.into_result(), Err(vec!["blank"]));
        assert_eq!(ok.into_result(), Ok(()));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let mut ran = false;
        let v = Validation::<(), _>::failure("first").and_then(|()| {
            ran = true;
            Validation::<(), _>::failure("second")
        });
        assert_eq!(v, Validation::Failure("first"));
        assert!(!ran);
    }

    #[test]
    fn test_and_then_runs_on_success() {
        let v = Validation::<_, &str>::success(2).and_then(|n| Validation::success(n * 3));
        assert_eq!(v, Validation::Success(6));
    }

    #[test]
    fn test_and_accumulates_in_order() {
        let v1 = Validation::<(), _>::failure(vec![1]);
        let v2 = Validation::<(), _>::failure(vec![2, 3]);
        assert_eq!(v1.and(v2), Validation::Failure(vec![1, 2, 3]));
    }

    #[test]
    fn test_and_keeps_single_failure() {
        let v1 = Validation::<_, Vec<i32>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec![9]);
        assert_eq!(v1.and(v2), Validation::Failure(vec![9]));
    }

    #[test]
    fn test_and_pairs_successes() {
        let v = Validation::<_, Vec<i32>>::success("a").and(Validation::success("b"));
        assert_eq!(v, Validation::Success(("a", "b")));
    }

    #[test]
    fn test_map_and_into_result() {
        let v = Validation::<i32, &str>::failure("nope");
        assert_eq!(v.map(|n| n + 1).into_result(), Err("nope"));
        let v = Validation::<i32, &str>::success(1);
        assert_eq!(v.map(|n| n + 1).into_result(), Ok(2));
    }
}
