//! Core predicate trait and logical combinators

/// A composable predicate over values of type T.
///
/// Every check in this crate is a `Predicate<str>`: a pure, thread-safe test
/// that answers `true` or `false` and never fails in any other way.
///
/// # Example
///
/// ```rust
/// use signup_validation::predicate::*;
///
/// let initial_free = min_length(2).and(all_in(CharacterClass::LETTERS));
/// assert!(initial_free.check("Smith"));
/// assert!(!initial_free.check("S"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic. The right side is only evaluated when the left
    /// side holds.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use signup_validation::predicate::*;
    ///
    /// let has_no_digit = any_in(CharacterClass::DIGITS).not();
    /// assert!(has_no_digit.check("Password"));
    /// assert!(!has_no_digit.check("Passw0rd"));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_empty(value: &str) -> bool {
        !value.is_empty()
    }

    #[test]
    fn test_closure_is_predicate() {
        let p = |s: &str| s.starts_with('J');
        assert!(p.check("John"));
        assert!(!p.check("john"));
    }

    #[test]
    fn test_and() {
        let p = PredicateExt::<str>::and(non_empty, |s: &str| s.len() < 4);
        assert!(p.check("abc"));
        assert!(!p.check(""));
        assert!(!p.check("abcd"));
    }

    #[test]
    fn test_not() {
        let p = PredicateExt::<str>::not(non_empty);
        assert!(p.check(""));
        assert!(!p.check("x"));
    }
}
