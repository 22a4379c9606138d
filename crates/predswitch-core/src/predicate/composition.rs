//! Predicate composition with short-circuit AND/OR/NOT semantics.

use super::traits::Predicate;

/// Combines two predicates with AND semantics.
///
/// The second predicate is only consulted when the first one matched.
pub struct AndPredicate<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> AndPredicate<P1, P2> {
    /// Creates a combined predicate.
    #[inline]
    pub fn new(first: P1, second: P2) -> Self {
        Self { first, second }
    }
}

impl<T, E, P1, P2> Predicate<T, E> for AndPredicate<P1, P2>
where
    P1: Predicate<T, E>,
    P2: Predicate<T, E>,
{
    #[inline]
    fn test(&self, value: &T) -> Result<bool, E> {
        Ok(self.first.test(value)? && self.second.test(value)?)
    }
}

/// Combines two predicates with OR semantics.
///
/// The second predicate is only consulted when the first one did not match.
pub struct OrPredicate<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> OrPredicate<P1, P2> {
    /// Creates a combined predicate.
    #[inline]
    pub fn new(first: P1, second: P2) -> Self {
        Self { first, second }
    }
}

impl<T, E, P1, P2> Predicate<T, E> for OrPredicate<P1, P2>
where
    P1: Predicate<T, E>,
    P2: Predicate<T, E>,
{
    #[inline]
    fn test(&self, value: &T) -> Result<bool, E> {
        Ok(self.first.test(value)? || self.second.test(value)?)
    }
}

/// Inverts a predicate.
pub struct NotPredicate<P> {
    inner: P,
}

impl<P> NotPredicate<P> {
    /// Creates an inverted predicate.
    #[inline]
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<T, E, P> Predicate<T, E> for NotPredicate<P>
where
    P: Predicate<T, E>,
{
    #[inline]
    fn test(&self, value: &T) -> Result<bool, E> {
        Ok(!self.inner.test(value)?)
    }
}
