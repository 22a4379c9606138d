//! Predicate trait and extension combinators.

use std::convert::Infallible;

use super::composition::{AndPredicate, NotPredicate, OrPredicate};

/// A test over the switched value.
///
/// Predicates receive a shared reference and must not mutate the value.
/// A predicate that cannot decide returns `Err`, which stops dispatch.
///
/// # Example
///
/// ```
/// use predswitch_core::Predicate;
///
/// struct LongerThan(usize);
///
/// impl Predicate<String> for LongerThan {
///     fn test(&self, value: &String) -> Result<bool, std::convert::Infallible> {
///         Ok(value.len() > self.0)
///     }
/// }
///
/// let p = LongerThan(10);
/// assert_eq!(p.test(&"Hello Gerard!".to_string()), Ok(true));
/// assert_eq!(p.test(&"Hi".to_string()), Ok(false));
/// ```
pub trait Predicate<T, E = Infallible> {
    /// Returns whether `value` satisfies the predicate.
    fn test(&self, value: &T) -> Result<bool, E>;
}

impl<T, E, P> Predicate<T, E> for Box<P>
where
    P: Predicate<T, E> + ?Sized,
{
    #[inline]
    fn test(&self, value: &T) -> Result<bool, E> {
        (**self).test(value)
    }
}

/// Combinators available on every predicate.
///
/// # Example
///
/// ```
/// use predswitch_core::{equals, within, Predicate, PredicateExt};
///
/// fn matches(p: &impl Predicate<i32>, value: i32) -> bool {
///     p.test(&value) == Ok(true)
/// }
///
/// let p = within(0..=100).and(equals(50).not());
/// assert!(matches(&p, 10));
/// assert!(!matches(&p, 50));
/// ```
pub trait PredicateExt: Sized {
    /// Matches when both predicates match; `other` is skipped if `self` fails.
    fn and<Q>(self, other: Q) -> AndPredicate<Self, Q> {
        AndPredicate::new(self, other)
    }

    /// Matches when either predicate matches; `other` is skipped if `self` matches.
    fn or<Q>(self, other: Q) -> OrPredicate<Self, Q> {
        OrPredicate::new(self, other)
    }

    /// Inverts the predicate. Errors pass through unchanged.
    fn not(self) -> NotPredicate<Self> {
        NotPredicate::new(self)
    }
}

impl<P> PredicateExt for P {}
