//! Ready-made predicates for equality, range and membership tests.

use std::ops::RangeBounds;

use super::traits::Predicate;

/// Matches values equal to a constant.
#[derive(Debug, Clone)]
pub struct Equals<V>(V);

/// Creates a predicate matching values equal to `expected`.
///
/// # Example
///
/// ```
/// use predswitch_core::{equals, Predicate};
///
/// assert_eq!(<_ as Predicate<i32>>::test(&equals(10), &10), Ok(true));
/// assert_eq!(<_ as Predicate<String>>::test(&equals("a"), &"b".to_string()), Ok(false));
/// ```
pub fn equals<V>(expected: V) -> Equals<V> {
    Equals(expected)
}

impl<T, V, E> Predicate<T, E> for Equals<V>
where
    T: PartialEq<V>,
{
    #[inline]
    fn test(&self, value: &T) -> Result<bool, E> {
        Ok(*value == self.0)
    }
}

/// Matches values inside a range.
#[derive(Debug, Clone)]
pub struct Within<R>(R);

/// Creates a predicate matching values contained in `range`.
///
/// Any range form works: `0..10`, `0..=100`, `..0`, `101..`.
///
/// # Example
///
/// ```
/// use predswitch_core::{within, Predicate};
///
/// let in_range = within(0..=100);
/// assert_eq!(<_ as Predicate<i32>>::test(&in_range, &100), Ok(true));
/// assert_eq!(<_ as Predicate<i32>>::test(&in_range, &101), Ok(false));
/// ```
pub fn within<R>(range: R) -> Within<R> {
    Within(range)
}

impl<T, R, E> Predicate<T, E> for Within<R>
where
    T: PartialOrd,
    R: RangeBounds<T>,
{
    #[inline]
    fn test(&self, value: &T) -> Result<bool, E> {
        Ok(self.0.contains(value))
    }
}

/// Matches values that equal any member of a set.
#[derive(Debug, Clone)]
pub struct OneOf<V>(Vec<V>);

/// Creates a membership predicate.
///
/// Members are compared in order; the scan stops at the first equal member.
///
/// # Example
///
/// ```
/// use predswitch_core::{one_of, Predicate};
///
/// let vowel = one_of(['a', 'e', 'i', 'o', 'u']);
/// assert_eq!(<_ as Predicate<char>>::test(&vowel, &'e'), Ok(true));
/// assert_eq!(<_ as Predicate<char>>::test(&vowel, &'z'), Ok(false));
/// ```
pub fn one_of<V>(members: impl IntoIterator<Item = V>) -> OneOf<V> {
    OneOf(members.into_iter().collect())
}

impl<T, V, E> Predicate<T, E> for OneOf<V>
where
    T: PartialEq<V>,
{
    #[inline]
    fn test(&self, value: &T) -> Result<bool, E> {
        Ok(self.0.iter().any(|member| *value == *member))
    }
}
