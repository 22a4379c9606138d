//! Predicate wrappers for closures and constant predicates.

use super::traits::Predicate;

/// A predicate that matches every value.
///
/// Useful as the last case of a switch when the default should still be
/// reported as a numbered branch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl<T, E> Predicate<T, E> for Always {
    #[inline]
    fn test(&self, _: &T) -> Result<bool, E> {
        Ok(true)
    }
}

/// A predicate wrapping an infallible closure.
///
/// # Example
///
/// ```
/// use predswitch_core::{FnPredicate, Predicate};
///
/// let greets = FnPredicate::new(|s: &String| s.contains("Gerard"));
/// let hello = "Hello Gerard!".to_string();
/// assert_eq!(<_ as Predicate<String>>::test(&greets, &hello), Ok(true));
/// ```
#[derive(Clone, Copy)]
pub struct FnPredicate<F> {
    f: F,
}

impl<F> FnPredicate<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, E, F> Predicate<T, E> for FnPredicate<F>
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, value: &T) -> Result<bool, E> {
        Ok((self.f)(value))
    }
}

/// A predicate wrapping a closure that may fail.
#[derive(Clone, Copy)]
pub struct TryFnPredicate<F> {
    f: F,
}

impl<F> TryFnPredicate<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, E, F> Predicate<T, E> for TryFnPredicate<F>
where
    F: Fn(&T) -> Result<bool, E>,
{
    #[inline]
    fn test(&self, value: &T) -> Result<bool, E> {
        (self.f)(value)
    }
}
