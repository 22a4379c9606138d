//! Actions run when a branch is selected.

use std::convert::Infallible;

/// A zero-argument side-effecting thunk.
///
/// Actions take no input; anything they need is captured where they are
/// built. A failing action returns `Err`, which propagates out of dispatch.
pub trait Action<E = Infallible> {
    /// Runs the action.
    fn run(&mut self) -> Result<(), E>;
}

impl<E, A> Action<E> for Box<A>
where
    A: Action<E> + ?Sized,
{
    #[inline]
    fn run(&mut self) -> Result<(), E> {
        (**self).run()
    }
}

/// An action wrapping an infallible closure.
///
/// # Example
///
/// ```
/// use predswitch_core::{Action, FnAction};
///
/// let mut count = 0;
/// let mut action = FnAction::new(|| count += 1);
/// <_ as Action>::run(&mut action).unwrap();
/// drop(action);
/// assert_eq!(count, 1);
/// ```
pub struct FnAction<F> {
    f: F,
}

impl<F> FnAction<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<E, F> Action<E> for FnAction<F>
where
    F: FnMut(),
{
    #[inline]
    fn run(&mut self) -> Result<(), E> {
        (self.f)();
        Ok(())
    }
}

/// An action wrapping a closure that may fail.
pub struct TryFnAction<F> {
    f: F,
}

impl<F> TryFnAction<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<E, F> Action<E> for TryFnAction<F>
where
    F: FnMut() -> Result<(), E>,
{
    #[inline]
    fn run(&mut self) -> Result<(), E> {
        (self.f)()
    }
}
