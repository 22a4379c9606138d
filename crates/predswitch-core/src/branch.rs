//! Branches: ordered predicate/action pairs owned by a switch.

use std::convert::Infallible;
use std::fmt;

use tracing::debug;

use crate::action::{Action, FnAction};
use crate::error::SwitchError;
use crate::predicate::{FnPredicate, Predicate};

/// Failure raised while firing a single branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FireError<E> {
    /// The predicate failed; the action was not called.
    Predicate(E),
    /// The predicate matched and the action failed.
    Action(E),
}

/// A predicate paired with the action it guards.
///
/// Both halves are boxed so branches with different closure types can share
/// one ordered list. The lifetime `'a` lets them borrow the caller's scope.
pub struct Branch<'a, T, E = Infallible> {
    predicate: Box<dyn Predicate<T, E> + 'a>,
    action: Box<dyn Action<E> + 'a>,
}

impl<'a, T, E> Branch<'a, T, E> {
    /// Creates a branch from any predicate and action.
    pub fn new<P, A>(predicate: P, action: A) -> Self
    where
        P: Predicate<T, E> + 'a,
        A: Action<E> + 'a,
    {
        Self {
            predicate: Box::new(predicate),
            action: Box::new(action),
        }
    }

    /// Creates a branch from an infallible predicate closure and action closure.
    ///
    /// # Example
    ///
    /// ```
    /// use predswitch_core::Branch;
    ///
    /// let mut fired = false;
    /// let mut branch: Branch<'_, i32> = Branch::from_fns(|v: &i32| *v == 10, || fired = true);
    /// assert_eq!(branch.try_fire(&10), Ok(true));
    /// drop(branch);
    /// assert!(fired);
    /// ```
    pub fn from_fns<P, A>(predicate: P, action: A) -> Self
    where
        P: Fn(&T) -> bool + 'a,
        A: FnMut() + 'a,
    {
        Self::new(FnPredicate::new(predicate), FnAction::new(action))
    }

    /// Creates a branch from optional parts.
    ///
    /// Fails with [`SwitchError::InvalidBranch`] when either part is missing.
    ///
    /// # Example
    ///
    /// ```
    /// use predswitch_core::{equals, Branch, FnAction, SwitchError};
    ///
    /// let missing = Branch::<'_, i32>::from_parts(Some(equals(1)), None::<FnAction<fn()>>);
    /// assert!(matches!(missing, Err(SwitchError::InvalidBranch(_))));
    /// ```
    pub fn from_parts<P, A>(
        predicate: Option<P>,
        action: Option<A>,
    ) -> Result<Self, SwitchError<E>>
    where
        P: Predicate<T, E> + 'a,
        A: Action<E> + 'a,
    {
        match (predicate, action) {
            (Some(predicate), Some(action)) => Ok(Self::new(predicate, action)),
            (None, _) => {
                debug!(event = "invalid_branch", reason = "missing predicate");
                Err(SwitchError::InvalidBranch("missing predicate"))
            }
            (_, None) => {
                debug!(event = "invalid_branch", reason = "missing action");
                Err(SwitchError::InvalidBranch("missing action"))
            }
        }
    }

    /// Evaluates the predicate alone.
    #[inline]
    pub fn test(&self, value: &T) -> Result<bool, E> {
        self.predicate.test(value)
    }

    /// Evaluates the predicate and, if it matches, runs the action.
    ///
    /// Returns `Ok(true)` when the action ran, `Ok(false)` when the predicate
    /// did not match. An action failure still means the branch was selected.
    #[inline]
    pub fn try_fire(&mut self, value: &T) -> Result<bool, FireError<E>> {
        if !self.predicate.test(value).map_err(FireError::Predicate)? {
            return Ok(false);
        }
        self.action.run().map_err(FireError::Action)?;
        Ok(true)
    }
}

impl<T, E> fmt::Debug for Branch<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::TryFnAction;
    use crate::predicate::{equals, Equals, TryFnPredicate};

    #[test]
    fn test_try_fire_match_runs_action() {
        let mut count = 0;
        {
            let mut branch: Branch<'_, i32> = Branch::from_fns(|v: &i32| *v > 0, || count += 1);
            assert_eq!(branch.try_fire(&5), Ok(true));
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn test_try_fire_no_match_skips_action() {
        let mut count = 0;
        {
            let mut branch: Branch<'_, i32> = Branch::from_fns(|v: &i32| *v > 0, || count += 1);
            assert_eq!(branch.try_fire(&-5), Ok(false));
        }
        assert_eq!(count, 0);
    }

    #[test]
    fn test_predicate_failure_skips_action() {
        let mut count = 0;
        {
            let mut branch = Branch::new(
                TryFnPredicate::new(|_: &i32| Err("bad input")),
                FnAction::new(|| count += 1),
            );
            assert_eq!(branch.try_fire(&1), Err(FireError::Predicate("bad input")));
        }
        assert_eq!(count, 0);
    }

    #[test]
    fn test_action_failure_is_reported() {
        let mut branch = Branch::new(
            equals(1),
            TryFnAction::new(|| Err::<(), &'static str>("write failed")),
        );
        assert_eq!(branch.try_fire(&1), Err(FireError::Action("write failed")));
        assert_eq!(branch.try_fire(&2), Ok(false));
    }

    #[test]
    fn test_test_does_not_run_action() {
        let mut count = 0;
        {
            let branch: Branch<'_, i32> = Branch::from_fns(|v: &i32| *v == 3, || count += 1);
            assert_eq!(branch.test(&3), Ok(true));
        }
        assert_eq!(count, 0);
    }

    #[test]
    fn test_from_parts() {
        let ok = Branch::<'_, i32>::from_parts(Some(equals(1)), Some(FnAction::new(|| {})));
        assert!(ok.is_ok());

        let no_predicate =
            Branch::<'_, i32>::from_parts(None::<Equals<i32>>, Some(FnAction::new(|| {})));
        assert!(matches!(
            no_predicate,
            Err(SwitchError::InvalidBranch("missing predicate"))
        ));

        let no_action = Branch::<'_, i32>::from_parts(Some(equals(1)), None::<FnAction<fn()>>);
        assert!(matches!(
            no_action,
            Err(SwitchError::InvalidBranch("missing action"))
        ));
    }
}
