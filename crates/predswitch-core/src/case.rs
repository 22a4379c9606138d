//! `when(predicate).run(action)` case construction.

use crate::action::FnAction;
use crate::branch::Branch;
use crate::predicate::FnPredicate;

/// A predicate waiting for its action.
#[derive(Debug, Clone, Copy)]
#[must_use = "a `When` does nothing until `.run(action)` turns it into a case"]
pub struct When<P> {
    predicate: P,
}

/// Starts a case with the given predicate closure.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use predswitch_core::{when, Dispatch, Switch};
///
/// let said = Cell::new("");
/// let outcome = Switch::new(String::from("Hello Gerard!"))
///     .with(when(|s: &String| s.contains("Gerard")).run(|| said.set("hi")))
///     .with(when(|s: &String| s.len() > 10).run(|| said.set("long")))
///     .run()
///     .unwrap();
///
/// assert_eq!(outcome, Dispatch::Case(0));
/// assert_eq!(said.get(), "hi");
/// ```
pub fn when<P>(predicate: P) -> When<P> {
    When { predicate }
}

impl<P> When<P> {
    /// Attaches the action, completing the case.
    pub fn run<A>(self, action: A) -> Case<P, A> {
        Case {
            predicate: self.predicate,
            action,
        }
    }
}

/// A complete predicate/action pair ready to be added to a switch.
#[derive(Debug, Clone, Copy)]
pub struct Case<P, A> {
    predicate: P,
    action: A,
}

impl<P, A> Case<P, A> {
    /// Converts the case into a boxed branch.
    pub fn into_branch<'a, T, E>(self) -> Branch<'a, T, E>
    where
        P: Fn(&T) -> bool + 'a,
        A: FnMut() + 'a,
    {
        Branch::new(FnPredicate::new(self.predicate), FnAction::new(self.action))
    }
}
