//! The switch engine: one value, ordered branches, an optional default.
//!
//! Construction follows `new → add* → (default)? → evaluate`. Evaluation is
//! first-match: branches are tried in insertion order, the first predicate
//! that returns true fires its action and stops the walk, and the default
//! only runs when every predicate returned false.
//!
//! Logging levels:
//! - **DEBUG**: rejected re-evaluations under the strict policy
//! - **TRACE**: dispatch outcome of each evaluation

use std::convert::Infallible;
use std::fmt;

use tracing::{debug, trace};

use crate::action::{Action, FnAction, TryFnAction};
use crate::branch::{Branch, FireError};
use crate::case::Case;
use crate::error::SwitchError;
use crate::predicate::{FnPredicate, TryFnPredicate};


/// Whether a switch may be evaluated more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EvaluationPolicy {
    /// Every `evaluate()` call re-runs dispatch over the current branches.
    #[default]
    Permissive,

    /// A second `evaluate()` call fails with [`SwitchError::AlreadyEvaluated`].
    Strict,
}

/// Lifecycle of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchState {
    /// Accepting branches; never evaluated.
    Building,
    /// Inside an `evaluate()` call.
    Evaluating,
    /// At least one evaluation has returned (normally, with an error, or by unwinding).
    Settled,
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// The branch at this insertion index matched.
    Case(usize),
    /// No branch matched and the default ran.
    Default,
    /// No branch matched and there is no default.
    Unmatched,
}

impl Dispatch {
    /// Returns true if a branch predicate matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, Dispatch::Case(_))
    }

    /// Returns the matched branch index, if any.
    pub fn case_index(&self) -> Option<usize> {
        match self {
            Dispatch::Case(index) => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatch::Case(index) => write!(f, "case {}", index),
            Dispatch::Default => write!(f, "default"),
            Dispatch::Unmatched => write!(f, "no branch"),
        }
    }
}

// Failure from a single walk; always carries user errors only.
pub(crate) enum Failure<E> {
    Predicate { index: usize, source: E },
    Action { dispatch: Dispatch, source: E },
}

impl<E> Failure<E> {
    fn into_error(self) -> SwitchError<E> {
        match self {
            Failure::Predicate { index, source } => SwitchError::PredicateFailure { index, source },
            Failure::Action { dispatch, source } => SwitchError::ActionFailure { dispatch, source },
        }
    }
}

// Moves the switch to `Settled` however the walk exits.
struct Settle<'s>(&'s mut SwitchState);

impl<'s> Settle<'s> {
    fn enter(state: &'s mut SwitchState) -> Self {
        *state = SwitchState::Evaluating;
        Self(state)
    }
}

impl Drop for Settle<'_> {
    fn drop(&mut self) {
        *self.0 = SwitchState::Settled;
    }
}

/// A predicate-dispatch switch over a value of type `T`.
///
/// The switch owns the value, the branches and the default; predicates only
/// ever see `&T`. Predicates and actions may borrow the surrounding scope for
/// `'a`. The switch is meant to be built, evaluated and dropped on one thread.
///
/// `E` is the error type of fallible predicates and actions. Use
/// [`Switch::new`] for plain closures and [`Switch::fallible`] when branches
/// can fail.
///
/// # Examples
///
/// ```
/// use predswitch_core::{Dispatch, Switch};
///
/// let mut log = Vec::new();
/// let mut switch = Switch::new(7);
/// switch
///     .add_case(|v: &i32| *v == 1, || {})
///     .add_case(|v: &i32| *v == 2, || {});
/// switch.add_default(|| log.push("default"));
///
/// assert_eq!(switch.evaluate().unwrap(), Dispatch::Default);
/// drop(switch);
/// assert_eq!(log, ["default"]);
/// ```
pub struct Switch<'a, T, E = Infallible> {
    value: T,
    branches: Vec<Branch<'a, T, E>>,
    default: Option<Box<dyn Action<E> + 'a>>,
    policy: EvaluationPolicy,
    state: SwitchState,
    evaluations: u64,
}

impl<'a, T> Switch<'a, T> {
    /// Creates a switch whose predicates and actions cannot fail.
    pub fn new(value: T) -> Self {
        Self::fallible(value)
    }
}

impl<'a, T, E> Switch<'a, T, E> {
    /// Creates a switch whose predicates and actions may fail with `E`.
    ///
    /// # Example
    ///
    /// ```
    /// use predswitch_core::{Switch, SwitchError};
    ///
    /// let mut switch = Switch::<_, String>::fallible("12x");
    /// switch.add_fallible_case(
    ///     |s: &&str| s.parse::<i32>().map(|n| n > 10).map_err(|e| e.to_string()),
    ///     || Ok(()),
    /// );
    ///
    /// let err = switch.evaluate().unwrap_err();
    /// assert!(matches!(err, SwitchError::PredicateFailure { index: 0, .. }));
    /// ```
    pub fn fallible(value: T) -> Self {
        Self {
            value,
            branches: Vec::new(),
            default: None,
            policy: EvaluationPolicy::default(),
            state: SwitchState::Building,
            evaluations: 0,
        }
    }

    /// Sets the re-evaluation policy.
    pub fn with_policy(mut self, policy: EvaluationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the switched value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the number of branches.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Returns true if no branch has been added.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Returns true if a default action is set.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Returns the re-evaluation policy.
    pub fn policy(&self) -> EvaluationPolicy {
        self.policy
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> SwitchState {
        self.state
    }

    /// Returns how many evaluations have started.
    pub fn evaluation_count(&self) -> u64 {
        self.evaluations
    }

    /// Appends a branch built from a predicate closure and an action closure.
    pub fn add_case<P, A>(&mut self, predicate: P, action: A) -> &mut Self
    where
        P: Fn(&T) -> bool + 'a,
        A: FnMut() + 'a,
    {
        self.add_branch(Branch::from_fns(predicate, action))
    }

    /// Appends a branch whose predicate and action may fail.
    pub fn add_fallible_case<P, A>(&mut self, predicate: P, action: A) -> &mut Self
    where
        P: Fn(&T) -> Result<bool, E> + 'a,
        A: FnMut() -> Result<(), E> + 'a,
    {
        self.add_branch(Branch::new(
            TryFnPredicate::new(predicate),
            TryFnAction::new(action),
        ))
    }

    /// Appends a prepared branch.
    pub fn add_branch(&mut self, branch: Branch<'a, T, E>) -> &mut Self {
        self.branches.push(branch);
        self
    }

    /// Appends a case built with [`when`](crate::when).
    pub fn push<P, A>(&mut self, case: Case<P, A>) -> &mut Self
    where
        P: Fn(&T) -> bool + 'a,
        A: FnMut() + 'a,
    {
        self.add_branch(case.into_branch())
    }

    /// Appends a branch from optional parts.
    ///
    /// Fails with [`SwitchError::InvalidBranch`] when either part is missing;
    /// the switch is left unchanged in that case.
    pub fn try_add_case<P, A>(
        &mut self,
        predicate: Option<P>,
        action: Option<A>,
    ) -> Result<&mut Self, SwitchError<E>>
    where
        P: Fn(&T) -> bool + 'a,
        A: FnMut() + 'a,
    {
        let branch = Branch::from_parts(
            predicate.map(FnPredicate::new),
            action.map(FnAction::new),
        )?;
        Ok(self.add_branch(branch))
    }

    /// Sets the default action.
    ///
    /// Calling this again replaces the previous default; replacing is the
    /// only way to cancel one.
    pub fn add_default<A>(&mut self, action: A) -> &mut Self
    where
        A: FnMut() + 'a,
    {
        self.default = Some(Box::new(FnAction::new(action)));
        self
    }

    /// Sets a default action that may fail. Replaces any previous default.
    pub fn add_fallible_default<A>(&mut self, action: A) -> &mut Self
    where
        A: FnMut() -> Result<(), E> + 'a,
    {
        self.default = Some(Box::new(TryFnAction::new(action)));
        self
    }

    /// Appends a branch, consuming and returning the switch.
    pub fn case<P, A>(mut self, predicate: P, action: A) -> Self
    where
        P: Fn(&T) -> bool + 'a,
        A: FnMut() + 'a,
    {
        self.add_case(predicate, action);
        self
    }

    /// Appends a [`when`](crate::when) case, consuming and returning the switch.
    pub fn with<P, A>(mut self, case: Case<P, A>) -> Self
    where
        P: Fn(&T) -> bool + 'a,
        A: FnMut() + 'a,
    {
        self.push(case);
        self
    }

    /// Sets the default action, consuming and returning the switch.
    pub fn otherwise<A>(mut self, action: A) -> Self
    where
        A: FnMut() + 'a,
    {
        self.add_default(action);
        self
    }

    /// Runs first-match dispatch.
    ///
    /// Tries each branch in insertion order and stops at the first match.
    /// When nothing matches, runs the default if one is set. An unmatched
    /// switch without a default is not an error.
    ///
    /// # Errors
    ///
    /// - [`SwitchError::PredicateFailure`] if a predicate fails; later
    ///   predicates and the default are skipped.
    /// - [`SwitchError::ActionFailure`] if the selected action fails; the
    ///   branch still counts as matched, so the default is skipped.
    /// - [`SwitchError::AlreadyEvaluated`] under [`EvaluationPolicy::Strict`]
    ///   once the switch has been evaluated.
    pub fn evaluate(&mut self) -> Result<Dispatch, SwitchError<E>> {
        if self.policy == EvaluationPolicy::Strict && self.state == SwitchState::Settled {
            debug!(
                event = "already_evaluated",
                evaluations = self.evaluations,
            );
            return Err(SwitchError::AlreadyEvaluated);
        }
        self.walk().map_err(Failure::into_error)
    }

    /// Reports which branch would fire, without running any action.
    ///
    /// Consults predicates with the same first-match rule as
    /// [`evaluate`](Self::evaluate). The policy does not apply and the state
    /// is not changed.
    pub fn decide(&self) -> Result<Dispatch, SwitchError<E>> {
        for (index, branch) in self.branches.iter().enumerate() {
            match branch.test(&self.value) {
                Ok(true) => return Ok(Dispatch::Case(index)),
                Ok(false) => {}
                Err(source) => return Err(SwitchError::PredicateFailure { index, source }),
            }
        }
        Ok(if self.default.is_some() {
            Dispatch::Default
        } else {
            Dispatch::Unmatched
        })
    }

    /// Evaluates the switch once and drops it.
    pub fn run(mut self) -> Result<Dispatch, SwitchError<E>> {
        self.evaluate()
    }

    fn walk(&mut self) -> Result<Dispatch, Failure<E>> {
        let Self {
            value,
            branches,
            default,
            state,
            evaluations,
            ..
        } = self;
        *evaluations += 1;
        let _settle = Settle::enter(state);

        for (index, branch) in branches.iter_mut().enumerate() {
            match branch.try_fire(value) {
                Ok(false) => {}
                Ok(true) => {
                    trace!(event = "dispatch", case = index);
                    return Ok(Dispatch::Case(index));
                }
                Err(FireError::Predicate(source)) => {
                    return Err(Failure::Predicate { index, source });
                }
                Err(FireError::Action(source)) => {
                    return Err(Failure::Action {
                        dispatch: Dispatch::Case(index),
                        source,
                    });
                }
            }
        }

        match default {
            Some(action) => {
                action.run().map_err(|source| Failure::Action {
                    dispatch: Dispatch::Default,
                    source,
                })?;
                trace!(event = "dispatch", default = true);
                Ok(Dispatch::Default)
            }
            None => {
                trace!(event = "dispatch", unmatched = true);
                Ok(Dispatch::Unmatched)
            }
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Switch<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("value", &self.value)
            .field("branches", &self.branches.len())
            .field("has_default", &self.default.is_some())
            .field("policy", &self.policy)
            .field("state", &self.state)
            .finish()
    }
}

/// Evaluates a freshly built infallible switch exactly once.
///
/// Used by `switch!` expansions, which always build a new switch and never
/// evaluate it elsewhere, so the policy check has nothing to reject.
#[doc(hidden)]
pub fn dispatch_once<T>(mut switch: Switch<'_, T>) -> Dispatch {
    match switch.walk() {
        Ok(dispatch) => dispatch,
        Err(Failure::Predicate { source, .. } | Failure::Action { source, .. }) => match source {},
    }
}
