//! Error types for predswitch

use std::convert::Infallible;

use thiserror::Error;

use crate::switch::Dispatch;

/// Main error type for switch operations.
///
/// `E` is the error type of fallible predicates and actions. Switches built
/// only from plain closures use [`Infallible`], leaving `InvalidBranch` and
/// `AlreadyEvaluated` as the only reachable variants.
#[derive(Debug, Error)]
pub enum SwitchError<E = Infallible> {
    /// A branch was added without a predicate or without an action.
    #[error("Invalid branch: {0}")]
    InvalidBranch(&'static str),

    /// A predicate failed while the switch was evaluating.
    #[error("Predicate of case {index} failed: {source}")]
    PredicateFailure {
        /// Insertion index of the failing branch.
        index: usize,
        #[source]
        source: E,
    },

    /// An action failed after its branch (or the default) had been selected.
    #[error("Action of {dispatch} failed: {source}")]
    ActionFailure {
        /// The branch that was committed to when the action failed.
        dispatch: Dispatch,
        #[source]
        source: E,
    },

    /// The switch uses the strict policy and has already been evaluated.
    #[error("Switch has already been evaluated")]
    AlreadyEvaluated,
}

impl<E> SwitchError<E> {
    /// Returns true if the error came from user code rather than the engine.
    pub fn is_user_failure(&self) -> bool {
        matches!(
            self,
            SwitchError::PredicateFailure { .. } | SwitchError::ActionFailure { .. }
        )
    }
}

/// Result type alias for switch operations.
pub type Result<T, E = Infallible> = std::result::Result<T, SwitchError<E>>;
