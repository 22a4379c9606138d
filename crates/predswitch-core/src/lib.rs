//! predswitch Core - Runtime predicate dispatch
//!
//! This crate provides the dispatch engine behind predswitch:
//! - [`Predicate`] and [`Action`] traits with closure wrappers and combinators
//! - [`Branch`], an ordered predicate/action pair
//! - [`Switch`], which owns a value and runs the first matching branch
//! - [`when`] cases for fluent construction
//!
//! # Example
//!
//! ```
//! use predswitch_core::{Dispatch, Switch};
//!
//! let mut hits = Vec::new();
//! let outcome = Switch::new(50)
//!     .case(|v: &i32| (0..=100).contains(v), || hits.push("in range"))
//!     .case(|v: &i32| *v > 100, || {})
//!     .otherwise(|| {})
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(outcome, Dispatch::Case(0));
//! assert_eq!(hits, ["in range"]);
//! ```

pub mod action;
pub mod branch;
pub mod case;
pub mod error;
pub mod predicate;
pub mod switch;

pub use action::{Action, FnAction, TryFnAction};
pub use branch::{Branch, FireError};
pub use case::{when, Case, When};
pub use error::SwitchError;
pub use predicate::{
    equals, one_of, within, Always, AndPredicate, Equals, FnPredicate, NotPredicate, OneOf,
    OrPredicate, Predicate, PredicateExt, TryFnPredicate, Within,
};
pub use switch::{Dispatch, EvaluationPolicy, Switch, SwitchState};

/// Internal items for `switch!` expansions. Do not use directly.
#[doc(hidden)]
pub mod __private {
    pub use crate::switch::dispatch_once;

    /// Placeholder action for branches whose block runs after dispatch.
    #[inline]
    pub fn noop() {}
}
