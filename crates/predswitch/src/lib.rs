//! predswitch - Runtime Predicate Dispatch for Rust
//!
//! Hand a value to a switch, attach predicate/action branches, and the first
//! branch whose predicate holds runs. Use the [`switch!`] macro for
//! statement-like dispatch, or [`Switch`] directly when branches are built at
//! runtime.
//!
//! # Example
//!
//! ```rust
//! use predswitch::prelude::*;
//!
//! let mut seen = "";
//! switch!(150 {
//!     case *val >= 0 && *val <= 100 => { seen = "in range"; }
//!     case *val > 100 => { seen = "big"; }
//!     default => { seen = "other"; }
//! });
//! assert_eq!(seen, "big");
//! ```

// User-facing macro
pub use predswitch_macros::switch;

// Engine
pub use predswitch_core::{
    when, Action, Branch, Case, Dispatch, EvaluationPolicy, FireError, FnAction, Switch,
    SwitchError, SwitchState, TryFnAction, When,
};

// Predicates
pub use predswitch_core::predicate;
pub use predswitch_core::{equals, one_of, within, Predicate, PredicateExt};

// Configuration
pub use predswitch_config::{BenchmarkSettings, ConfigError, SwitchConfig};

#[cfg(feature = "console")]
pub use predswitch_console as console;

/// Internal items for `switch!` expansions. Do not use directly.
#[doc(hidden)]
pub mod __private {
    pub use predswitch_core::__private::{dispatch_once, noop};
}

pub mod prelude {
    pub use super::switch;
    pub use super::{when, Dispatch, EvaluationPolicy, Switch, SwitchError};
    pub use super::{equals, one_of, within, Predicate, PredicateExt};
}
