//! Shared test fixtures for predswitch crates.
//!
//! This crate provides plain data types and closures for testing.
//! It does NOT depend on `predswitch-core`, so the core crate can use it as a
//! dev-dependency without a cycle.
//!
//! - [`probe`] - records the order of predicate, action and default calls
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! predswitch-test = { workspace = true }
//! ```
//!
//! ```
//! use predswitch_test::{Call, Probe};
//!
//! let probe = Probe::new();
//! let pred = probe.predicate::<i32>(0, true);
//! let mut act = probe.action(0);
//! if pred(&5) {
//!     act();
//! }
//! assert_eq!(probe.calls(), vec![Call::Predicate(0), Call::Action(0)]);
//! ```

pub mod probe;

pub use probe::{Call, Probe, ProbeError};
