//! Predicates over the switched value.
//!
//! Closures are wrapped in [`FnPredicate`] or [`TryFnPredicate`]; the
//! built-ins cover constant equality, ranges and membership, and
//! [`PredicateExt`] composes them without boxing.

mod builtins;
mod composition;
mod traits;
mod wrappers;

pub use builtins::{equals, one_of, within, Equals, OneOf, Within};
pub use composition::{AndPredicate, NotPredicate, OrPredicate};
pub use traits::{Predicate, PredicateExt};
pub use wrappers::{Always, FnPredicate, TryFnPredicate};

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::convert::Infallible;

    use super::*;

    fn check<P: Predicate<i32>>(p: &P, value: i32) -> bool {
        match p.test(&value) {
            Ok(matched) => matched,
            Err(never) => match never {},
        }
    }

    #[test]
    fn test_always() {
        assert!(check(&Always, 0));
        assert!(check(&Always, i32::MIN));
    }

    #[test]
    fn test_fn_predicate() {
        let p = FnPredicate::new(|v: &i32| *v > 10);
        assert!(check(&p, 15));
        assert!(!check(&p, 5));
    }

    #[test]
    fn test_try_fn_predicate_propagates_error() {
        let p = TryFnPredicate::new(|v: &i32| if *v < 0 { Err("negative") } else { Ok(*v > 3) });
        assert_eq!(p.test(&5), Ok(true));
        assert_eq!(p.test(&1), Ok(false));
        assert_eq!(p.test(&-1), Err("negative"));
    }

    #[test]
    fn test_equals() {
        assert!(check(&equals(7), 7));
        assert!(!check(&equals(7), 8));
    }

    #[test]
    fn test_within_range_forms() {
        assert!(check(&within(0..=100), 0));
        assert!(check(&within(0..=100), 100));
        assert!(!check(&within(0..100), 100));
        assert!(check(&within(..0), -1));
        assert!(!check(&within(101..), 100));
    }

    #[test]
    fn test_one_of() {
        let p = one_of([1, 2, 3]);
        assert!(check(&p, 2));
        assert!(!check(&p, 4));

        let empty = one_of(Vec::<i32>::new());
        assert!(!check(&empty, 0));
    }

    #[test]
    fn test_one_of_strings() {
        let p = one_of(["red", "green"]);
        let red = String::from("red");
        let blue = String::from("blue");
        assert_eq!(<_ as Predicate<String>>::test(&p, &red), Ok(true));
        assert_eq!(<_ as Predicate<String>>::test(&p, &blue), Ok(false));
    }

    #[test]
    fn test_and_or_not() {
        let between = within(0..=100).and(equals(50).not());
        assert!(check(&between, 10));
        assert!(!check(&between, 50));
        assert!(!check(&between, 150));

        let edges = equals(0).or(equals(100));
        assert!(check(&edges, 0));
        assert!(check(&edges, 100));
        assert!(!check(&edges, 50));
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Cell::new(0);
        let second = FnPredicate::new(|_: &i32| {
            calls.set(calls.get() + 1);
            true
        });
        let p = equals(1).and(second);
        assert!(!check(&p, 2));
        assert_eq!(calls.get(), 0);
        assert!(check(&p, 1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_or_short_circuits() {
        let calls = Cell::new(0);
        let second = FnPredicate::new(|_: &i32| {
            calls.set(calls.get() + 1);
            false
        });
        let p = equals(1).or(second);
        assert!(check(&p, 1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_composition_stops_at_first_error() {
        let failing = TryFnPredicate::new(|_: &i32| Err::<bool, &'static str>("boom"));
        let never = TryFnPredicate::new(|_: &i32| -> Result<bool, &'static str> {
            panic!("must not be consulted")
        });
        let p = failing.and(never);
        assert_eq!(p.test(&1), Err("boom"));

        let inverted = TryFnPredicate::new(|_: &i32| Err::<bool, &'static str>("boom")).not();
        assert_eq!(inverted.test(&1), Err("boom"));
    }

    #[test]
    fn test_boxed_predicate() {
        let boxed: Box<dyn Predicate<i32, Infallible>> = Box::new(equals(3));
        assert!(check(&boxed, 3));
    }
}
