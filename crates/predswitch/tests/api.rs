//! End-to-end tests through the public `predswitch` API.

use std::cell::RefCell;

use predswitch::prelude::*;
use predswitch::{Branch, FnAction, SwitchConfig, SwitchState};
use predswitch_test::{Call, Probe};

#[test]
fn test_prelude_builder_with_combinators() {
    let out = RefCell::new(Vec::new());
    let mut switch = Switch::new(42);
    switch
        .add_branch(Branch::new(
            within(0..10).or(equals(99)),
            FnAction::new(|| out.borrow_mut().push("small or 99")),
        ))
        .add_branch(Branch::new(
            within(10..=50).and(one_of([42, 43]).not()),
            FnAction::new(|| out.borrow_mut().push("mid, not 42/43")),
        ))
        .add_branch(Branch::new(
            one_of([41, 42]),
            FnAction::new(|| out.borrow_mut().push("41 or 42")),
        ));

    assert_eq!(switch.evaluate().unwrap(), Dispatch::Case(2));
    drop(switch);
    assert_eq!(out.into_inner(), ["41 or 42"]);
}

#[test]
fn test_when_cases_and_default() {
    let hits = RefCell::new(Vec::new());
    let outcome = Switch::new("unknown")
        .with(when(|s: &&str| *s == "start").run(|| hits.borrow_mut().push("start")))
        .with(when(|s: &&str| *s == "stop").run(|| hits.borrow_mut().push("stop")))
        .otherwise(|| hits.borrow_mut().push("ignored"))
        .run()
        .unwrap();

    assert_eq!(outcome, Dispatch::Default);
    assert_eq!(hits.into_inner(), ["ignored"]);
}

#[test]
fn test_config_driven_strict_switch() {
    let config = SwitchConfig::from_toml_str(r#"policy = "strict""#).unwrap();
    let probe = Probe::new();
    let mut switch = config.switch(5);
    switch.add_case(probe.predicate::<i32>(0, true), probe.action(0));

    assert_eq!(switch.evaluate().unwrap(), Dispatch::Case(0));
    assert_eq!(switch.state(), SwitchState::Settled);
    assert!(matches!(
        switch.evaluate(),
        Err(SwitchError::AlreadyEvaluated)
    ));
    assert_eq!(probe.actions_fired(), vec![Call::Action(0)]);
}

#[test]
fn test_macro_and_builder_agree() {
    for n in -20..=220 {
        let mut from_macro = 0;
        switch!(n {
            case *val >= 0 && *val <= 100 => { from_macro = 1; }
            case *val > 100 => { from_macro = 2; }
            case *val < 0 => { from_macro = 3; }
            default => { from_macro = 4; }
        });

        let from_builder = std::cell::Cell::new(0);
        Switch::new(n)
            .case(|v: &i32| (0..=100).contains(v), || from_builder.set(1))
            .case(|v: &i32| *v > 100, || from_builder.set(2))
            .case(|v: &i32| *v < 0, || from_builder.set(3))
            .otherwise(|| from_builder.set(4))
            .run()
            .unwrap();

        assert_eq!(from_macro, from_builder.get(), "value {}", n);
    }
}
