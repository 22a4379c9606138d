//! Integration tests for the `switch!` macro.
//!
//! These tests verify that expansions compile in ordinary code and keep
//! first-match semantics.

use std::cell::Cell;

use predswitch::prelude::*;

fn classify(n: i32) -> &'static str {
    let mut out = "";
    switch!(n {
        case *val >= 0 && *val <= 100 => { out = "in range"; }
        case *val > 100 => { out = "big"; }
        case *val < 0 => { out = "neg"; }
        default => { out = "other"; }
    });
    out
}

#[test]
fn test_integer_ranges() {
    assert_eq!(classify(50), "in range");
    assert_eq!(classify(0), "in range");
    assert_eq!(classify(100), "in range");
    assert_eq!(classify(101), "big");
    assert_eq!(classify(-1), "neg");
}

#[test]
fn test_first_match_wins_on_strings() {
    let greeting = String::from("Hello Gerard!");
    let mut hits = Vec::new();
    switch!(greeting {
        case val.contains("Gerard") => { hits.push("hi"); }
        case val.len() > 10 => { hits.push("long"); }
        default => { hits.push("other"); }
    });
    assert_eq!(hits, ["hi"]);
    assert_eq!(greeting.len(), 13);
}

#[test]
fn test_operand_is_readable_in_default() {
    let text = String::from("Hi Ana");
    let name = String::from("Gerard");
    let mut out = String::new();
    switch!(text {
        case val.contains(name.as_str()) => { out = String::from("hi"); }
        case val.len() > 10 => { out = String::from("long"); }
        default => { out = format!("other: {}", text); }
    });
    assert_eq!(out, "other: Hi Ana");
}

#[test]
fn test_operand_is_mutable_after_dispatch() {
    let mut counter = 4;
    switch!(counter {
        case *val > 3 => { counter += 1; }
    });
    assert_eq!(counter, 5);
}

#[test]
fn test_val_borrows_the_bare_value_type() {
    fn shout(s: &String) -> bool {
        s.ends_with('!')
    }
    let greeting = String::from("Hello Gerard!");
    let mut hit = false;
    switch!(greeting {
        case shout(val) => { hit = true; }
    });
    assert!(hit);
}

#[test]
fn test_default_runs_when_nothing_matches() {
    let mut hits = Vec::new();
    switch!(7 {
        case *val == 1 => { hits.push("one"); }
        case *val == 2 => { hits.push("two"); }
        default => { hits.push("default"); }
    });
    assert_eq!(hits, ["default"]);
}

#[test]
fn test_no_match_without_default_does_nothing() {
    let mut hits: Vec<&str> = Vec::new();
    switch!(7 {
        case *val == 1 => { hits.push("one"); }
    });
    assert!(hits.is_empty());
}

#[test]
fn test_empty_switch() {
    let value = 3;
    switch!(value {});
    switch!(value { default => {} });
}

#[test]
fn test_later_conditions_are_not_evaluated() {
    let checked = Cell::new(0);
    let mut hits = 0;
    switch!(10 {
        case { checked.set(checked.get() + 1); *val == 10 } => { hits += 1; }
        case { checked.set(checked.get() + 1); *val > 0 } => { hits += 100; }
    });
    assert_eq!(checked.get(), 1);
    assert_eq!(hits, 1);
}

#[test]
fn test_blocks_share_enclosing_scope() {
    let mut total = 0;
    let mut log = String::new();
    for n in [5, 500, -5] {
        switch!(n {
            case *val > 100 => {
                total += n;
                log.push('b');
            }
            case *val > 0 => {
                total += n;
                log.push('s');
            }
            default => { log.push('d'); }
        });
    }
    assert_eq!(total, 505);
    assert_eq!(log, "sbd");
}

#[test]
fn test_blocks_can_break_and_return() {
    fn first_big(values: &[i32]) -> Option<i32> {
        for &v in values {
            switch!(v {
                case *val > 10 => { return Some(v); }
            });
        }
        None
    }
    assert_eq!(first_big(&[1, 2, 30, 40]), Some(30));
    assert_eq!(first_big(&[1, 2]), None);

    let mut seen = Vec::new();
    for v in 0..10 {
        switch!(v {
            case *val == 3 => { break; }
            default => { seen.push(v); }
        });
    }
    assert_eq!(seen, [0, 1, 2]);
}

#[test]
fn test_blocks_can_use_question_mark() {
    fn parse(input: &str) -> Result<i32, std::num::ParseIntError> {
        let mut out = 0;
        switch!(input {
            case val.starts_with('#') => { out = input[1..].parse::<i32>()?; }
            default => { out = input.parse::<i32>()?; }
        });
        Ok(out)
    }
    assert_eq!(parse("#12"), Ok(12));
    assert_eq!(parse("7"), Ok(7));
    assert!(parse("x").is_err());
}

#[test]
fn test_nested_switches() {
    let mut out = Vec::new();
    switch!(15 {
        case *val > 10 => {
            switch!(3 {
                case *val == 3 => { out.push("inner three"); }
                default => { out.push("inner other"); }
            });
            out.push("outer big");
        }
        default => { out.push("outer small"); }
    });
    assert_eq!(out, ["inner three", "outer big"]);
}

#[test]
fn test_conditions_may_ignore_the_value() {
    let flag = true;
    let mut hit = false;
    switch!(() {
        case flag => { hit = true; }
    });
    assert!(hit);
}

#[test]
fn test_trailing_commas_between_arms() {
    let mut hit = 0;
    switch!(2 {
        case *val == 1 => { hit = 1; },
        case *val == 2 => { hit = 2; },
        default => { hit = 3; },
    });
    assert_eq!(hit, 2);
}

#[test]
fn test_macro_expansions_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}
