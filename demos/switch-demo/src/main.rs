//! Switch Demo
//!
//! Walks through the dispatch rules: first match wins, the default runs only
//! when nothing matches, and an unmatched switch without a default is silent.

use std::cell::Cell;
use std::fmt;

use predswitch::prelude::*;

fn main() {
    predswitch::console::init();

    integer_ranges();
    substring_match();
    no_default();
    runtime_built();
    strict_policy();
    fallible_predicates();
}

/// Three ranges and a default, through `switch!`.
fn integer_ranges() {
    println!("== integer ranges ==");
    for n in [50, 150, -5] {
        switch!(n {
            case *val >= 0 && *val <= 100 => { println!("{:>4}: in range", n); }
            case *val > 100 => { println!("{:>4}: big", n); }
            case *val < 0 => { println!("{:>4}: neg", n); }
            default => { println!("{:>4}: other", n); }
        });
    }
}

/// Both conditions hold; only the first block runs.
fn substring_match() {
    println!("== substring match ==");
    let greeting = String::from("Hello Gerard!");
    switch!(greeting {
        case val.contains("Gerard") => { println!("hi"); }
        case val.len() > 10 => { println!("long"); }
        default => { println!("other: {}", greeting); }
    });
}

/// Nothing matches and there is no default, so nothing is printed.
fn no_default() {
    println!("== no default ==");
    let mut printed = false;
    switch!(7 {
        case *val == 1 => { printed = true; println!("one"); }
        case *val == 2 => { printed = true; println!("two"); }
    });
    println!("printed anything: {}", printed);
}

/// Branches assembled at runtime from a table.
fn runtime_built() {
    println!("== runtime-built switch ==");
    let table: [(&str, fn(&u32) -> bool); 3] = [
        ("fizzbuzz", |n| n % 15 == 0),
        ("fizz", |n| n % 3 == 0),
        ("buzz", |n| n % 5 == 0),
    ];

    let line = (1..=15u32)
        .map(|n| {
            let label = Cell::new(None);
            let slot = &label;
            let mut switch = Switch::new(n);
            for (name, test) in table {
                switch.add_case(test, move || slot.set(Some(name)));
            }
            if let Err(err) = switch.run() {
                println!("{:>2}: {}", n, err);
            }
            label.get().map_or_else(|| n.to_string(), str::to_string)
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", line);
}

/// A strict switch refuses to dispatch twice.
fn strict_policy() {
    println!("== strict policy ==");
    let mut switch = Switch::new(3).with_policy(EvaluationPolicy::Strict);
    switch.add_case(|v: &i32| *v > 0, || println!("positive"));

    match switch.evaluate() {
        Ok(dispatch) => println!("first evaluation: {}", dispatch),
        Err(err) => println!("first evaluation failed: {}", err),
    }
    match switch.evaluate() {
        Ok(dispatch) => println!("second evaluation: {}", dispatch),
        Err(err) => println!("second evaluation failed: {}", err),
    }
}

#[derive(Debug)]
struct ParseFailure(String);

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a number: {:?}", self.0)
    }
}

impl std::error::Error for ParseFailure {}

/// A predicate that fails stops dispatch and surfaces its error.
fn fallible_predicates() {
    println!("== fallible predicates ==");
    for input in ["12", "7", "x1"] {
        let mut switch = Switch::<_, ParseFailure>::fallible(input);
        switch
            .add_fallible_case(
                |s: &&str| {
                    s.parse::<i32>()
                        .map(|n| n > 10)
                        .map_err(|_| ParseFailure(s.to_string()))
                },
                || {
                    println!("{:>3}: above ten", input);
                    Ok(())
                },
            )
            .add_fallible_default(|| {
                println!("{:>3}: ten or less", input);
                Ok(())
            });

        if let Err(err) = switch.evaluate() {
            println!("{:>3}: {}", input, err);
        }
    }
}
