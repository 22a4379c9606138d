//! The `switch!` macro for predswitch.
//!
//! `switch!` is a thin front end over `predswitch::Switch`: it builds a
//! switch from `case`/`default` arms, dispatches it once, and runs the chosen
//! block inline. Use it through the `predswitch` crate, which re-exports it.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod expand;
mod parse;

use parse::SwitchInput;

/// Dispatches a value to the first arm whose condition holds.
///
/// ```ignore
/// switch!(value {
///     case *val >= 0 && *val <= 100 => { println!("in range"); }
///     case *val > 100 => { println!("big"); }
///     default => { println!("other"); }
/// });
/// ```
///
/// The value expression is evaluated once and borrowed for the dispatch, so
/// the operand stays usable inside the blocks and afterwards. Conditions see
/// it as `val: &T`, where `T` is the operand's type. Conditions run
/// in order and the first that holds selects its block; `default` runs only
/// when none hold. Blocks run in the enclosing scope, so they can mutate
/// locals, `return`, `break` or use `?`.
#[proc_macro]
pub fn switch(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as SwitchInput);
    expand::expand_switch(input).into()
}
