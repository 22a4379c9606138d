// switch! expansion
//
// The operand is borrowed, never moved: the switch holds `&T` and each
// predicate rebinds it as `val: &T`, so `T` is the operand's own type.
// Predicates are registered on a fresh `Switch` with no-op actions. The
// switch is dispatched and dropped inside an inner block, so the operand
// borrow has ended before the selected user block runs inline in the
// caller's scope.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::parse::SwitchInput;

pub fn expand_switch(input: SwitchInput) -> TokenStream {
    let SwitchInput {
        value,
        cases,
        default,
    } = input;

    // Internal names are invisible to user code and to nested invocations.
    let switch = Ident::new("__switch", Span::mixed_site());
    let dispatch = Ident::new("__dispatch", Span::mixed_site());
    let operand = Ident::new("__value", Span::mixed_site());
    let slot = Ident::new("__slot", Span::mixed_site());
    // `val` stays call-site so user conditions can name it.
    let val = Ident::new("val", Span::call_site());

    let registrations = cases.iter().map(|case| {
        let condition = &case.condition;
        quote! {
            #switch.add_case(
                |#slot| {
                    let #val = *#slot;
                    let _ = #val;
                    #condition
                },
                ::predswitch::__private::noop,
            );
        }
    });

    let default_registration = default.as_ref().map(|_| {
        quote! {
            #switch.add_default(::predswitch::__private::noop);
        }
    });

    let case_arms = cases.iter().enumerate().map(|(index, case)| {
        let body = &case.body;
        quote! {
            ::predswitch::Dispatch::Case(#index) => #body
        }
    });

    let default_arm = default.as_ref().map(|body| {
        quote! {
            ::predswitch::Dispatch::Default => #body
        }
    });

    quote! {
        {
            let #dispatch = {
                let #operand = &(#value);
                #[allow(unused_mut)]
                let mut #switch = ::predswitch::Switch::new(#operand);
                #(#registrations)*
                #default_registration
                ::predswitch::__private::dispatch_once(#switch)
            };
            match #dispatch {
                #(#case_arms,)*
                #default_arm
                _ => {}
            }
        }
    }
}
