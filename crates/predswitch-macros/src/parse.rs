// switch! input grammar:
//
//   <value-expr> { (case <cond> => { ... } | default => { ... })* }

use syn::parse::{Parse, ParseStream};
use syn::{braced, token, Block, Error, Expr, Result, Token};

mod kw {
    syn::custom_keyword!(case);
}

/// One `case <cond> => { ... }` arm.
pub struct CaseArm {
    pub condition: Expr,
    pub body: Block,
}

/// Parsed `switch!` invocation.
pub struct SwitchInput {
    pub value: Expr,
    pub cases: Vec<CaseArm>,
    pub default: Option<Block>,
}

impl Parse for SwitchInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let value = Expr::parse_without_eager_brace(input)?;

        let arms;
        braced!(arms in input);

        let mut cases = Vec::new();
        let mut default: Option<Block> = None;

        while !arms.is_empty() {
            let lookahead = arms.lookahead1();
            if lookahead.peek(kw::case) {
                arms.parse::<kw::case>()?;
                let condition = Expr::parse_without_eager_brace(&arms)?;
                parse_arrow(&arms, "case condition")?;
                let body = parse_body(&arms)?;
                cases.push(CaseArm { condition, body });
            } else if lookahead.peek(Token![default]) {
                let keyword: Token![default] = arms.parse()?;
                if default.is_some() {
                    return Err(Error::new(
                        keyword.span,
                        "duplicate `default` arm: a switch takes at most one",
                    ));
                }
                parse_arrow(&arms, "`default`")?;
                default = Some(parse_body(&arms)?);
            } else {
                return Err(lookahead.error());
            }

            if arms.peek(Token![,]) {
                arms.parse::<Token![,]>()?;
            }
        }

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the switch arms"));
        }

        Ok(Self {
            value,
            cases,
            default,
        })
    }
}

fn parse_arrow(input: ParseStream, after: &str) -> Result<()> {
    if !input.peek(Token![=>]) {
        return Err(input.error(format!("expected `=>` after {}", after)));
    }
    input.parse::<Token![=>]>()?;
    Ok(())
}

fn parse_body(input: ParseStream) -> Result<Block> {
    if !input.peek(token::Brace) {
        return Err(input.error("expected a `{ ... }` block after `=>`"));
    }
    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parse(tokens: proc_macro2::TokenStream) -> Result<SwitchInput> {
        syn::parse2(tokens)
    }

    fn message(tokens: proc_macro2::TokenStream) -> String {
        match parse(tokens) {
            Ok(_) => panic!("expected a parse error"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_parse_cases_and_default() {
        let input = parse(quote! {
            n {
                case *val >= 0 && *val <= 100 => { a(); }
                case *val > 100 => { b(); }
                default => { c(); }
            }
        })
        .unwrap();

        assert_eq!(input.cases.len(), 2);
        assert!(input.default.is_some());
        assert!(matches!(input.value, Expr::Path(_)));
    }

    #[test]
    fn test_parse_borrowed_value_and_commas() {
        let input = parse(quote! {
            &greeting {
                case val.contains("x") => {},
                default => {},
            }
        })
        .unwrap();

        assert!(matches!(input.value, Expr::Reference(_)));
        assert_eq!(input.cases.len(), 1);
    }

    #[test]
    fn test_parse_empty_arms() {
        let input = parse(quote! { value {} }).unwrap();
        assert!(input.cases.is_empty());
        assert!(input.default.is_none());
    }

    #[test]
    fn test_default_may_precede_cases() {
        let input = parse(quote! {
            v {
                default => {}
                case *val == 1 => {}
            }
        })
        .unwrap();
        assert_eq!(input.cases.len(), 1);
        assert!(input.default.is_some());
    }

    #[test]
    fn test_case_without_block() {
        let msg = message(quote! { v { case *val == 1 => println!("x"); } });
        assert!(msg.contains("block after `=>`"), "{}", msg);
    }

    #[test]
    fn test_case_without_arrow() {
        let msg = message(quote! { v { case flag { run(); } } });
        assert!(msg.contains("expected `=>` after case condition"), "{}", msg);
    }

    #[test]
    fn test_default_without_arrow() {
        let msg = message(quote! { v { default { run(); } } });
        assert!(msg.contains("expected `=>` after `default`"), "{}", msg);
    }

    #[test]
    fn test_duplicate_default() {
        let msg = message(quote! {
            v {
                default => {}
                default => {}
            }
        });
        assert!(msg.contains("duplicate `default`"), "{}", msg);
    }

    #[test]
    fn test_unknown_arm_keyword() {
        let msg = message(quote! { v { when *val == 1 => {} } });
        assert!(msg.contains("expected"), "{}", msg);
        assert!(msg.contains("case"), "{}", msg);
    }

    #[test]
    fn test_case_without_condition() {
        assert!(parse(quote! { v { case => {} } }).is_err());
    }

    #[test]
    fn test_missing_arm_braces() {
        assert!(parse(quote! { v }).is_err());
    }

    #[test]
    fn test_trailing_tokens() {
        let msg = message(quote! { v { default => {} } extra });
        assert!(msg.contains("unexpected tokens"), "{}", msg);
    }
}
