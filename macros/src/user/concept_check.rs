//! `concept_check!(Type: Expr, ...)` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

use crate::common::{lookup_concept, Arity, BoolExpr};

/// A single check: `Type: Expr`
pub struct TypeCheck {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

/// Input for concept_check!: one or more type checks
pub struct ConceptCheckInput {
    pub checks: Vec<TypeCheck>,
}

impl Parse for ConceptCheckInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut checks = vec![input.parse()?];

        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            checks.push(input.parse()?);
        }

        Ok(ConceptCheckInput { checks })
    }
}

pub fn expand_concept_check(input: ConceptCheckInput) -> TokenStream {
    let mut exprs = Vec::with_capacity(input.checks.len());
    for check in &input.checks {
        match generate_expr(&check.expr, &check.ty) {
            Ok(tokens) => exprs.push(tokens),
            Err(err) => return err.to_compile_error(),
        }
    }

    quote! {
        (#(#exprs)&&*)
    }
}

fn generate_expr(expr: &BoolExpr, ty: &Type) -> syn::Result<TokenStream> {
    Ok(match expr {
        BoolExpr::Concept(concept) => generate_concept(concept, ty)?,
        BoolExpr::And(lhs, rhs) => {
            let l = generate_expr(lhs, ty)?;
            let r = generate_expr(rhs, ty)?;
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_expr(lhs, ty)?;
            let r = generate_expr(rhs, ty)?;
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let inner = generate_expr(operand, ty)?;
            quote! { (!#inner) }
        }
    })
}

fn generate_concept(concept: &Type, ty: &Type) -> syn::Result<TokenStream> {
    let Some(found) = lookup_concept(concept)? else {
        return Ok(generate_single_probe(concept, ty));
    };

    let name = &found.macro_name;
    let args = &found.args;
    Ok(match found.arity {
        Arity::Unary => quote! { ::tola_concepts::#name!(#ty) },
        Arity::Binary | Arity::Variadic => {
            quote! { ::tola_concepts::#name!(#ty #(, #args)*) }
        }
    })
}

/// Any other path is probed as a plain trait bound.
fn generate_single_probe(trait_ty: &Type, ty: &Type) -> TokenStream {
    quote! {
        {
            trait __ProbeFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __ProbeFallback for __Probe<X> {}
            impl<X: ?Sized + #trait_ty> __Probe<X> {
                #[allow(dead_code)]
                const VAL: bool = true;
            }
            __Probe::<#ty>::VAL
        }
    }
}
