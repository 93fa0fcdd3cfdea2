//! `is_instance_of!(Type, Shape)` expansion.
//!
//! A shape is a type path whose arguments may contain holes, such as
//! `Option<_>` or `Result<Vec<_>, _>`. Each hole becomes a fresh type
//! parameter of a guarded inherent impl, so the query holds exactly when the
//! subject unifies with the shape.
//!
//! A hole is implicitly `Sized`. A hole may carry bounds, `_: Bounds`, which
//! are copied onto its parameter:
//!
//! - `Box<_: ?Sized>` also matches `Box<str>` and `Box<dyn Trait>`;
//! - `Peekable<_: Iterator>` or `Cow<'_, _: ?Sized + ToOwned>` restate the
//!   constructor's own parameter bounds, which the impl header must satisfy.

use proc_macro2::{Group, Spacing, Span, TokenStream, TokenTree};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    Ident, Token, Type,
};

pub struct InstanceOfInput {
    pub ty: Type,
    pub shape: TokenStream,
}

impl Parse for InstanceOfInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![,]>()?;
        let shape: TokenStream = input.parse()?;
        Ok(InstanceOfInput { ty, shape: strip_trailing_comma(shape) })
    }
}

/// A hole in the shape: its fresh parameter and optional bounds.
pub struct Hole {
    pub ident: Ident,
    pub bounds: Option<TokenStream>,
}

pub fn expand_instance_of(input: InstanceOfInput) -> TokenStream {
    match try_expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: InstanceOfInput) -> syn::Result<TokenStream> {
    let InstanceOfInput { ty, shape } = input;

    let mut holes = Vec::new();
    let filled = take_holes(shape, &mut holes);
    let shape: Type = syn::parse2(filled)?;

    match &shape {
        Type::Path(p) if p.qself.is_none() => {}
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "expected a type constructor path such as `Option<_>`",
            ));
        }
    }

    let params = holes.iter().map(|hole| {
        let ident = &hole.ident;
        match &hole.bounds {
            Some(bounds) => quote! { #ident: #bounds },
            None => quote! { #ident },
        }
    });

    Ok(quote! {
        {
            trait __InstanceOfFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __InstanceOfFallback for __Probe<X> {}
            impl<#(#params),*> __Probe<#shape> {
                #[allow(dead_code)]
                const VAL: bool = true;
            }
            __Probe::<#ty>::VAL
        }
    })
}

fn strip_trailing_comma(stream: TokenStream) -> TokenStream {
    let mut tokens: Vec<TokenTree> = stream.into_iter().collect();
    if matches!(tokens.last(), Some(TokenTree::Punct(p)) if p.as_char() == ',') {
        tokens.pop();
    }
    tokens.into_iter().collect()
}

/// Replace every `_` hole with a fresh parameter, recorded in `holes`.
///
/// Works on tokens because `_: Bounds` is not type syntax. `'_` stays a
/// lifetime and is left to impl-header elision.
fn take_holes(stream: TokenStream, holes: &mut Vec<Hole>) -> TokenStream {
    let tokens: Vec<TokenTree> = stream.into_iter().collect();
    let mut out: Vec<TokenTree> = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            TokenTree::Ident(ident) if ident == "_" && !follows_tick(&out) => {
                let fresh = format_ident!("__S{}", holes.len(), span = Span::call_site());
                i += 1;
                let bounds = if is_bound_colon(&tokens, i) {
                    let start = i + 1;
                    i = bounds_end(&tokens, start);
                    Some(tokens[start..i].iter().cloned().collect())
                } else {
                    None
                };
                holes.push(Hole { ident: fresh.clone(), bounds });
                out.push(TokenTree::Ident(fresh));
                continue;
            }
            TokenTree::Group(group) => {
                let inner = take_holes(group.stream(), holes);
                let mut rebuilt = Group::new(group.delimiter(), inner);
                rebuilt.set_span(group.span());
                out.push(TokenTree::Group(rebuilt));
            }
            other => out.push(other.clone()),
        }
        i += 1;
    }

    out.into_iter().collect()
}

fn follows_tick(out: &[TokenTree]) -> bool {
    matches!(out.last(), Some(TokenTree::Punct(p)) if p.as_char() == '\'')
}

/// A lone `:` after a hole, as opposed to a path separator `::`.
fn is_bound_colon(tokens: &[TokenTree], i: usize) -> bool {
    let Some(TokenTree::Punct(p)) = tokens.get(i) else {
        return false;
    };
    if p.as_char() != ':' {
        return false;
    }
    let path_sep = p.spacing() == Spacing::Joint
        && matches!(tokens.get(i + 1), Some(TokenTree::Punct(n)) if n.as_char() == ':');
    !path_sep
}

/// Index one past the bounds that start at `start`: they run to the next `,`
/// or unmatched `>`.
fn bounds_end(tokens: &[TokenTree], start: usize) -> usize {
    let mut depth = 0usize;
    let mut i = start;
    while i < tokens.len() {
        if let TokenTree::Punct(p) = &tokens[i] {
            match p.as_char() {
                '<' => depth += 1,
                '>' if is_arrow(tokens, i) => {}
                '>' if depth == 0 => break,
                '>' => depth -= 1,
                ',' if depth == 0 => break,
                _ => {}
            }
        }
        i += 1;
    }
    i
}

/// `->` in `Fn(..) -> R` bounds.
fn is_arrow(tokens: &[TokenTree], i: usize) -> bool {
    i > 0
        && matches!(&tokens[i - 1], TokenTree::Punct(p)
            if p.as_char() == '-' && p.spacing() == Spacing::Joint)
}
