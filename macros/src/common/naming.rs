// Concept names and the predicate macros they map to

use proc_macro2::Span;
use syn::{GenericArgument, Ident, PathArguments, Type};

/// How many type operands a concept takes besides the subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    Variadic,
}

/// Concepts with a predicate macro of their own.
const CONCEPTS: &[(&str, Arity)] = &[
    ("Destructible", Arity::Unary),
    ("TriviallyDestructible", Arity::Unary),
    ("DefaultInitializable", Arity::Unary),
    ("MoveConstructible", Arity::Unary),
    ("CopyConstructible", Arity::Unary),
    ("MovableValue", Arity::Unary),
    ("Movable", Arity::Unary),
    ("Copyable", Arity::Unary),
    ("Semiregular", Arity::Unary),
    ("Regular", Arity::Unary),
    ("EqualityComparable", Arity::Unary),
    ("TotallyOrdered", Arity::Unary),
    ("Swappable", Arity::Unary),
    ("NothrowSwappable", Arity::Unary),
    ("DecayCopyable", Arity::Unary),
    ("NothrowDecayCopyable", Arity::Unary),
    ("Integral", Arity::Unary),
    ("BooleanTestable", Arity::Unary),
    ("IsReference", Arity::Unary),
    ("SameAs", Arity::Binary),
    ("AssignableFrom", Arity::Binary),
    ("SwappableWith", Arity::Binary),
    ("NothrowSwappableWith", Arity::Binary),
    ("EqualityComparableWith", Arity::Binary),
    ("PartiallyOrderedWith", Arity::Binary),
    ("ConvertibleTo", Arity::Binary),
    ("DecaysTo", Arity::Binary),
    ("IsInstanceOf", Arity::Binary),
    ("ConstructibleFrom", Arity::Variadic),
    ("NothrowConstructibleFrom", Arity::Variadic),
    ("OneOf", Arity::Variadic),
    ("AllOf", Arity::Variadic),
    ("NoneOf", Arity::Variadic),
];

/// A concept reference resolved to its predicate macro.
pub struct ConceptRef {
    pub macro_name: Ident,
    pub arity: Arity,
    pub args: Vec<Type>,
}

/// Resolve `ty` against the concept table.
///
/// Returns `Ok(None)` for paths that are not known concepts; those are probed
/// as plain trait bounds.
pub fn lookup_concept(ty: &Type) -> syn::Result<Option<ConceptRef>> {
    let Type::Path(type_path) = ty else {
        return Ok(None);
    };
    if type_path.qself.is_some() {
        return Ok(None);
    }
    let Some(last) = type_path.path.segments.last() else {
        return Ok(None);
    };
    let name = last.ident.to_string();
    let Some(&(_, arity)) = CONCEPTS.iter().find(|(n, _)| *n == name) else {
        return Ok(None);
    };

    let args = match &last.arguments {
        PathArguments::None => Vec::new(),
        PathArguments::AngleBracketed(angle) => angle
            .args
            .iter()
            .map(|arg| match arg {
                GenericArgument::Type(t) => Ok(t.clone()),
                other => Err(syn::Error::new_spanned(
                    other,
                    format!("`{name}` takes type arguments only"),
                )),
            })
            .collect::<syn::Result<Vec<_>>>()?,
        PathArguments::Parenthesized(paren) => {
            return Err(syn::Error::new_spanned(
                paren,
                format!("`{name}` is not a function-like trait"),
            ));
        }
    };

    match (arity, args.len()) {
        (Arity::Unary, 0) | (Arity::Binary, 1) | (Arity::Variadic, _) => {}
        (Arity::Unary, _) => {
            return Err(syn::Error::new_spanned(
                ty,
                format!("`{name}` takes no type arguments"),
            ));
        }
        (Arity::Binary, _) => {
            return Err(syn::Error::new_spanned(
                ty,
                format!("`{name}` takes exactly one type argument"),
            ));
        }
    }

    Ok(Some(ConceptRef {
        macro_name: Ident::new(&to_snake_case(&name), Span::call_site()),
        arity,
        args,
    }))
}

/// Convert a concept name to its predicate macro name.
/// e.g., "Movable" -> "movable", "SameAs" -> "same_as"
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}
