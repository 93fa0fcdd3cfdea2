//! Procedural macros for the tola-concepts predicate system
//!
//! | Macro | Purpose |
//! |-------|---------|
//! | `concept_check!` | Boolean expressions over concepts for concrete types |
//! | `is_instance_of!` | Does a type match a constructor shape like `Option<_>`? |
//!
//! Both expand to a `bool` expression that is usable in const context.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod user;

/// Check concepts on concrete types with boolean expressions.
///
/// # Syntax: `concept_check!(Type: Expr, ...)`
///
/// Operators: `&` (and), `|` (or), `!` (not), parentheses for grouping.
/// Several checks may be listed; the result is their conjunction.
///
/// Concept names (`Movable`, `Regular`, `SameAs<U>`, `ConstructibleFrom<A, B>`,
/// ...) route to the matching predicate macro. Any other path is probed as a
/// trait bound.
///
/// ```ignore
/// use tola_concepts::concept_check;
///
/// assert!(concept_check!(String: Movable & !Copyable));
/// assert!(concept_check!(u8: Regular & TotallyOrdered, String: SameAs<String>));
/// assert!(concept_check!(String: ConstructibleFrom<&'static str> | Copy));
/// ```
#[proc_macro]
pub fn concept_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::concept_check::ConceptCheckInput);
    user::concept_check::expand_concept_check(input).into()
}

/// True iff a type is an instantiation of a constructor shape.
///
/// Every `_` in the shape stands for any sized type argument. A hole may
/// carry bounds, `_: Bounds`: `_: ?Sized` admits unsized arguments, and a
/// constructor whose parameter is bounded needs that bound restated on the
/// hole (`Peekable<_: Iterator>`).
///
/// ```ignore
/// use tola_concepts::is_instance_of;
///
/// assert!(is_instance_of!(Option<u8>, Option<_>));
/// assert!(!is_instance_of!(Vec<u8>, Option<_>));
/// assert!(is_instance_of!(Result<u8, String>, Result<_, String>));
/// assert!(is_instance_of!(Box<str>, Box<_: ?Sized>));
/// ```
#[proc_macro]
pub fn is_instance_of(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::instance_of::InstanceOfInput);
    user::instance_of::expand_instance_of(input).into()
}
