//! Type-level booleans.
//!
//! Core types: `Satisfied` (true), `Unsatisfied` (false), `Bool` trait.
//!
//! Predicates evaluate to `const bool`. [`Holds`] lifts such a value back into
//! the type system so downstream code can select a type from it:
//!
//! ```
//! use tola_concepts::{copyable, Bool, Holds, If};
//!
//! struct Inline;
//! struct Boxed;
//!
//! type Storage = If<{ copyable!(u64) }, Inline, Boxed>;
//! let _: Storage = Inline;
//! assert!(<Holds<{ copyable!(u64) }> as Bool>::VALUE);
//! ```

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: `If<Then, Else>`.
    type If<Then, Else>;

    type And<Other: Bool>: Bool;
    type Or<Other: Bool>: Bool;
    type Not: Bool;
}

/// Type-level true: the predicate holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Satisfied;

/// Type-level false: the predicate does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unsatisfied;

impl Bool for Satisfied {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Satisfied;
    type Not = Unsatisfied;
}

impl Bool for Unsatisfied {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = Unsatisfied;
    type Or<Other: Bool> = Other;
    type Not = Satisfied;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Satisfied;
}

impl SelectBool<false> for () {
    type Out = Unsatisfied;
}

/// The type-level form of a predicate result.
pub type Holds<const C: bool> = <() as SelectBool<C>>::Out;

/// Select `T` when `C` holds, `E` otherwise.
pub type If<const C: bool, T, E> = <Holds<C> as Bool>::If<T, E>;
