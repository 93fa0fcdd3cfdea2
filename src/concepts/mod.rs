//! # Layer 2: Concepts
//!
//! Compound predicates built from the primitives and the probe layer.
//!
//! Every concept comes in two forms:
//! - a predicate macro (`movable!(T)`) answering `true`/`false` for a concrete
//!   type, usable in `const` context;
//! - a bound-level trait (`T: Movable`) for generic code.

pub mod lifecycle;
pub mod assign;
pub mod regular;
pub mod ordering;
pub mod combinators;
pub mod decay;
pub mod misc;

pub use lifecycle::{DefaultInitializable, MoveConstructible, CopyConstructible};
pub use assign::AssignableFrom;
pub use regular::{Movable, Copyable, Semiregular, Regular};
pub use ordering::{EqualityComparable, TotallyOrdered};
pub use decay::{Referent, decay_copy};
pub use misc::Integral;
