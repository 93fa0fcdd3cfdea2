#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std (heap form of default initialization)

//! # tola-concepts
//!
//! Failure-safe compile-time capability predicates.
//!
//! **Ask a type what it can do, and get a `bool` instead of an error.**
//!
//! ## Architecture
//!
//! Each predicate answers a question such as "can `T` be moved, copied,
//! swapped, compared?" for a concrete type. An unsatisfied requirement never
//! rejects the program: it yields `false`.
//!
//! ### 1. Probing
//! Every question bottoms out in an associated const lookup on
//! `detect::Probe<T, U>`. A guarded inherent const answers `true`; a blanket
//! fallback trait answers `false`.
//!
//! ### 2. Composition
//! Compound concepts are conjunctions of probes and other concepts, combined
//! with ordinary `&&`, `||` and `!`, so they stay `const`-evaluable.
//!
//! ### 3. Exchange
//! [`SWAP`] is a single callable object. It prefers a bespoke [`SwapWith`]
//! registration and otherwise exchanges by moving, and reports whether the
//! chosen strategy can fail.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool, Toolchain, SameAs, Destructible, ConstructibleFrom       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Probe                                                   |
//! |  - Probe<T, U>, fallback traits, __probe!                         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Concepts + Exchange                                     |
//! |  - movable!, regular!, totally_ordered!, SWAP, swap!              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: User API                                                |
//! |  - concept_check!, is_instance_of!                                |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! // Predicates on concrete types, evaluated at compile time
//! const _: () = assert!(regular!(u32));
//! const _: () = assert!(!copyable!(std::sync::Mutex<u8>));
//!
//! // Boolean expressions over concepts
//! assert!(concept_check!(String: Movable & !Copy));
//!
//! // Bound-level traits for generic code
//! fn reset<T: Semiregular>(slot: &mut T) {
//!     *slot = T::default();
//! }
//! let mut s = String::from("x");
//! reset(&mut s);
//! assert!(s.is_empty());
//!
//! // The swap customization point
//! let (mut a, mut b) = (1, 2);
//! swap!(&mut a, &mut b);
//! assert_eq!((a, b), (2, 1));
//! ```
//!
//! ## Limitation
//!
//! Predicate macros see only what is known at the expansion site. Inside
//! `fn f<T>()`, `movable!(T)` only sees `T`'s declared bounds; use the traits
//! there.

// Allow `::tola_concepts` to work inside the crate itself
extern crate self as tola_concepts;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the probe definitions
#[doc(hidden)]
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Probe
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 2: Concepts and the swap customization point
// =============================================================================
pub mod concepts;
pub mod exchange;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Bool, Satisfied, Unsatisfied, SelectBool, Holds, If};
pub use primitives::toolchain::Toolchain;
pub use primitives::identity::SameAs;
pub use primitives::lifecycle::{
    Destructible, ConstructibleFrom, NothrowConstructibleFrom, HeapInit, trivially_destructible,
};
pub use concepts::{
    AssignableFrom, DefaultInitializable, MoveConstructible, CopyConstructible,
    Movable, Copyable, Semiregular, Regular, EqualityComparable, TotallyOrdered,
    Referent, decay_copy, Integral,
};
pub use exchange::{SwapWith, Swap, SWAP, Strategy, Bespoke, ByMove};

// Re-export proc-macros
pub use macros::{concept_check, is_instance_of};

/// Common items for the predicate system.
pub mod prelude {
    pub use crate::concepts::{
        // Bound-level traits
        Movable, Copyable, Semiregular, Regular,
        EqualityComparable, TotallyOrdered,
        DefaultInitializable, MoveConstructible, CopyConstructible,
        AssignableFrom,
    };
    pub use crate::exchange::{SwapWith, SWAP};
    pub use crate::{
        // Predicate macros
        same_as, destructible, constructible_from, nothrow_constructible_from,
        default_initializable, move_constructible, movable_value,
        copy_constructible, assignable_from,
        swappable, swappable_with, movable, copyable, semiregular, regular,
        equality_comparable, totally_ordered, one_of, swap,
    };
    pub use macros::{concept_check, is_instance_of};
}
