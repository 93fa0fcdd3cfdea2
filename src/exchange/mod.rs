//! # Exchange customization point
//!
//! One logical operation, "exchange the values held by two locations",
//! exposed as the shared callable [`SWAP`](crate::SWAP) and the
//! [`swap!`](crate::swap) call-site macro.
//!
//! ## Resolution
//!
//! Per pair of argument types, first match wins:
//!
//! ```text
//! +--------------------------------------------------------------+
//! | 1. Bespoke   T: SwapWith<U>        -> T::swap_with(a, b)      |
//! +--------------------------------------------------------------+
//!                          | not registered
//!                          v
//! +--------------------------------------------------------------+
//! | 2. ByMove    T == U, T: Sized      -> core::mem::swap(a, b)   |
//! +--------------------------------------------------------------+
//!                          | not applicable
//!                          v
//!                  not swappable (predicate: false)
//! ```
//!
//! Registration is a plain trait impl, so a type author can supply a more
//! efficient exchange without touching this crate.
//!
//! ## Infallibility
//!
//! The exchange by moves cannot panic. A bespoke exchange declares whether it
//! can through [`SwapWith::INFALLIBLE`], and the resolved strategy reports it
//! as [`Strategy::INFALLIBLE`].

pub mod cpo;
pub mod resolve;

pub use cpo::{Swap, SWAP};
pub use resolve::{Bespoke, ByMove, ByMoveKind, Resolve, Strategy};

/// A bespoke exchange between `Self` and `U`.
pub trait SwapWith<U: ?Sized = Self> {
    /// The exchange never panics. Conservatively `false` unless declared.
    const INFALLIBLE: bool = false;

    fn swap_with(&mut self, other: &mut U);
}

/// Slices exchange element-wise. Lengths must match, so this can panic.
impl<T> SwapWith for [T] {
    #[inline]
    fn swap_with(&mut self, other: &mut [T]) {
        self.swap_with_slice(other);
    }
}

/// True iff values of `T` and `U` can be exchanged, through a bespoke
/// exchange or by moves.
///
/// ```
/// use tola_concepts::{swappable, swappable_with};
///
/// struct MoveOnly(String);
///
/// assert!(swappable!(MoveOnly));
/// assert!(swappable!([u8]));
/// assert!(!swappable!(str));
/// assert!(!swappable_with!(u8, u16));
/// ```
#[macro_export]
macro_rules! swappable_with {
    ($T:ty, $U:ty $(,)?) => {
        ($crate::__probe!(BESPOKE_SWAP, $T, $U)
            || ($crate::same_as!($T, $U)
                && $crate::move_constructible!($T)
                && $crate::__probe!(ASSIGNABLE_FROM, &mut $T, $T)))
    };
}

/// True iff values of `T` can be exchanged with each other.
#[macro_export]
macro_rules! swappable {
    ($T:ty $(,)?) => {
        $crate::swappable_with!($T, $T)
    };
}

/// True iff `T` and `U` are swappable and the resolved exchange cannot panic.
#[macro_export]
macro_rules! nothrow_swappable_with {
    ($T:ty, $U:ty $(,)?) => {
        (if $crate::__probe!(BESPOKE_SWAP, $T, $U) {
            $crate::__probe!(BESPOKE_SWAP_INFALLIBLE, $T, $U)
        } else {
            $crate::swappable_with!($T, $U)
        })
    };
}

/// True iff `T` is swappable with itself and the exchange cannot panic.
#[macro_export]
macro_rules! nothrow_swappable {
    ($T:ty $(,)?) => {
        $crate::nothrow_swappable_with!($T, $T)
    };
}
