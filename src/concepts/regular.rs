//! Movability and regularity.
//!
//! ```text
//! movable      = object + move_constructible + (&mut T <- T) + swappable
//! copyable     = copy_constructible + movable + (&mut T <- &mut T, &T, T)
//! semiregular  = copyable + default_initializable
//! regular      = semiregular + equality_comparable
//! ```
//!
//! In Rust every sized type can be moved, move-assigned and swapped, so the
//! bound-level [`Movable`] only asks for move construction; the predicate
//! macros still probe every conjunct.

use super::lifecycle::{CopyConstructible, DefaultInitializable, MoveConstructible};
use super::ordering::EqualityComparable;

/// `Self` can be moved, move-assigned and swapped.
pub trait Movable: MoveConstructible {}

impl<T: MoveConstructible> Movable for T {}

/// `Self` is movable and can be duplicated from a shared reference.
pub trait Copyable: CopyConstructible + Movable {}

impl<T: CopyConstructible + Movable> Copyable for T {}

/// Copyable and default-initializable.
pub trait Semiregular: Copyable + DefaultInitializable {}

impl<T: Copyable + DefaultInitializable> Semiregular for T {}

/// Semiregular and equality-comparable.
pub trait Regular: Semiregular + EqualityComparable {}

impl<T: Semiregular + EqualityComparable> Regular for T {}

/// True iff `T` is a sized object type that can be move-constructed,
/// move-assigned and swapped.
#[macro_export]
macro_rules! movable {
    ($T:ty $(,)?) => {
        ($crate::destructible!($T)
            && $crate::move_constructible!($T)
            && $crate::assignable_from!(&mut $T, $T)
            && $crate::swappable!($T))
    };
}

/// True iff `T` is movable, copy-constructible, and assignable from
/// `&mut T`, `&T` and `T`.
#[macro_export]
macro_rules! copyable {
    ($T:ty $(,)?) => {
        ($crate::copy_constructible!($T)
            && $crate::movable!($T)
            && $crate::assignable_from!(&mut $T, &mut $T)
            && $crate::assignable_from!(&mut $T, &$T)
            && $crate::assignable_from!(&mut $T, $T))
    };
}

/// True iff `T` is copyable and default-initializable.
#[macro_export]
macro_rules! semiregular {
    ($T:ty $(,)?) => {
        ($crate::copyable!($T) && $crate::default_initializable!($T))
    };
}

/// True iff `T` is semiregular and equality-comparable.
///
/// ```
/// use tola_concepts::regular;
///
/// assert!(regular!(String));
/// assert!(regular!(Vec<u8>));
/// assert!(!regular!(std::fs::File));
/// ```
#[macro_export]
macro_rules! regular {
    ($T:ty $(,)?) => {
        ($crate::semiregular!($T) && $crate::equality_comparable!($T))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotate<T: Copyable>(slots: &mut [T; 3]) {
        let first = slots[0].clone();
        slots[0] = slots[1].clone();
        slots[1] = slots[2].clone();
        slots[2] = first;
    }

    fn normalize<T: Regular>(value: &mut T) -> bool {
        let blank = T::default();
        let was_blank = *value == blank;
        *value = blank;
        was_blank
    }

    #[test]
    fn test_bound_level_regularity() {
        let mut slots = [1u8, 2, 3];
        rotate(&mut slots);
        assert_eq!(slots, [2, 3, 1]);

        let mut n = 7u32;
        assert!(!normalize(&mut n));
        assert!(normalize(&mut n));
        assert_eq!(n, 0);
    }
}
