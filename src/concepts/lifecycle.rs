//! Composite lifecycle concepts, built from the construction primitives.

use crate::primitives::lifecycle::ConstructibleFrom;
#[cfg(feature = "alloc")]
use crate::primitives::lifecycle::HeapInit;

/// `Self` can be default-initialized as a value and, when the heap is
/// available, on the heap.
#[cfg(feature = "alloc")]
pub trait DefaultInitializable: ConstructibleFrom<()> + Default + HeapInit {}

#[cfg(feature = "alloc")]
impl<T: ConstructibleFrom<()> + Default + HeapInit> DefaultInitializable for T {}

/// `Self` can be default-initialized as a value.
#[cfg(not(feature = "alloc"))]
pub trait DefaultInitializable: ConstructibleFrom<()> + Default {}

#[cfg(not(feature = "alloc"))]
impl<T: ConstructibleFrom<()> + Default> DefaultInitializable for T {}

/// `Self` can be built by moving another `Self`.
pub trait MoveConstructible: Sized + ConstructibleFrom<(Self,)> {}

impl<T: ConstructibleFrom<(T,)>> MoveConstructible for T {}

/// `Self` can also be built from a shared reference to `Self`.
pub trait CopyConstructible: MoveConstructible + Clone {}

impl<T: MoveConstructible + Clone> CopyConstructible for T {}

/// True iff `T` can be built with no arguments in both the value form
/// (`T::default()`) and the heap form (`Box::<T>::default()`).
///
/// Both forms are probed independently. Without the `alloc` feature the heap
/// form cannot be probed and the value form stands in for it.
#[macro_export]
macro_rules! default_initializable {
    ($T:ty $(,)?) => {
        ($crate::constructible_from!($T)
            && $crate::__probe!(VALUE_INIT, $T)
            && $crate::__heap_init!($T))
    };
}

/// True iff `T` can be built from a moved `T`.
#[macro_export]
macro_rules! move_constructible {
    ($T:ty $(,)?) => {
        $crate::constructible_from!($T, $T)
    };
}

/// True iff `T` is move-constructible and can be built from `&T`.
#[macro_export]
macro_rules! copy_constructible {
    ($T:ty $(,)?) => {
        ($crate::move_constructible!($T) && $crate::__probe!(CLONE, $T))
    };
}
