//! Construction and destruction primitives.
//!
//! | Predicate                   | Rust meaning                                   |
//! |-----------------------------|------------------------------------------------|
//! | `destructible!(T)`          | `T: Sized` (an owned `T` can be dropped)       |
//! | `trivially_destructible!(T)`| dropping `T` runs no code (`needs_drop`)       |
//! | `constructible_from!(T)`    | `T: Default`                                   |
//! | `constructible_from!(T, A)` | `T: From<A>`                                   |
//! | `constructible_from!(T, A, B, ..)` | `T: From<(A, B, ..)>`                   |
//! | `nothrow_constructible_from!(T, T)` | always (a move)                        |
//! | `nothrow_constructible_from!(T, &T)` | `T: Copy` (a bitwise copy)            |
//!
//! References are always destructible, whatever they point at, and an array
//! `[E; N]` is destructible exactly when `E` is.

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

/// An owned value of this type can be dropped.
pub trait Destructible {}

impl<T> Destructible for T {}

/// `Self` can be built from the argument list `Args` (a tuple).
pub trait ConstructibleFrom<Args>: Destructible + Sized {
    fn construct(args: Args) -> Self;
}

impl<T: Default> ConstructibleFrom<()> for T {
    #[inline]
    fn construct((): ()) -> Self {
        T::default()
    }
}

impl<T: From<A>, A> ConstructibleFrom<(A,)> for T {
    #[inline]
    fn construct((a,): (A,)) -> Self {
        T::from(a)
    }
}

/// Argument lists of two or more route through `From<(A, B, ..)>`.
macro_rules! impl_constructible_from {
    ($($A:ident),+) => {
        impl<T: From<($($A,)+)>, $($A),+> ConstructibleFrom<($($A,)+)> for T {
            #[inline]
            fn construct(args: ($($A,)+)) -> Self {
                T::from(args)
            }
        }
    };
}

impl_constructible_from!(A, B);
impl_constructible_from!(A, B, C);
impl_constructible_from!(A, B, C, D);
impl_constructible_from!(A, B, C, D, E);
impl_constructible_from!(A, B, C, D, E, F);

/// `Self` can be built from `Args` without running user code: a move, or a
/// bitwise copy out of a reference.
///
/// `Default` and `From` are user code that may panic, so they never qualify.
pub trait NothrowConstructibleFrom<Args>: Sized {
    fn construct_nothrow(args: Args) -> Self;
}

impl<T> NothrowConstructibleFrom<(T,)> for T {
    #[inline]
    fn construct_nothrow((value,): (T,)) -> T {
        value
    }
}

impl<'a, T: Copy> NothrowConstructibleFrom<(&'a T,)> for T {
    #[inline]
    fn construct_nothrow((source,): (&'a T,)) -> T {
        *source
    }
}

impl<'a, T: Copy> NothrowConstructibleFrom<(&'a mut T,)> for T {
    #[inline]
    fn construct_nothrow((source,): (&'a mut T,)) -> T {
        *source
    }
}

/// `Self` can be allocated on the heap with no arguments.
///
/// Only implemented when the `alloc` feature is on; see
/// [`Toolchain::HAS_ALLOC`](crate::Toolchain::HAS_ALLOC).
pub trait HeapInit: Sized {
    #[cfg(feature = "alloc")]
    fn heap_init() -> Box<Self>;
}

#[cfg(feature = "alloc")]
impl<T> HeapInit for T
where
    Box<T>: Default,
{
    #[inline]
    fn heap_init() -> Box<T> {
        Box::default()
    }
}

/// Dropping a `T` runs no code.
///
/// Unlike the predicate macros this is usable on generic parameters.
#[inline]
pub const fn trivially_destructible<T>() -> bool {
    !core::mem::needs_drop::<T>()
}

/// True iff an owned `T` can be dropped.
///
/// ```
/// use tola_concepts::destructible;
///
/// assert!(destructible!(&str));
/// assert!(!destructible!(str));
/// assert_eq!(destructible!([String; 4]), destructible!(String));
/// ```
#[macro_export]
macro_rules! destructible {
    ($T:ty $(,)?) => {
        $crate::__probe!(DESTRUCTIBLE, $T)
    };
}

/// True iff `T` is destructible and dropping it runs no code.
#[macro_export]
macro_rules! trivially_destructible {
    ($T:ty $(,)?) => {
        ($crate::destructible!($T) && $crate::__probe!(TRIVIALLY_DESTRUCTIBLE, $T))
    };
}

/// True iff `T` is destructible and can be built from the listed arguments.
///
/// ```
/// use tola_concepts::constructible_from;
///
/// assert!(constructible_from!(String));
/// assert!(constructible_from!(String, &str));
/// assert!(!constructible_from!(u8, u32));
/// ```
#[macro_export]
macro_rules! constructible_from {
    ($T:ty $(, $A:ty)* $(,)?) => {
        ($crate::destructible!($T) && $crate::__probe!(CONSTRUCTIBLE_FROM, $T, ($($A,)*)))
    };
}

/// True iff `T` is destructible and can be built from the listed arguments
/// without running user code.
///
/// ```
/// use tola_concepts::nothrow_constructible_from;
///
/// assert!(nothrow_constructible_from!(String, String));
/// assert!(nothrow_constructible_from!(u8, &u8));
/// assert!(!nothrow_constructible_from!(String, &String));
/// assert!(!nothrow_constructible_from!(u64, u32));
/// ```
#[macro_export]
macro_rules! nothrow_constructible_from {
    ($T:ty $(, $A:ty)* $(,)?) => {
        ($crate::destructible!($T)
            && $crate::__probe!(NOTHROW_CONSTRUCTIBLE_FROM, $T, ($($A,)*)))
    };
}

/// Heap form of default initialization, resolved against the capability
/// table: without `alloc` it stands in with the value form.
#[doc(hidden)]
#[macro_export]
macro_rules! __heap_init {
    ($T:ty) => {
        (if $crate::Toolchain::HAS_ALLOC {
            $crate::__probe!(HEAP_INIT, $T)
        } else {
            $crate::__probe!(VALUE_INIT, $T)
        })
    };
}
