//! # Failure-safe probing
//!
//! Every predicate in this crate bottoms out in one try-evaluate primitive:
//! an associated const looked up on [`Probe<T, U>`].
//!
//! ## How it works
//!
//! For each probed capability `NAME`:
//! 1. A fallback trait `NameFallback` declares `const NAME: bool = false`
//!    and is implemented for every `Probe<T, U>`.
//! 2. An inherent impl of `Probe` declares `const NAME: bool = true`, guarded
//!    by the bound being probed.
//!
//! When resolving `Probe::<Concrete, Other>::NAME` the compiler:
//! - picks the inherent const if the guarding bound holds,
//! - otherwise falls back to the trait const (`false`).
//!
//! An unsatisfied bound never becomes a compile error: it simply selects the
//! fallback.
//!
//! ```text
//!  Probe<T, U>::NAME
//!        |
//!        +-- impl<..> Probe<..> where <bound>   { const NAME = true  }  (inherent, preferred)
//!        |
//!        +-- impl NameFallback for Probe<T, U>  { const NAME = false }  (trait, fallback)
//! ```
//!
//! ## Limitation
//!
//! This only works for **concrete types** known where the predicate macro is
//! expanded. Inside `fn foo<T>()` the probe only sees `T`'s declared bounds;
//! generic code should use the bound-level traits instead.

use core::marker::PhantomData;

/// Probe subject. `T` is the type under test; `U` is the second operand
/// (argument list, right-hand side, comparison partner) or `()`.
#[doc(hidden)]
pub struct Probe<T: ?Sized, U: ?Sized = ()>(PhantomData<T>, PhantomData<U>);

/// Generate a fallback trait + guarded inherent const for one capability.
///
/// `NAME: impl[generics] SelfTy where [bounds] => value;`
/// The value defaults to `true`.
macro_rules! probe {
    (@value) => { true };
    (@value $value:expr) => { $value };
    (
        $(#[$meta:meta])*
        $name:ident: impl[$($generics:tt)*] $SelfTy:ty
        $(where [$($bound:tt)*])?
        $(=> $value:expr)?;
    ) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$name:camel Fallback>] {
                const $name: bool = false;
            }
            impl<T: ?Sized, U: ?Sized> [<$name:camel Fallback>] for $crate::detect::Probe<T, U> {}
        }

        impl<$($generics)*> $SelfTy $(where $($bound)*)? {
            $(#[$meta])*
            pub const $name: bool = probe!(@value $($value)?);
        }
    };
}

/// Fallback traits, one per probed capability.
///
/// Predicate macros glob-import this module so the `false` defaults are in
/// scope at the expansion site.
pub mod fallback;

/// Look up one probed capability on concrete types.
///
/// Internal building block of the predicate macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __probe {
    ($name:ident, $T:ty $(,)?) => {
        $crate::__probe!($name, $T, ())
    };
    ($name:ident, $T:ty, $U:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::detect::fallback::*;
        $crate::detect::Probe::<$T, $U>::$name
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_probe_falls_back_without_error() {
        // The bound fails for `str`; the probe answers instead of rejecting.
        assert!(!__probe!(DESTRUCTIBLE, str));
        assert!(__probe!(DESTRUCTIBLE, u8));
    }

    #[test]
    fn test_probe_in_const_context() {
        const CLONE_ARRAY: bool = __probe!(CLONE, [u8; 4]);
        const CLONE_SLICE: bool = __probe!(CLONE, [u8]);
        assert!(CLONE_ARRAY);
        assert!(!CLONE_SLICE);
    }
}
