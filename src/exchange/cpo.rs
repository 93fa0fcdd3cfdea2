//! The shared exchange value.

use super::resolve::Strategy;

/// The exchange operation as a first-class value.
///
/// There is one instance, [`SWAP`]; generic algorithms can take `&Swap` and
/// call it with whichever [`Strategy`] their bounds justify.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swap;

/// The exchange customization point. A `static`, so its address is stable.
pub static SWAP: Swap = Swap;

impl Swap {
    /// Exchange `*lhs` and `*rhs` with the given strategy.
    ///
    /// The strategy is taken as given: `call(ByMove, ..)` moves even when a
    /// bespoke [`SwapWith`](super::SwapWith) exchange is registered. Only
    /// [`swap!`](crate::swap) resolves the bespoke exchange first.
    #[inline]
    pub fn call<S, T, U>(&self, strategy: S, lhs: &mut T, rhs: &mut U)
    where
        S: Strategy<T, U>,
        T: ?Sized,
        U: ?Sized,
    {
        strategy.exchange(lhs, rhs);
    }

    /// Whether exchanging through `S` cannot panic.
    #[inline]
    pub const fn infallible<S, T, U>(&self) -> bool
    where
        S: Strategy<T, U>,
        T: ?Sized,
        U: ?Sized,
    {
        S::INFALLIBLE
    }
}

/// Exchange the values behind two mutable references, resolving the
/// strategy from the argument types at this call site.
///
/// ```
/// use tola_concepts::swap;
///
/// let mut a = String::from("left");
/// let mut b = String::from("right");
/// swap!(&mut a, &mut b);
/// assert_eq!((a.as_str(), b.as_str()), ("right", "left"));
/// ```
#[macro_export]
macro_rules! swap {
    ($lhs:expr, $rhs:expr $(,)?) => {
        match ($lhs, $rhs) {
            (__lhs, __rhs) => {
                #[allow(unused_imports)]
                use $crate::exchange::ByMoveKind as _;
                let __strategy = (&$crate::exchange::Resolve::of(&__lhs, &__rhs)).kind();
                $crate::SWAP.call(__strategy, __lhs, __rhs)
            }
        }
    };
}
