//! Autoref tag dispatch for the exchange.
//!
//! `(&Resolve::<T, U>).kind()` yields a strategy tag:
//!
//! - the inherent `kind(&self)` matches the receiver `&Resolve` directly and
//!   wins whenever `T: SwapWith<U>` holds;
//! - otherwise method lookup autorefs once more and finds
//!   [`ByMoveKind::kind`] on `&Resolve<T, T>`.
//!
//! The tag then performs the exchange through [`Strategy`].

use core::marker::PhantomData;

use super::SwapWith;

/// A resolved exchange for locations of `T` and `U`.
pub trait Strategy<T: ?Sized, U: ?Sized>: Copy {
    /// The exchange cannot panic.
    const INFALLIBLE: bool;

    fn exchange(self, lhs: &mut T, rhs: &mut U);
}

/// Tag: the argument types' own [`SwapWith`] impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bespoke;

/// Tag: exchange through three moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByMove;

impl<T, U> Strategy<T, U> for Bespoke
where
    T: ?Sized + SwapWith<U>,
    U: ?Sized,
{
    const INFALLIBLE: bool = <T as SwapWith<U>>::INFALLIBLE;

    #[inline]
    fn exchange(self, lhs: &mut T, rhs: &mut U) {
        lhs.swap_with(rhs);
    }
}

impl<T> Strategy<T, T> for ByMove {
    const INFALLIBLE: bool = true;

    #[inline]
    fn exchange(self, lhs: &mut T, rhs: &mut T) {
        core::mem::swap(lhs, rhs);
    }
}

/// Resolution subject for a pair of locations.
pub struct Resolve<T: ?Sized, U: ?Sized>(PhantomData<T>, PhantomData<U>);

impl<T: ?Sized, U: ?Sized> Resolve<T, U> {
    /// Capture the pointee types of two locations without touching them.
    #[inline]
    pub fn of(_lhs: &&mut T, _rhs: &&mut U) -> Self {
        Resolve(PhantomData, PhantomData)
    }
}

impl<T: ?Sized + SwapWith<U>, U: ?Sized> Resolve<T, U> {
    #[inline]
    pub fn kind(&self) -> Bespoke {
        Bespoke
    }
}

/// Fallback resolution, found one autoref later than the bespoke one.
pub trait ByMoveKind {
    #[inline]
    fn kind(&self) -> ByMove {
        ByMove
    }
}

impl<T> ByMoveKind for &Resolve<T, T> {}
