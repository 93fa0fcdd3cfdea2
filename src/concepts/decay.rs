//! Decay-copy: producing an owned, reference-stripped value.
//!
//! Decaying strips one outer `&` or `&mut`. A non-reference decays to itself
//! and is decay-copied by moving it; a reference is decay-copied by cloning
//! its referent.

mod sealed {
    pub trait Sealed {}
    impl<T: ?Sized> Sealed for &T {}
    impl<T: ?Sized> Sealed for &mut T {}
}

/// Reference types and what they point at.
pub trait Referent: sealed::Sealed {
    type Target: ?Sized;

    fn referent(&self) -> &Self::Target;
}

impl<T: ?Sized> Referent for &T {
    type Target = T;

    #[inline]
    fn referent(&self) -> &T {
        self
    }
}

impl<T: ?Sized> Referent for &mut T {
    type Target = T;

    #[inline]
    fn referent(&self) -> &T {
        self
    }
}

/// Capture a borrowed value as an owned copy.
#[inline]
pub fn decay_copy<R>(reference: R) -> R::Target
where
    R: Referent,
    R::Target: Clone,
{
    reference.referent().clone()
}

/// True iff `T` is `&U` or `&mut U`.
#[macro_export]
macro_rules! is_reference {
    ($T:ty $(,)?) => {
        $crate::__probe!(IS_REFERENCE, $T)
    };
}

/// True iff an owned, reference-stripped value can be built from a `T`.
///
/// ```
/// use tola_concepts::decay_copyable;
///
/// assert!(decay_copyable!(&String));
/// assert!(decay_copyable!(String));
/// assert!(!decay_copyable!(&str));
/// ```
#[macro_export]
macro_rules! decay_copyable {
    ($T:ty $(,)?) => {
        (if $crate::is_reference!($T) {
            $crate::__probe!(REFERENT_CLONE, $T)
        } else {
            $crate::destructible!($T)
        })
    };
}

/// Like [`decay_copyable!`], and the copy cannot panic: the decayed value is
/// [`nothrow_constructible_from!`](crate::nothrow_constructible_from) `T`.
/// Non-references move; references need a `Copy` referent.
#[macro_export]
macro_rules! nothrow_decay_copyable {
    ($T:ty $(,)?) => {
        (if $crate::is_reference!($T) {
            $crate::__probe!(REFERENT_NOTHROW_CONSTRUCTIBLE, $T)
        } else {
            $crate::nothrow_constructible_from!($T, $T)
        })
    };
}

/// True iff the decayed `T` is move-constructible and can be built from a
/// `T`: a value type that can be captured and moved around.
///
/// ```
/// use tola_concepts::movable_value;
///
/// assert!(movable_value!(String));
/// assert!(movable_value!(&String));
/// assert!(!movable_value!(&std::sync::Mutex<u8>));
/// ```
#[macro_export]
macro_rules! movable_value {
    ($T:ty $(,)?) => {
        (if $crate::is_reference!($T) {
            $crate::__probe!(REFERENT_MOVE, $T) && $crate::__probe!(REFERENT_CLONE, $T)
        } else {
            $crate::move_constructible!($T)
        })
    };
}

/// True iff `T` decays to exactly `U`.
#[macro_export]
macro_rules! decays_to {
    ($T:ty, $U:ty $(,)?) => {
        (if $crate::is_reference!($T) {
            $crate::__probe!(REFERENT_SAME_AS, $T, $U)
        } else {
            $crate::same_as!($T, $U)
        })
    };
}

#[cfg(test)]
mod tests {
    use super::decay_copy;

    #[allow(dead_code)]
    struct Guard;

    #[test]
    fn test_decay_copy_of_copy_referent() {
        let mut n = 5u8;
        let copy = decay_copy(&mut n);
        n += 1;
        assert_eq!((copy, n), (5, 6));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_decay_copy_detaches_from_source() {
        let mut source = String::from("held");
        let owned = decay_copy(&source);
        source.clear();
        assert_eq!(owned, "held");
    }

    #[test]
    fn test_nothrow_decay_copy_routes_through_construction() {
        assert_eq!(nothrow_decay_copyable!(u8), crate::nothrow_constructible_from!(u8, u8));
        assert_eq!(nothrow_decay_copyable!(&u8), crate::nothrow_constructible_from!(u8, &u8));
        assert!(nothrow_decay_copyable!(Guard));
        assert!(!nothrow_decay_copyable!(&Guard));
        assert!(!nothrow_decay_copyable!(&mut [u8]));
    }

    #[test]
    fn test_movable_value() {
        assert!(movable_value!(Guard));
        assert!(movable_value!(&u8));
        assert!(!movable_value!(&Guard));
        assert!(!movable_value!(&str));
        assert!(!movable_value!(str));
    }
}
