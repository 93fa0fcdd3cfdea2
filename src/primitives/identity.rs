//! Type identity.
//!
//! The primitive is impl unification on `Probe<T, T>`: the compiler accepts
//! the impl for exactly one pair shape, so no trait machinery is involved.
//! [`same_as!`](crate::same_as) applies it in both argument orders.

/// Bound-level identity: `A: SameAs<B>` holds iff `A` and `B` are one type.
pub trait SameAs<U: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

/// True iff `A` and `B` denote the exact same type.
///
/// ```
/// use tola_concepts::same_as;
///
/// type Meters = f64;
///
/// assert!(same_as!(Meters, f64));
/// assert!(!same_as!(&str, &mut str));
/// ```
#[macro_export]
macro_rules! same_as {
    ($A:ty, $B:ty $(,)?) => {
        ($crate::__probe!(SAME_AS, $A, $B) && $crate::__probe!(SAME_AS, $B, $A))
    };
}

#[cfg(test)]
mod tests {
    use super::SameAs;

    fn requires_same<A: SameAs<B>, B>() {}

    #[test]
    fn test_same_as_reflexive() {
        assert!(same_as!(i32, i32));
        assert!(same_as!(str, str));
        assert!(same_as!([u8], [u8]));
        assert!(same_as!(&'static str, &'static str));
    }

    #[test]
    fn test_same_as_distinct_both_orders() {
        assert!(!same_as!(i32, u32));
        assert!(!same_as!(u32, i32));
        assert!(!same_as!(i32, &i32));
        assert!(!same_as!(&i32, i32));
    }

    #[test]
    fn test_same_as_bound() {
        requires_same::<u8, u8>();
    }
}
