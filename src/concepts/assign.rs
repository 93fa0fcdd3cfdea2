//! Assignability.
//!
//! The assignment target is always a mutable reference. Three right-hand
//! shapes are recognised:
//!
//! | LHS        | RHS        | Effect                        |
//! |------------|------------|-------------------------------|
//! | `&mut T`   | `T`        | move into `*lhs`              |
//! | `&mut T`   | `&T`       | `lhs.clone_from(rhs)`         |
//! | `&mut T`   | `&mut T`   | `lhs.clone_from(&*rhs)`       |
//!
//! A value-shaped left-hand side is never assignable.

/// `Rhs` can be assigned through `Self`, and the assignment yields `Self`.
pub trait AssignableFrom<Rhs> {
    fn assign(self, rhs: Rhs) -> Self;
}

impl<'a, T> AssignableFrom<T> for &'a mut T {
    #[inline]
    fn assign(self, rhs: T) -> Self {
        *self = rhs;
        self
    }
}

impl<'a, 'b, T: Clone> AssignableFrom<&'b T> for &'a mut T {
    #[inline]
    fn assign(self, rhs: &'b T) -> Self {
        self.clone_from(rhs);
        self
    }
}

impl<'a, 'b, T: Clone> AssignableFrom<&'b mut T> for &'a mut T {
    #[inline]
    fn assign(self, rhs: &'b mut T) -> Self {
        self.clone_from(&*rhs);
        self
    }
}

/// True iff `L` is a mutable reference and `R` can be assigned through it.
///
/// ```
/// use tola_concepts::assignable_from;
///
/// assert!(assignable_from!(&mut String, String));
/// assert!(assignable_from!(&mut String, &String));
/// assert!(!assignable_from!(String, String));
/// ```
#[macro_export]
macro_rules! assignable_from {
    ($L:ty, $R:ty $(,)?) => {
        ($crate::__probe!(MUT_REFERENCE, $L) && $crate::__probe!(ASSIGNABLE_FROM, $L, $R))
    };
}

#[cfg(test)]
mod tests {
    use super::AssignableFrom;

    #[test]
    fn test_assign_scalar() {
        let mut n = 1u8;
        *(&mut n).assign(2u8) += 1;
        assert_eq!(n, 3);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_assign_yields_target() {
        let mut s = String::from("old");
        let target = (&mut s).assign(String::from("new"));
        target.push('!');
        assert_eq!(s, "new!");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_assign_by_clone() {
        let mut v = vec![1, 2];
        let src = vec![3, 4, 5];
        (&mut v).assign(&src);
        assert_eq!(v, src);
    }
}
