//! Comparison concepts.
//!
//! `PartialEq` supplies `==` and `!=` together and `PartialOrd` supplies all
//! four relational operators together, each returning `bool`.

/// `==` and `!=` are defined on `&Self`.
pub trait EqualityComparable: PartialEq {}

impl<T: ?Sized + PartialEq> EqualityComparable for T {}

/// Equality-comparable and all relational operators are defined.
///
/// This is a syntactic requirement, as for the predicate: `f64` qualifies.
pub trait TotallyOrdered: EqualityComparable + PartialOrd {}

impl<T: ?Sized + PartialOrd> TotallyOrdered for T {}

/// True iff `==` and `!=` are defined between two `&T`.
#[macro_export]
macro_rules! equality_comparable {
    ($T:ty $(,)?) => {
        $crate::__probe!(PARTIAL_EQ, $T, $T)
    };
}

/// True iff `==` and `!=` are defined between `&T` and `&U` in both orders.
#[macro_export]
macro_rules! equality_comparable_with {
    ($T:ty, $U:ty $(,)?) => {
        ($crate::__probe!(PARTIAL_EQ, $T, $U) && $crate::__probe!(PARTIAL_EQ, $U, $T))
    };
}

/// True iff `<`, `>`, `<=`, `>=` are defined between `&T` and `&U` in both
/// operand orders.
#[macro_export]
macro_rules! partially_ordered_with {
    ($T:ty, $U:ty $(,)?) => {
        ($crate::__probe!(PARTIAL_ORD, $T, $U) && $crate::__probe!(PARTIAL_ORD, $U, $T))
    };
}

/// True iff `T` is equality-comparable and partially ordered with itself.
///
/// ```
/// use tola_concepts::totally_ordered;
///
/// #[derive(PartialEq)]
/// struct Tag(u8);
///
/// assert!(totally_ordered!(u32));
/// assert!(!totally_ordered!(Tag));
/// ```
#[macro_export]
macro_rules! totally_ordered {
    ($T:ty $(,)?) => {
        ($crate::equality_comparable!($T) && $crate::partially_ordered_with!($T, $T))
    };
}

#[cfg(test)]
mod tests {
    use super::TotallyOrdered;

    fn clamp<T: TotallyOrdered + Copy>(v: T, lo: T, hi: T) -> T {
        if v < lo {
            lo
        } else if v > hi {
            hi
        } else {
            v
        }
    }

    #[test]
    fn test_bound_level_ordering() {
        assert_eq!(clamp(9, 0, 5), 5);
        assert_eq!(clamp(-1.5, 0.0, 1.0), 0.0);
        assert!(equality_comparable!(str));
        assert!(totally_ordered!(str));
    }
}
