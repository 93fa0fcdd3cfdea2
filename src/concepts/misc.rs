//! Integral and conversion predicates.

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types.
///
/// `bool` and `char` are not integers in Rust and are not included.
pub trait Integral: sealed::Sealed + Copy + Eq + Ord {}

macro_rules! impl_integral {
    ($($T:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $T {}
            impl Integral for $T {}
        )*
    };
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// True iff `T` is a primitive integer type.
#[macro_export]
macro_rules! integral {
    ($T:ty $(,)?) => {
        $crate::__probe!(INTEGRAL, $T)
    };
}

/// True iff a `From` value converts into `To`.
#[macro_export]
macro_rules! convertible_to {
    ($From:ty, $To:ty $(,)?) => {
        $crate::__probe!(CONVERTIBLE_TO, $From, $To)
    };
}

/// True iff a `T` can be used as a condition, i.e. converts into `bool`.
#[macro_export]
macro_rules! boolean_testable {
    ($T:ty $(,)?) => {
        $crate::convertible_to!($T, bool)
    };
}
