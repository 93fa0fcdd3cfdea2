//! Membership over a closed set of alternatives.
//!
//! Each candidate is compared with [`same_as!`](crate::same_as). With no
//! candidates, `one_of!` is false and `all_of!` / `none_of!` are true.

/// True iff `T` is one of the candidates.
///
/// ```
/// use tola_concepts::one_of;
///
/// assert!(one_of!(i32, i32, f64));
/// assert!(!one_of!(i32, f32, f64));
/// ```
#[macro_export]
macro_rules! one_of {
    ($T:ty $(, $U:ty)* $(,)?) => {
        (false $(|| $crate::same_as!($T, $U))*)
    };
}

/// True iff every candidate is `T`.
#[macro_export]
macro_rules! all_of {
    ($T:ty $(, $U:ty)* $(,)?) => {
        (true $(&& $crate::same_as!($T, $U))*)
    };
}

/// True iff no candidate is `T`.
#[macro_export]
macro_rules! none_of {
    ($T:ty $(, $U:ty)* $(,)?) => {
        (true $(&& !$crate::same_as!($T, $U))*)
    };
}

/// Negation of [`is_instance_of!`](crate::is_instance_of).
#[macro_export]
macro_rules! is_not_instance_of {
    ($($input:tt)*) => {
        (!$crate::is_instance_of!($($input)*))
    };
}
