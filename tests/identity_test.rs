//! Identity, membership, shape matching, decay and conversions.

use std::borrow::Cow;
use std::fmt::Debug;
use std::iter::Peekable;
use std::marker::PhantomData;
use std::rc::Rc;

use tola_concepts::{
    all_of, boolean_testable, convertible_to, decay_copy, decay_copyable, decays_to, integral,
    is_instance_of, is_not_instance_of, is_reference, movable_value, none_of,
    nothrow_constructible_from, nothrow_decay_copyable, one_of, same_as,
};

// ============================================================================
// Type definitions
// ============================================================================

/// Same arity as `Option`, different constructor.
#[allow(dead_code)]
struct Maybe<T>(Option<T>);

#[allow(dead_code)]
struct Tagged<T, const N: usize>(PhantomData<T>);

/// Usable as a condition.
struct Flag(bool);

impl From<Flag> for bool {
    fn from(flag: Flag) -> bool {
        flag.0
    }
}

type Meters = f64;

// ============================================================================
// Identity and membership
// ============================================================================

#[test]
fn test_same_as_sees_through_aliases() {
    assert!(same_as!(Meters, f64));
    assert!(same_as!(Vec<Meters>, Vec<f64>));
    assert!(!same_as!(Meters, f32));
    assert!(!same_as!(&u8, &mut u8));
}

#[test]
fn test_one_of() {
    assert!(one_of!(i32, u8, i32, f64));
    assert!(!one_of!(i64, u8, i32, f64));
    assert!(one_of!(Meters, f32, f64));
}

#[test]
fn test_all_of_and_none_of() {
    assert!(all_of!(u8, u8, u8));
    assert!(!all_of!(u8, u8, i8));
    assert!(none_of!(String, &str, Box<str>));
    assert!(!none_of!(String, &str, String));
}

#[test]
fn test_membership_in_const_context() {
    const NUMERIC: bool = one_of!(u16, u8, u16, u32);
    assert!(NUMERIC);
}

// ============================================================================
// Shape matching
// ============================================================================

#[test]
fn test_instance_of_constructor() {
    assert!(is_instance_of!(Option<u8>, Option<_>));
    assert!(is_instance_of!(Option<Vec<String>>, Option<_>));
    assert!(!is_instance_of!(Vec<u8>, Option<_>));
    assert!(!is_instance_of!(Maybe<u8>, Option<_>));
    assert!(is_instance_of!(Maybe<u8>, Maybe<_>));
}

#[test]
fn test_instance_of_partial_shapes() {
    assert!(is_instance_of!(Result<u8, String>, Result<_, String>));
    assert!(!is_instance_of!(Result<u8, ()>, Result<_, String>));
    assert!(is_instance_of!(Result<Vec<u8>, ()>, Result<Vec<_>, _>));
    assert!(is_instance_of!(Cow<'static, str>, Cow<'_, str>));
}

#[test]
fn test_instance_of_rejects_plain_types() {
    assert!(!is_instance_of!(u8, Option<_>));
    assert!(is_not_instance_of!(u8, Option<_>));
    assert!(!is_not_instance_of!(Option<()>, Option<_>));
}

#[test]
fn test_instance_of_const_parameters_are_part_of_the_shape() {
    assert!(is_instance_of!(Tagged<u8, 4>, Tagged<_, 4>));
    assert!(!is_instance_of!(Tagged<u8, 4>, Tagged<_, 8>));
}

#[test]
fn test_instance_of_bounded_constructors() {
    type Lookahead = Peekable<std::vec::IntoIter<u8>>;

    assert!(is_instance_of!(Lookahead, Peekable<_: Iterator>));
    assert!(!is_instance_of!(u8, Peekable<_: Iterator>));
    assert!(!is_instance_of!(Option<Lookahead>, Peekable<_: Iterator>));

    assert!(is_instance_of!(Cow<'static, [u8]>, Cow<'_, _: ?Sized + ToOwned>));
    assert!(is_instance_of!(Cow<'static, str>, Cow<'_, _: ?Sized + ToOwned>));
    assert!(!is_instance_of!(String, Cow<'_, _: ?Sized + ToOwned>));
}

#[test]
fn test_instance_of_unsized_holes() {
    assert!(is_instance_of!(Box<str>, Box<_: ?Sized>));
    assert!(is_instance_of!(Box<dyn Debug>, Box<_: ?Sized>));
    assert!(is_instance_of!(Box<u8>, Box<_: ?Sized>));
    assert!(is_instance_of!(Rc<[u8]>, Rc<_: ?Sized>));
    assert!(!is_instance_of!(Vec<u8>, Box<_: ?Sized>));

    // A bare hole stays sized.
    assert!(!is_instance_of!(Box<str>, Box<_>));
    assert!(is_instance_of!(Box<u8>, Box<_>));
}

#[test]
fn test_instance_of_mixed_holes() {
    assert!(is_instance_of!(Result<Box<str>, u8>, Result<Box<_: ?Sized>, _>));
    assert!(!is_instance_of!(Result<Box<str>, u8>, Result<Box<_>, _>));
}

// ============================================================================
// Decay
// ============================================================================

#[test]
fn test_reference_detection() {
    assert!(is_reference!(&u8));
    assert!(is_reference!(&mut str));
    assert!(!is_reference!(u8));
    assert!(!is_reference!(Box<u8>));
}

#[test]
fn test_decay_copyable() {
    assert!(decay_copyable!(String));
    assert!(decay_copyable!(&String));
    assert!(decay_copyable!(&mut Vec<u8>));
    assert!(!decay_copyable!(&str));
    assert!(!decay_copyable!(str));
}

#[test]
fn test_nothrow_decay_copyable() {
    assert!(nothrow_decay_copyable!(String));
    assert!(nothrow_decay_copyable!(&u64));
    assert!(!nothrow_decay_copyable!(&String));
}

#[test]
fn test_nothrow_constructible_from() {
    assert!(nothrow_constructible_from!(String, String));
    assert!(nothrow_constructible_from!(u64, &u64));
    assert!(nothrow_constructible_from!(u64, &mut u64));
    assert!(!nothrow_constructible_from!(String, &String));
    assert!(!nothrow_constructible_from!(u64, u32));
    assert!(!nothrow_constructible_from!(String));
    assert!(!nothrow_constructible_from!(str, str));
}

#[test]
fn test_nothrow_decay_copy_agrees_with_construction() {
    assert_eq!(
        nothrow_decay_copyable!(&u64),
        nothrow_constructible_from!(u64, &u64)
    );
    assert_eq!(
        nothrow_decay_copyable!(&String),
        nothrow_constructible_from!(String, &String)
    );
    assert_eq!(
        nothrow_decay_copyable!(Vec<u8>),
        nothrow_constructible_from!(Vec<u8>, Vec<u8>)
    );
}

#[test]
fn test_movable_value() {
    assert!(movable_value!(String));
    assert!(movable_value!(&String));
    assert!(movable_value!(&mut Vec<u8>));
    assert!(movable_value!(std::sync::Mutex<u8>));
    assert!(!movable_value!(&std::sync::Mutex<u8>));
    assert!(!movable_value!(&str));
    assert!(!movable_value!([u8]));
}

#[test]
fn test_decays_to() {
    assert!(decays_to!(&String, String));
    assert!(decays_to!(&mut u8, u8));
    assert!(decays_to!(u8, u8));
    assert!(!decays_to!(&&u8, u8));
    assert!(decays_to!(&&u8, &u8));
}

#[test]
fn test_decay_copy_value() {
    let words = vec!["a".to_string(), "b".to_string()];
    let owned: Vec<String> = decay_copy(&words);
    drop(words);
    assert_eq!(owned.len(), 2);
}

// ============================================================================
// Integral and conversions
// ============================================================================

#[test]
fn test_integral() {
    assert!(integral!(u8));
    assert!(integral!(isize));
    assert!(integral!(i128));
    assert!(!integral!(bool));
    assert!(!integral!(char));
    assert!(!integral!(f32));
}

#[test]
fn test_convertible_to() {
    assert!(convertible_to!(u8, u32));
    assert!(convertible_to!(&str, String));
    assert!(!convertible_to!(u32, u8));
}

#[test]
fn test_boolean_testable() {
    assert!(boolean_testable!(bool));
    assert!(boolean_testable!(Flag));
    assert!(!boolean_testable!(u8));
}
