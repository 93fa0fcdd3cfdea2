//! Movability, regularity and comparison on concrete types.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::rc::Rc;
use std::sync::Mutex;

use tola_concepts::prelude::*;
use tola_concepts::{equality_comparable_with, partially_ordered_with};

// ============================================================================
// Type definitions
// ============================================================================

/// Movable but never duplicated.
#[allow(dead_code)]
struct MoveOnly(Box<u8>);

/// Clone but no default.
#[allow(dead_code)]
#[derive(Clone, PartialEq)]
struct Named(&'static str);

/// Everything but comparison.
#[allow(dead_code)]
#[derive(Clone, Default)]
struct Config {
    retries: u8,
}

/// Equality only.
#[allow(dead_code)]
#[derive(Clone, Default, PartialEq)]
struct Tag(u8);

/// Full ordering.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct Rank(u8);

// ============================================================================
// Movable / Copyable
// ============================================================================

#[test]
fn test_movable() {
    assert!(movable!(MoveOnly));
    assert!(movable!(Mutex<u8>));
    assert!(movable!(String));
    assert!(movable!(&str));
    assert!(!movable!(str));
    assert!(!movable!([u8]));
}

#[test]
fn test_copyable() {
    assert!(copyable!(u8));
    assert!(copyable!(Named));
    assert!(copyable!(Rc<RefCell<u8>>));
    assert!(copyable!(&MoveOnly));
    assert!(!copyable!(MoveOnly));
    assert!(!copyable!(Mutex<u8>));
    assert!(!copyable!(&mut u8));
}

#[test]
fn test_movable_is_weaker_than_copyable() {
    const MOVE_ONLY: (bool, bool) = (movable!(MoveOnly), copyable!(MoveOnly));
    assert_eq!(MOVE_ONLY, (true, false));
}

// ============================================================================
// Semiregular / Regular
// ============================================================================

#[test]
fn test_semiregular() {
    assert!(semiregular!(Config));
    assert!(semiregular!(HashMap<String, u8>));
    assert!(!semiregular!(Named));
    assert!(!semiregular!(MoveOnly));
}

#[test]
fn test_regular() {
    assert!(regular!(u64));
    assert!(regular!(Tag));
    assert!(regular!(BTreeMap<u8, String>));
    assert!(!regular!(Config));
    assert!(!regular!(Named));
    assert!(!regular!(File));
}

#[test]
fn test_bound_level_regular() {
    fn dedup_against_default<T: Regular>(values: Vec<T>) -> Vec<T> {
        let blank = T::default();
        values.into_iter().filter(|v| *v != blank).collect()
    }

    assert_eq!(dedup_against_default(vec![Rank(0), Rank(3), Rank(0)]), vec![Rank(3)]);
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn test_equality_comparable() {
    assert!(equality_comparable!(Tag));
    assert!(equality_comparable!(str));
    assert!(equality_comparable!(f64));
    assert!(!equality_comparable!(Config));
    assert!(!equality_comparable!(File));
}

#[test]
fn test_equality_comparable_with_needs_both_orders() {
    assert!(equality_comparable_with!(String, str));
    assert!(equality_comparable_with!(String, &str));
    assert!(!equality_comparable_with!(u8, u16));
}

#[test]
fn test_totally_ordered() {
    assert!(totally_ordered!(Rank));
    assert!(totally_ordered!(String));
    assert!(totally_ordered!(f64));
    assert!(!totally_ordered!(Tag));
    assert!(!totally_ordered!(Config));
}

#[test]
fn test_partially_ordered_with() {
    assert!(partially_ordered_with!(Rank, Rank));
    assert!(!partially_ordered_with!(Rank, u8));
}
