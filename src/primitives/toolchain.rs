//! Build-wide capability table.
//!
//! Every flag is resolved once, from Cargo features, when the crate is
//! compiled. Primitive predicates consult this table; composite predicates
//! never branch on the build environment themselves.

/// Which library layers this build links against.
#[derive(Debug, Clone, Copy)]
pub struct Toolchain;

impl Toolchain {
    /// The full standard library is available (`std` feature).
    pub const HAS_STD: bool = cfg!(feature = "std");

    /// Heap allocation is available (`alloc` feature, implied by `std`).
    ///
    /// `default_initializable!` probes the heap form `Box<T>: Default` only
    /// when this holds, and falls back to the value form otherwise.
    pub const HAS_ALLOC: bool = cfg!(feature = "alloc");
}
