//! # Layer 0: Primitives
//!
//! Basic building blocks for the predicate system:
//! - `bool.rs`: Type-level boolean logic (Satisfied/Unsatisfied).
//! - `toolchain.rs`: What the build can rely on (std, alloc).
//! - `identity.rs`: Exact type identity (`same_as!`).
//! - `lifecycle.rs`: Destruction and construction from argument lists.

pub mod bool;
pub mod toolchain;
pub mod identity;
pub mod lifecycle;

// Re-export key types at this level
pub use bool::{Bool, Satisfied, Unsatisfied, SelectBool, Holds, If};
pub use toolchain::Toolchain;
pub use identity::SameAs;
pub use lifecycle::{
    Destructible, ConstructibleFrom, NothrowConstructibleFrom, HeapInit, trivially_destructible,
};
