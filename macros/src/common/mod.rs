// Common utilities shared by the user-facing macros
//
// This module contains:
// - bool_expr: Boolean expression parsing
// - naming: Concept name to predicate macro mapping

mod bool_expr;
mod naming;

pub use bool_expr::*;
pub use naming::*;
