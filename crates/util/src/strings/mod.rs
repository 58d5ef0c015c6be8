//! String utilities.
//!
//! Provides invariant whitespace handling and identifier comparison.

mod fold;
mod util;

pub use fold::fold_eq;
pub use util::{is_invariant_whitespace, trim_invariant, CharPredicate};
