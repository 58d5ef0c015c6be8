//! json-coerce-util - Invariant text helpers for json-coerce
//!
//! This crate holds the culture-invariant pieces shared by the element view and
//! the coercion layer: whitespace trimming, identifier folding for structural
//! field matching, and number rendering.

pub mod number;
pub mod strings;

// Re-exports for convenience
pub use number::{is_integer_lexeme, render_number};
pub use strings::{fold_eq, is_invariant_whitespace, trim_invariant, CharPredicate};
