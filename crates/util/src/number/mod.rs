//! Invariant number rendering.
//!
//! JSON numbers are kept as their source lexeme until a caller asks for text;
//! these helpers turn a lexeme into the shortest invariant form.

mod render;

pub use render::{is_integer_lexeme, render_number};
