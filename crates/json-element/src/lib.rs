//! Borrowed, kind-tagged views over parsed JSON text.
//!
//! A [`JsonDocument`] owns validated JSON text. A [`JsonElement`] is a `Copy`
//! view of one node inside it, tagged with a [`JsonValueKind`] and exposing
//! the node's raw pieces: the unescaped string, the numeric lexeme, the exact
//! source substring, and child iteration.
//!
//! # Example
//!
//! ```
//! use json_element::{JsonDocument, JsonValueKind};
//!
//! let doc = JsonDocument::parse(r#"{"id": 7, "tags": ["a", "b"]}"#).unwrap();
//! let root = doc.root();
//!
//! assert_eq!(root.property("id").number_text(), Some("7"));
//! assert_eq!(root.property("tags").len(), 2);
//! assert_eq!(root.property("missing").kind(), JsonValueKind::Undefined);
//! assert_eq!(root.pointer("/tags/1").unwrap().string_value().unwrap(), "b");
//! ```

mod de;
pub mod document;
pub mod element;
pub mod kind;
pub mod pointer;

pub use document::{DocumentError, JsonDocument};
pub use element::{Items, JsonElement, Properties};
pub use kind::JsonValueKind;
pub use pointer::PointerError;
