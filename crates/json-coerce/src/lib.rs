//! Typed coercions from loosely-typed JSON elements.
//!
//! Each accessor takes a borrowed [`JsonElement`], inspects its kind, and
//! either reads a typed value or reports failure:
//!
//! - `try_to_*` probes return `Option<T>` and never fail loudly.
//! - `to_*` accessors return `Result<T, FormatError>` and are thin wrappers
//!   over the probes, so both forms accept exactly the same inputs.
//! - [`to_str`] renders any element as text and never fails.
//! - [`to_value`] hands the element to serde with the web naming preset.
//!
//! | accessor | accepted kinds |
//! |---|---|
//! | [`to_int`], [`to_i64`], [`to_f64`] | Number, then numeric String |
//! | [`to_bool`] | True / False, then `"true"`/`"false"` String, any case |
//! | [`to_guid`] | String |
//! | [`to_date_time`], [`to_date_time_offset`] | String |
//!
//! All functions are pure; elements are `Copy` views tied to the lifetime of
//! their [`JsonDocument`](json_element::JsonDocument).
//!
//! # Example
//!
//! ```
//! use json_coerce::{is_null_or_undefined, to_guid, to_int, to_str, try_to_bool};
//! use json_element::JsonDocument;
//!
//! let doc = JsonDocument::parse(
//!     r#"{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","count":"12","flag":"TRUE","extra":null}"#,
//! )
//! .unwrap();
//! let root = doc.root();
//!
//! assert_eq!(to_int(root.property("count")), Ok(12));
//! assert_eq!(try_to_bool(root.property("flag")), Some(true));
//! assert_eq!(
//!     to_guid(root.property("id")).unwrap().to_string(),
//!     "3fa85f64-5717-4562-b3fc-2c963f66afa6"
//! );
//! assert!(is_null_or_undefined(root.property("extra")));
//! assert!(is_null_or_undefined(root.property("absent")));
//! assert_eq!(to_str(root.property("count")), "12");
//! ```

pub mod boolean;
pub mod datetime;
pub mod error;
pub mod ext;
pub mod guid;
pub mod number;
pub mod structural;
pub mod text;

// Re-export the core public API
pub use boolean::{to_bool, try_to_bool};
pub use datetime::{
    parse_date_time_offset, to_date_time, to_date_time_offset, try_to_date_time,
    try_to_date_time_offset,
};
pub use error::{FormatError, TargetType};
pub use ext::ElementExt;
pub use guid::{to_guid, try_to_guid};
pub use json_element::{JsonDocument, JsonElement, JsonValueKind};
pub use number::{to_f64, to_i64, to_int, try_to_f64, try_to_i64, try_to_int};
pub use structural::{to_value, to_value_or_default, WebDeserializer};
pub use text::to_str;

/// True iff the element is `null` or refers to nothing.
pub fn is_null_or_undefined(element: JsonElement<'_>) -> bool {
    element.kind().is_null_or_undefined()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null_or_undefined_per_kind() {
        let cases = [
            ("null", true),
            ("0", false),
            ("false", false),
            ("\"\"", false),
            ("[]", false),
            ("{}", false),
        ];
        for (text, expected) in cases {
            let doc = JsonDocument::parse(text).unwrap();
            assert_eq!(is_null_or_undefined(doc.root()), expected, "{}", text);
        }
        assert!(is_null_or_undefined(JsonElement::undefined()));
    }
}
