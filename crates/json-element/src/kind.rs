//! The closed set of JSON node kinds.

use std::fmt;

/// Syntactic kind of a JSON node.
///
/// `Undefined` is not a JSON value; it tags the element returned for a
/// missing property, an out-of-range index, or an unresolved pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JsonValueKind {
    #[default]
    Undefined,
    Object,
    Array,
    String,
    Number,
    True,
    False,
    Null,
}

impl JsonValueKind {
    /// Classify raw JSON text by its first significant byte.
    ///
    /// The text must already be a validated JSON value; anything that is not
    /// a structural or literal marker is classified as a number.
    pub fn of_raw(raw: &str) -> Self {
        match raw.trim_start().as_bytes().first() {
            None => JsonValueKind::Undefined,
            Some(b'{') => JsonValueKind::Object,
            Some(b'[') => JsonValueKind::Array,
            Some(b'"') => JsonValueKind::String,
            Some(b't') => JsonValueKind::True,
            Some(b'f') => JsonValueKind::False,
            Some(b'n') => JsonValueKind::Null,
            Some(_) => JsonValueKind::Number,
        }
    }

    /// Lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonValueKind::Undefined => "undefined",
            JsonValueKind::Object => "object",
            JsonValueKind::Array => "array",
            JsonValueKind::String => "string",
            JsonValueKind::Number => "number",
            JsonValueKind::True => "true",
            JsonValueKind::False => "false",
            JsonValueKind::Null => "null",
        }
    }

    /// Returns true for `Null` and `Undefined`.
    pub fn is_null_or_undefined(&self) -> bool {
        matches!(self, JsonValueKind::Null | JsonValueKind::Undefined)
    }

    /// Returns true for `Object` and `Array`.
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValueKind::Object | JsonValueKind::Array)
    }
}

impl fmt::Display for JsonValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
