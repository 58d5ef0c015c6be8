//! Owned, validated JSON text.

use crate::element::JsonElement;
use serde_json::value::RawValue;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
}

/// A parsed JSON document.
///
/// The document keeps the exact source text of its root value. Elements
/// borrowed from it via [`JsonDocument::root`] cannot outlive it.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    raw: Box<RawValue>,
}

impl JsonDocument {
    /// Parse and validate JSON text.
    ///
    /// # Example
    ///
    /// ```
    /// use json_element::{JsonDocument, JsonValueKind};
    ///
    /// let doc = JsonDocument::parse(r#" {"a": [1, 2]} "#).unwrap();
    /// assert_eq!(doc.root().kind(), JsonValueKind::Object);
    /// assert_eq!(doc.as_str(), r#"{"a": [1, 2]}"#);
    /// assert!(JsonDocument::parse("{").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let raw: Box<RawValue> = serde_json::from_str(text)?;
        Ok(Self { raw })
    }

    /// Parse and validate UTF-8 encoded JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DocumentError> {
        let raw: Box<RawValue> = serde_json::from_slice(bytes)?;
        Ok(Self { raw })
    }

    /// The root element.
    pub fn root(&self) -> JsonElement<'_> {
        JsonElement::from_raw(&self.raw)
    }

    /// The source text of the root value, without surrounding whitespace.
    pub fn as_str(&self) -> &str {
        self.raw.get()
    }
}

impl FromStr for JsonDocument {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsonValueKind;

    #[test]
    fn test_parse_scalar_roots() {
        for (text, kind) in [
            ("1", JsonValueKind::Number),
            ("\"s\"", JsonValueKind::String),
            ("true", JsonValueKind::True),
            ("null", JsonValueKind::Null),
        ] {
            let doc = JsonDocument::parse(text).unwrap();
            assert_eq!(doc.root().kind(), kind, "{}", text);
        }
    }

    #[test]
    fn test_parse_rejects_trailing_data() {
        assert!(JsonDocument::parse("1 2").is_err());
        assert!(JsonDocument::parse("").is_err());
    }

    #[test]
    fn test_from_slice() {
        let doc = JsonDocument::from_slice(b"[true]").unwrap();
        assert_eq!(doc.root().kind(), JsonValueKind::Array);
    }

    #[test]
    fn test_from_str() {
        let doc: JsonDocument = "{}".parse().unwrap();
        assert_eq!(doc.as_str(), "{}");
    }

    #[test]
    fn test_error_message() {
        let err = JsonDocument::parse("[1,").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON: "), "{}", err);
    }
}
