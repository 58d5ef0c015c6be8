use crate::error::{require, FormatError, TargetType};
use json_coerce_util::trim_invariant;
use json_element::{JsonElement, JsonValueKind};

/// Probe for a `bool`.
///
/// `true`/`false` literals map directly. String nodes match `"true"` or
/// `"false"` ignoring ASCII case and surrounding whitespace.
///
/// # Example
///
/// ```
/// use json_coerce::try_to_bool;
/// use json_element::JsonDocument;
///
/// let doc = JsonDocument::parse(r#"[true, "FALSE", "yes", 1]"#).unwrap();
/// let got: Vec<Option<bool>> = doc.root().items().map(try_to_bool).collect();
/// assert_eq!(got, vec![Some(true), Some(false), None, None]);
/// ```
pub fn try_to_bool(element: JsonElement<'_>) -> Option<bool> {
    match element.kind() {
        JsonValueKind::True => Some(true),
        JsonValueKind::False => Some(false),
        JsonValueKind::String => parse_bool_text(&element.string_value()?),
        _ => None,
    }
}

pub fn to_bool(element: JsonElement<'_>) -> Result<bool, FormatError> {
    require(element, TargetType::Bool, try_to_bool)
}

fn parse_bool_text(text: &str) -> Option<bool> {
    let trimmed = trim_invariant(text);
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_element::JsonDocument;

    fn probe(text: &str) -> Option<bool> {
        try_to_bool(JsonDocument::parse(text).unwrap().root())
    }

    #[test]
    fn test_literals() {
        assert_eq!(probe("true"), Some(true));
        assert_eq!(probe("false"), Some(false));
    }

    #[test]
    fn test_strings() {
        assert_eq!(probe(r#""true""#), Some(true));
        assert_eq!(probe(r#""TRUE""#), Some(true));
        assert_eq!(probe(r#""fAlSe""#), Some(false));
        assert_eq!(probe(r#"" true ""#), Some(true));
    }

    #[test]
    fn test_rejected() {
        for text in [r#""yes""#, r#""1""#, r#""""#, r#""truex""#, "1", "0", "null", "[]"] {
            assert_eq!(probe(text), None, "{}", text);
        }
    }

    #[test]
    fn test_to_bool_error() {
        let doc = JsonDocument::parse(r#""yes""#).unwrap();
        assert_eq!(
            to_bool(doc.root()),
            Err(FormatError::new(TargetType::Bool, JsonValueKind::String))
        );
    }
}
