use json_coerce_util::render_number;
use json_element::{JsonElement, JsonValueKind};
use std::borrow::Cow;

/// Render any element as text. Never fails.
///
/// | kind | result |
/// |---|---|
/// | String | the unescaped value, without quotes |
/// | Number | invariant rendering of the lexeme, see [`render_number`] |
/// | True / False | `"true"` / `"false"` |
/// | Null / Undefined | `""` |
/// | Object / Array | the exact source text of the node |
///
/// Only escaped strings and re-rendered numbers allocate.
///
/// # Example
///
/// ```
/// use json_coerce::to_str;
/// use json_element::JsonDocument;
///
/// let doc = JsonDocument::parse(r#"{"s":"hi","n":1.50,"o":{"a":1},"z":null}"#).unwrap();
/// let root = doc.root();
/// assert_eq!(to_str(root.property("s")), "hi");
/// assert_eq!(to_str(root.property("n")), "1.5");
/// assert_eq!(to_str(root.property("o")), r#"{"a":1}"#);
/// assert_eq!(to_str(root.property("z")), "");
/// ```
pub fn to_str<'a>(element: JsonElement<'a>) -> Cow<'a, str> {
    match element.kind() {
        JsonValueKind::String => element
            .string_value()
            .unwrap_or_else(|| Cow::Borrowed(unquoted(element.raw_text()))),
        JsonValueKind::Number => render_number(element.raw_text()),
        JsonValueKind::True => Cow::Borrowed("true"),
        JsonValueKind::False => Cow::Borrowed("false"),
        JsonValueKind::Null | JsonValueKind::Undefined => Cow::Borrowed(""),
        JsonValueKind::Object | JsonValueKind::Array => Cow::Borrowed(element.raw_text()),
    }
}

/// Escaped source contents of a string that has no UTF-8 decoding.
fn unquoted(raw: &str) -> &str {
    tracing::trace!(raw, "string has no UTF-8 form, rendering escaped source");
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}
