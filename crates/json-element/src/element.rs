//! Borrowed, kind-tagged views over JSON nodes.

use crate::de::{self, CowStr, Entries};
use crate::kind::JsonValueKind;
use crate::pointer::{parse_array_index, parse_json_pointer, PointerError};
use serde_json::value::RawValue;
use std::borrow::Cow;
use std::fmt;

/// A read-only view of one node inside a [`JsonDocument`](crate::JsonDocument).
///
/// The view is `Copy` and holds only a reference into the document's text, so
/// the borrow checker ties every element to the document it came from. An
/// element that refers to nothing has kind [`JsonValueKind::Undefined`].
///
/// Nothing is cached: [`get`](Self::get), [`get_index`](Self::get_index) and
/// [`len`](Self::len) each re-scan this node's text, which is linear in its
/// size but allocates only for escaped keys. Collect [`properties`](Self::properties)
/// or [`items`](Self::items) once when visiting many children of one node.
#[derive(Clone, Copy, Default)]
pub struct JsonElement<'a> {
    raw: Option<&'a RawValue>,
}

impl<'a> JsonElement<'a> {
    /// The element returned for missing properties, indices and pointers.
    pub const fn undefined() -> Self {
        Self { raw: None }
    }

    /// Wrap a raw JSON value that serde_json has already validated.
    pub fn from_raw(raw: &'a RawValue) -> Self {
        Self { raw: Some(raw) }
    }

    pub fn kind(&self) -> JsonValueKind {
        match self.raw {
            Some(raw) => JsonValueKind::of_raw(raw.get()),
            None => JsonValueKind::Undefined,
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.raw.is_none()
    }

    pub fn as_raw(&self) -> Option<&'a RawValue> {
        self.raw
    }

    /// The exact source text of this node; empty for `Undefined`.
    ///
    /// Objects and arrays keep their original spacing and member order.
    pub fn raw_text(&self) -> &'a str {
        self.raw.map_or("", RawValue::get)
    }

    /// The unescaped contents of a String node.
    ///
    /// Borrows from the document unless the source contains escapes. Returns
    /// `None` for other kinds, and for strings holding an unpaired surrogate
    /// escape, which has no UTF-8 form.
    pub fn string_value(&self) -> Option<Cow<'a, str>> {
        if self.kind() != JsonValueKind::String {
            return None;
        }
        serde_json::from_str::<CowStr<'a>>(self.raw_text())
            .ok()
            .map(|s| s.0)
    }

    /// The numeric lexeme of a Number node, exactly as written.
    pub fn number_text(&self) -> Option<&'a str> {
        match self.kind() {
            JsonValueKind::Number => Some(self.raw_text()),
            _ => None,
        }
    }

    /// Object members in source order; empty for every other kind.
    pub fn properties(&self) -> Properties<'a> {
        let entries = match self.kind() {
            JsonValueKind::Object => serde_json::from_str::<Entries<'a>>(self.raw_text())
                .map(|e| e.0)
                .unwrap_or_default(),
            _ => Vec::new(),
        };
        Properties {
            inner: entries.into_iter(),
        }
    }

    /// Array items in order; empty for every other kind.
    pub fn items(&self) -> Items<'a> {
        let items = match self.kind() {
            JsonValueKind::Array => {
                serde_json::from_str::<Vec<&'a RawValue>>(self.raw_text()).unwrap_or_default()
            }
            _ => Vec::new(),
        };
        Items {
            inner: items.into_iter(),
        }
    }

    /// Number of members or items; zero for scalars.
    pub fn len(&self) -> usize {
        match self.kind() {
            JsonValueKind::Object | JsonValueKind::Array => de::child_count(self.raw_text()),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up an object member. When a name repeats, the last one wins.
    ///
    /// # Example
    ///
    /// ```
    /// use json_element::JsonDocument;
    ///
    /// let doc = JsonDocument::parse(r#"{"a":1,"a":2}"#).unwrap();
    /// assert_eq!(doc.root().get("a").unwrap().raw_text(), "2");
    /// assert!(doc.root().get("b").is_none());
    /// ```
    pub fn get(&self, name: &str) -> Option<JsonElement<'a>> {
        match self.kind() {
            JsonValueKind::Object => {
                de::last_member(self.raw_text(), name).map(JsonElement::from_raw)
            }
            _ => None,
        }
    }

    /// Like [`get`](Self::get), but yields `Undefined` instead of `None`.
    pub fn property(&self, name: &str) -> JsonElement<'a> {
        self.get(name).unwrap_or_default()
    }

    pub fn get_index(&self, index: usize) -> Option<JsonElement<'a>> {
        match self.kind() {
            JsonValueKind::Array => de::nth_item(self.raw_text(), index).map(JsonElement::from_raw),
            _ => None,
        }
    }

    /// Like [`get_index`](Self::get_index), but yields `Undefined` instead of `None`.
    pub fn index(&self, index: usize) -> JsonElement<'a> {
        self.get_index(index).unwrap_or_default()
    }

    /// Resolve a JSON Pointer (RFC 6901) relative to this element.
    ///
    /// A malformed pointer is an error; a well-formed pointer that leads
    /// nowhere resolves to `Undefined`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_element::{JsonDocument, JsonValueKind};
    ///
    /// let doc = JsonDocument::parse(r#"{"a/b":[10,{"c":true}]}"#).unwrap();
    /// let root = doc.root();
    /// assert_eq!(root.pointer("/a~1b/1/c").unwrap().kind(), JsonValueKind::True);
    /// assert_eq!(root.pointer("/a~1b/2").unwrap().kind(), JsonValueKind::Undefined);
    /// assert!(root.pointer("a").is_err());
    /// ```
    pub fn pointer(&self, pointer: &str) -> Result<JsonElement<'a>, PointerError> {
        let tokens = parse_json_pointer(pointer)?;
        let mut current = *self;
        for token in &tokens {
            current = match current.kind() {
                JsonValueKind::Object => current.property(token),
                JsonValueKind::Array => match parse_array_index(token) {
                    Some(i) => current.index(i),
                    None => JsonElement::undefined(),
                },
                _ => JsonElement::undefined(),
            };
            if current.is_undefined() {
                break;
            }
        }
        Ok(current)
    }
}

impl fmt::Debug for JsonElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonElement")
            .field("kind", &self.kind())
            .field("raw", &self.raw_text())
            .finish()
    }
}

/// Iterator over object members, see [`JsonElement::properties`].
pub struct Properties<'a> {
    inner: std::vec::IntoIter<(Cow<'a, str>, &'a RawValue)>,
}

impl<'a> Iterator for Properties<'a> {
    type Item = (Cow<'a, str>, JsonElement<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, raw)| (key, JsonElement::from_raw(raw)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Properties<'_> {}

/// Iterator over array items, see [`JsonElement::items`].
pub struct Items<'a> {
    inner: std::vec::IntoIter<&'a RawValue>,
}

impl<'a> Iterator for Items<'a> {
    type Item = JsonElement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(JsonElement::from_raw)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Items<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsonDocument;

    #[test]
    fn test_undefined() {
        let el = JsonElement::undefined();
        assert_eq!(el.kind(), JsonValueKind::Undefined);
        assert_eq!(el.raw_text(), "");
        assert!(el.is_empty());
        assert_eq!(el.string_value(), None);
    }

    #[test]
    fn test_string_value_unescapes() {
        let doc = JsonDocument::parse(r#""tab\there é""#).unwrap();
        assert_eq!(doc.root().string_value().unwrap(), "tab\there é");
    }

    #[test]
    fn test_string_value_lone_surrogate() {
        let doc = JsonDocument::parse(r#""\ud800""#).unwrap();
        assert_eq!(doc.root().kind(), JsonValueKind::String);
        assert_eq!(doc.root().string_value(), None);
    }

    #[test]
    fn test_number_text_is_verbatim() {
        let doc = JsonDocument::parse("[1.50, -0, 1E+2]").unwrap();
        let lexemes: Vec<&str> = doc
            .root()
            .items()
            .filter_map(|el| el.number_text())
            .collect();
        assert_eq!(lexemes, vec!["1.50", "-0", "1E+2"]);
    }

    #[test]
    fn test_properties_on_scalar_is_empty() {
        let doc = JsonDocument::parse("42").unwrap();
        assert_eq!(doc.root().properties().count(), 0);
        assert_eq!(doc.root().items().count(), 0);
        assert_eq!(doc.root().len(), 0);
    }

    #[test]
    fn test_nested_raw_text_keeps_spacing() {
        let doc = JsonDocument::parse(r#"{"outer": { "a" : 1 } }"#).unwrap();
        assert_eq!(doc.root().property("outer").raw_text(), r#"{ "a" : 1 }"#);
    }

    #[test]
    fn test_index() {
        let doc = JsonDocument::parse(r#"["x", null]"#).unwrap();
        let root = doc.root();
        assert_eq!(root.len(), 2);
        assert_eq!(root.index(1).kind(), JsonValueKind::Null);
        assert_eq!(root.index(2).kind(), JsonValueKind::Undefined);
    }

    #[test]
    fn test_lookups_agree_with_iteration() {
        let doc = JsonDocument::parse(r#"{"k":[0,{"a":1,"a":2},"x"],"k":[5,6]}"#).unwrap();
        let root = doc.root();
        assert_eq!(root.len(), root.properties().count());
        let last = root.properties().filter(|(k, _)| k == "k").last().unwrap().1;
        assert_eq!(root.property("k").raw_text(), last.raw_text());

        let first = doc.root().properties().next().unwrap().1;
        for (i, item) in first.items().enumerate() {
            assert_eq!(first.index(i).raw_text(), item.raw_text());
        }
        assert_eq!(first.len(), 3);
        assert_eq!(first.index(1).property("a").raw_text(), "2");
        assert!(first.get("a").is_none());
        assert!(root.get_index(0).is_none());
    }

    #[test]
    fn test_pointer_root() {
        let doc = JsonDocument::parse("[1]").unwrap();
        assert_eq!(doc.root().pointer("").unwrap().raw_text(), "[1]");
    }

    #[test]
    fn test_pointer_through_scalar_is_undefined() {
        let doc = JsonDocument::parse(r#"{"a":1}"#).unwrap();
        assert!(doc.root().pointer("/a/b").unwrap().is_undefined());
    }

    #[test]
    fn test_debug_shows_kind() {
        let doc = JsonDocument::parse("true").unwrap();
        let dbg = format!("{:?}", doc.root());
        assert!(dbg.contains("True"), "{}", dbg);
    }
}
