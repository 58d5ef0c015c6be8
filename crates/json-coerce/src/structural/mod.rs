//! Structural deserialization with the fixed "web" preset.
//!
//! The preset binds JSON property names to Rust fields ignoring ASCII case and
//! `_` separators, so `userName`, `UserName` and `user_name` all populate a
//! `user_name` field. Numeric targets also accept JSON strings holding a
//! number. Everything else is plain serde_json behavior, and its errors are
//! returned unchanged.

mod web;

pub use web::WebDeserializer;

use json_element::JsonElement;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Deserialize an element into `T`.
///
/// Null and Undefined yield `Ok(None)` without consulting `T`.
///
/// # Example
///
/// ```
/// use json_coerce::to_value;
/// use json_element::JsonDocument;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Account {
///     account_id: u32,
///     display_name: String,
/// }
///
/// let doc = JsonDocument::parse(r#"{"AccountId": "7", "displayName": "Ada"}"#).unwrap();
/// let account: Option<Account> = to_value(doc.root()).unwrap();
/// assert_eq!(
///     account,
///     Some(Account { account_id: 7, display_name: "Ada".to_string() })
/// );
/// ```
pub fn to_value<T>(element: JsonElement<'_>) -> Result<Option<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    if element.kind().is_null_or_undefined() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(element.raw_text())?;
    T::deserialize(WebDeserializer::new(value)).map(Some)
}

/// Like [`to_value`], with `T::default()` for Null and Undefined.
pub fn to_value_or_default<T>(element: JsonElement<'_>) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    Ok(to_value(element)?.unwrap_or_default())
}
