use crate::error::FormatError;
use chrono::{DateTime, FixedOffset, Utc};
use json_element::JsonElement;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use uuid::Uuid;

/// Method-call access to every coercion.
///
/// ```
/// use json_coerce::ElementExt;
/// use json_element::JsonDocument;
///
/// let doc = JsonDocument::parse(r#"{"retries": "3", "verbose": "True"}"#).unwrap();
/// let root = doc.root();
/// assert_eq!(root.property("retries").to_int(), Ok(3));
/// assert_eq!(root.property("verbose").to_bool(), Ok(true));
/// assert!(root.property("timeout").is_null_or_undefined());
/// ```
pub trait ElementExt<'a> {
    fn is_null_or_undefined(&self) -> bool;

    fn try_to_int(&self) -> Option<i32>;
    fn to_int(&self) -> Result<i32, FormatError>;

    fn try_to_i64(&self) -> Option<i64>;
    fn to_i64(&self) -> Result<i64, FormatError>;

    fn try_to_f64(&self) -> Option<f64>;
    fn to_f64(&self) -> Result<f64, FormatError>;

    fn try_to_bool(&self) -> Option<bool>;
    fn to_bool(&self) -> Result<bool, FormatError>;

    fn try_to_guid(&self) -> Option<Uuid>;
    fn to_guid(&self) -> Result<Uuid, FormatError>;

    fn try_to_date_time(&self) -> Option<DateTime<Utc>>;
    fn to_date_time(&self) -> Result<DateTime<Utc>, FormatError>;

    fn try_to_date_time_offset(&self) -> Option<DateTime<FixedOffset>>;
    fn to_date_time_offset(&self) -> Result<DateTime<FixedOffset>, FormatError>;

    fn to_str(&self) -> Cow<'a, str>;

    fn to_value<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error>;
}

impl<'a> ElementExt<'a> for JsonElement<'a> {
    fn is_null_or_undefined(&self) -> bool {
        crate::is_null_or_undefined(*self)
    }

    fn try_to_int(&self) -> Option<i32> {
        crate::number::try_to_int(*self)
    }

    fn to_int(&self) -> Result<i32, FormatError> {
        crate::number::to_int(*self)
    }

    fn try_to_i64(&self) -> Option<i64> {
        crate::number::try_to_i64(*self)
    }

    fn to_i64(&self) -> Result<i64, FormatError> {
        crate::number::to_i64(*self)
    }

    fn try_to_f64(&self) -> Option<f64> {
        crate::number::try_to_f64(*self)
    }

    fn to_f64(&self) -> Result<f64, FormatError> {
        crate::number::to_f64(*self)
    }

    fn try_to_bool(&self) -> Option<bool> {
        crate::boolean::try_to_bool(*self)
    }

    fn to_bool(&self) -> Result<bool, FormatError> {
        crate::boolean::to_bool(*self)
    }

    fn try_to_guid(&self) -> Option<Uuid> {
        crate::guid::try_to_guid(*self)
    }

    fn to_guid(&self) -> Result<Uuid, FormatError> {
        crate::guid::to_guid(*self)
    }

    fn try_to_date_time(&self) -> Option<DateTime<Utc>> {
        crate::datetime::try_to_date_time(*self)
    }

    fn to_date_time(&self) -> Result<DateTime<Utc>, FormatError> {
        crate::datetime::to_date_time(*self)
    }

    fn try_to_date_time_offset(&self) -> Option<DateTime<FixedOffset>> {
        crate::datetime::try_to_date_time_offset(*self)
    }

    fn to_date_time_offset(&self) -> Result<DateTime<FixedOffset>, FormatError> {
        crate::datetime::to_date_time_offset(*self)
    }

    fn to_str(&self) -> Cow<'a, str> {
        crate::text::to_str(*self)
    }

    fn to_value<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        crate::structural::to_value(*self)
    }
}
