use crate::error::{require, FormatError, TargetType};
use json_coerce_util::trim_invariant;
use json_element::{JsonElement, JsonValueKind};
use uuid::Uuid;

/// Probe for a UUID. Only String nodes qualify.
///
/// Hyphenated, simple (32 hex digits), braced and `urn:uuid:` forms are
/// accepted in either letter case, with surrounding whitespace ignored.
pub fn try_to_guid(element: JsonElement<'_>) -> Option<Uuid> {
    if element.kind() != JsonValueKind::String {
        return None;
    }
    let text = element.string_value()?;
    Uuid::parse_str(trim_invariant(&text)).ok()
}

pub fn to_guid(element: JsonElement<'_>) -> Result<Uuid, FormatError> {
    require(element, TargetType::Guid, try_to_guid)
}
