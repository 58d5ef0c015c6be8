//! Date-time coercions.
//!
//! Parsing runs in two tiers. The strict tier accepts the ISO-8601 extended
//! profile:
//!
//! ```text
//! YYYY-MM-DD
//! YYYY-MM-DDThh:mm[:ss[.f{1,16}]][Z|±hh:mm]
//! ```
//!
//! When that fails, the fallback tier trims surrounding whitespace and tries a
//! fixed list of grammars in order: RFC 3339, RFC 2822, then the entries of
//! [`FALLBACK_OFFSET_FORMATS`], [`FALLBACK_NAIVE_FORMATS`] and
//! [`FALLBACK_DATE_FORMATS`]. Nothing depends on the host locale.
//!
//! Text without an offset is taken as UTC.

use crate::error::{require, FormatError, TargetType};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use json_coerce_util::trim_invariant;
use json_element::{JsonElement, JsonValueKind};
use regex::Regex;
use std::sync::OnceLock;

/// Fallback formats that carry a compact `±hhmm` offset.
pub const FALLBACK_OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Fallback formats with a time and no offset.
pub const FALLBACK_NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Fallback formats with a date only; the time is midnight.
pub const FALLBACK_DATE_FORMATS: &[&str] = &["%Y/%m/%d"];

/// Probe for a UTC instant. Only String nodes qualify.
///
/// Offset-bearing text is converted to the instant it names.
///
/// # Example
///
/// ```
/// use json_coerce::try_to_date_time;
/// use json_element::JsonDocument;
///
/// let doc = JsonDocument::parse(r#""2024-01-15T12:30:00+02:00""#).unwrap();
/// let dt = try_to_date_time(doc.root()).unwrap();
/// assert_eq!(dt.to_rfc3339(), "2024-01-15T10:30:00+00:00");
/// ```
pub fn try_to_date_time(element: JsonElement<'_>) -> Option<DateTime<Utc>> {
    try_to_date_time_offset(element).map(|dt| dt.with_timezone(&Utc))
}

pub fn to_date_time(element: JsonElement<'_>) -> Result<DateTime<Utc>, FormatError> {
    require(element, TargetType::DateTime, try_to_date_time)
}

/// Probe for a date-time with its written offset. Only String nodes qualify.
///
/// The offset defaults to `+00:00` when the text has none.
pub fn try_to_date_time_offset(element: JsonElement<'_>) -> Option<DateTime<FixedOffset>> {
    if element.kind() != JsonValueKind::String {
        return None;
    }
    parse_date_time_offset(&element.string_value()?)
}

pub fn to_date_time_offset(
    element: JsonElement<'_>,
) -> Result<DateTime<FixedOffset>, FormatError> {
    require(element, TargetType::DateTimeOffset, try_to_date_time_offset)
}

/// Parse date-time text with both tiers.
pub fn parse_date_time_offset(text: &str) -> Option<DateTime<FixedOffset>> {
    let parsed = match parse_iso8601(text) {
        Some(parsed) => parsed,
        None => {
            tracing::trace!(text, "strict ISO-8601 parse failed, trying fallback grammars");
            parse_fallback(text)?
        }
    };
    parsed.into_fixed()
}

/// A wall-clock reading and the offset written next to it, if any.
struct Parsed {
    local: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl Parsed {
    fn naive(local: NaiveDateTime) -> Self {
        Self {
            local,
            offset: None,
        }
    }

    fn into_fixed(self) -> Option<DateTime<FixedOffset>> {
        let offset = self.offset.unwrap_or_else(|| Utc.fix());
        offset.from_local_datetime(&self.local).single()
    }
}

impl From<DateTime<FixedOffset>> for Parsed {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self {
            local: dt.naive_local(),
            offset: Some(*dt.offset()),
        }
    }
}

fn iso8601_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^([0-9]{4})-([0-9]{2})-([0-9]{2})",
            r"(?:T([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:\.([0-9]{1,16}))?)?",
            r"(Z|[+-][0-9]{2}:[0-9]{2})?)?$",
        ))
        .expect("ISO-8601 pattern is valid")
    })
}

fn parse_iso8601(text: &str) -> Option<Parsed> {
    let caps = iso8601_regex().captures(text)?;
    let field = |i: usize| -> Option<u32> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };
    let date = NaiveDate::from_ymd_opt(caps[1].parse().ok()?, field(2)?, field(3)?)?;
    let nanos = caps.get(7).map_or(0, |m| fraction_nanos(m.as_str()));
    let time = NaiveTime::from_hms_nano_opt(field(4)?, field(5)?, field(6)?, nanos)?;
    let offset = match caps.get(8) {
        Some(m) => Some(parse_offset(m.as_str())?),
        None => None,
    };
    Some(Parsed {
        local: date.and_time(time),
        offset,
    })
}

/// ASCII fraction digits to nanoseconds; digits past the ninth are dropped.
fn fraction_nanos(digits: &str) -> u32 {
    let mut nanos = 0;
    let mut scale = 100_000_000;
    for b in digits.bytes().take(9) {
        nanos += u32::from(b - b'0') * scale;
        scale /= 10;
    }
    nanos
}

/// `Z` or `±hh:mm`, as matched by the strict pattern.
fn parse_offset(text: &str) -> Option<FixedOffset> {
    if text == "Z" {
        return Some(Utc.fix());
    }
    let sign = if text.starts_with('-') { -1 } else { 1 };
    let hours: i32 = text.get(1..3)?.parse().ok()?;
    let minutes: i32 = text.get(4..6)?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn parse_fallback(text: &str) -> Option<Parsed> {
    let text = trim_invariant(text);
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.into());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.into());
    }
    for format in FALLBACK_OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Some(dt.into());
        }
    }
    for format in FALLBACK_NAIVE_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Parsed::naive(local));
        }
    }
    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(Parsed::naive(date.and_hms_opt(0, 0, 0)?));
        }
    }
    None
}
