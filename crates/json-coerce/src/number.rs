//! Integer and floating-point coercions.
//!
//! A Number node is read from its lexeme without allocating. A String node is
//! accepted when its whole content, less surrounding invariant whitespace,
//! matches the numeric grammar of the target.

use crate::error::{require, FormatError, TargetType};
use json_coerce_util::trim_invariant;
use json_element::{JsonElement, JsonValueKind};
use std::str::FromStr;

/// Probe for an `i32`.
///
/// Number nodes must be plain integers in range (`1.0` and `1e2` are
/// rejected). String nodes accept optional whitespace, an optional sign and
/// ASCII digits, nothing else.
///
/// # Example
///
/// ```
/// use json_coerce::try_to_int;
/// use json_element::JsonDocument;
///
/// let doc = JsonDocument::parse(r#"[42, " -7 ", "123abc", 1.5]"#).unwrap();
/// let got: Vec<Option<i32>> = doc.root().items().map(try_to_int).collect();
/// assert_eq!(got, vec![Some(42), Some(-7), None, None]);
/// ```
pub fn try_to_int(element: JsonElement<'_>) -> Option<i32> {
    integer(element)
}

pub fn to_int(element: JsonElement<'_>) -> Result<i32, FormatError> {
    require(element, TargetType::Int32, try_to_int)
}

/// Probe for an `i64`, with the same acceptance rules as [`try_to_int`].
pub fn try_to_i64(element: JsonElement<'_>) -> Option<i64> {
    integer(element)
}

pub fn to_i64(element: JsonElement<'_>) -> Result<i64, FormatError> {
    require(element, TargetType::Int64, try_to_i64)
}

/// Probe for a finite `f64`.
///
/// Number nodes of any shape are accepted unless they overflow. String nodes
/// accept optional whitespace around a sign, digits, `.` and an exponent;
/// `NaN` and `inf` spellings are rejected.
pub fn try_to_f64(element: JsonElement<'_>) -> Option<f64> {
    let value = match element.kind() {
        JsonValueKind::Number => element.number_text()?.parse::<f64>().ok()?,
        JsonValueKind::String => parse_float_text(&element.string_value()?)?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

pub fn to_f64(element: JsonElement<'_>) -> Result<f64, FormatError> {
    require(element, TargetType::Float64, try_to_f64)
}

fn integer<T: FromStr>(element: JsonElement<'_>) -> Option<T> {
    match element.kind() {
        JsonValueKind::Number => element.number_text()?.parse().ok(),
        JsonValueKind::String => parse_integer_text(&element.string_value()?),
        _ => None,
    }
}

fn parse_integer_text<T: FromStr>(text: &str) -> Option<T> {
    let trimmed = trim_invariant(text);
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

fn parse_float_text(text: &str) -> Option<f64> {
    let trimmed = trim_invariant(text);
    let lexical = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !lexical {
        return None;
    }
    trimmed.parse().ok()
}
