use json_element::{JsonElement, JsonValueKind};
use std::fmt;
use thiserror::Error;

/// The type a coercion was asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Int32,
    Int64,
    Float64,
    Bool,
    Guid,
    DateTime,
    DateTimeOffset,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Int32 => "i32",
            TargetType::Int64 => "i64",
            TargetType::Float64 => "f64",
            TargetType::Bool => "bool",
            TargetType::Guid => "uuid",
            TargetType::DateTime => "date-time",
            TargetType::DateTimeOffset => "date-time-offset",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised by a `to_*` accessor when the element has no accepted representation
/// of the target type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot convert JSON {kind} to {target}")]
pub struct FormatError {
    pub target: TargetType,
    pub kind: JsonValueKind,
}

impl FormatError {
    pub fn new(target: TargetType, kind: JsonValueKind) -> Self {
        Self { target, kind }
    }
}

/// Run a probe and turn its rejection into a [`FormatError`].
///
/// Every throwing accessor goes through here, so it accepts exactly the inputs
/// its probe accepts.
pub(crate) fn require<'a, T>(
    element: JsonElement<'a>,
    target: TargetType,
    probe: impl FnOnce(JsonElement<'a>) -> Option<T>,
) -> Result<T, FormatError> {
    match probe(element) {
        Some(value) => Ok(value),
        None => {
            let err = FormatError::new(target, element.kind());
            tracing::debug!(to = %target, kind = %err.kind, "JSON coercion rejected");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message() {
        let err = FormatError::new(TargetType::Int32, JsonValueKind::Object);
        assert_eq!(err.to_string(), "cannot convert JSON object to i32");
    }

    #[test]
    fn test_require_passes_value_through() {
        let res = require(JsonElement::undefined(), TargetType::Bool, |_| Some(true));
        assert_eq!(res, Ok(true));
    }

    #[test]
    fn test_require_reports_kind() {
        let res: Result<bool, _> = require(JsonElement::undefined(), TargetType::Bool, |_| None);
        assert_eq!(
            res,
            Err(FormatError::new(TargetType::Bool, JsonValueKind::Undefined))
        );
    }
}
