use std::borrow::Cow;

/// Check whether a numeric lexeme is a plain integer (optional `-`, digits only).
///
/// Fractions and exponents disqualify a lexeme even when its value is whole.
///
/// # Examples
///
/// ```
/// use json_coerce_util::number::is_integer_lexeme;
///
/// assert!(is_integer_lexeme("42"));
/// assert!(is_integer_lexeme("-7"));
/// assert!(!is_integer_lexeme("1.0"));
/// assert!(!is_integer_lexeme("1e2"));
/// assert!(!is_integer_lexeme(""));
/// ```
pub fn is_integer_lexeme(lexeme: &str) -> bool {
    let digits = lexeme.strip_prefix('-').unwrap_or(lexeme);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Render a JSON number lexeme as invariant text.
///
/// Integer lexemes within `i64` range render through the integer path.
/// Everything else renders with the shortest digits that parse back to the
/// same `f64`, using `.` as the separator and no digit grouping. The positional
/// form (`0.0025`) is used unless the exponent form (`1e300`) is strictly
/// shorter. Zero of either sign renders as `0`. Lexemes that overflow `f64`
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use json_coerce_util::number::render_number;
///
/// assert_eq!(render_number("42"), "42");
/// assert_eq!(render_number("-0"), "0");
/// assert_eq!(render_number("1.50"), "1.5");
/// assert_eq!(render_number("1e2"), "100");
/// assert_eq!(render_number("1e300"), "1e300");
/// assert_eq!(render_number("0.00000015"), "1.5e-7");
/// assert_eq!(render_number("12345678901234567890"), "12345678901234567000");
/// assert_eq!(render_number("1e400"), "1e400");
/// ```
pub fn render_number(lexeme: &str) -> Cow<'_, str> {
    if is_integer_lexeme(lexeme) {
        if let Ok(n) = lexeme.parse::<i64>() {
            let text = n.to_string();
            return if text == lexeme {
                Cow::Borrowed(lexeme)
            } else {
                Cow::Owned(text)
            };
        }
    }
    match lexeme.parse::<f64>() {
        // -0.0 would render as "-0", which the integer path then folds to "0".
        Ok(x) if x == 0.0 => Cow::Borrowed("0"),
        Ok(x) if x.is_finite() => Cow::Owned(shortest_float(x)),
        _ => Cow::Borrowed(lexeme),
    }
}

fn shortest_float(x: f64) -> String {
    let positional = x.to_string();
    let exponent = format!("{:e}", x);
    if exponent.len() < positional.len() {
        exponent
    } else {
        positional
    }
}
