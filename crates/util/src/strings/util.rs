/// A predicate function for checking character properties.
pub type CharPredicate = fn(char) -> bool;

/// Check if a character is invariant whitespace.
///
/// Only the ASCII controls `U+0009..=U+000D` and the space character count;
/// Unicode spaces such as `U+00A0` do not.
///
/// # Examples
///
/// ```
/// use json_coerce_util::strings::is_invariant_whitespace;
///
/// assert!(is_invariant_whitespace(' '));
/// assert!(is_invariant_whitespace('\t'));
/// assert!(is_invariant_whitespace('\u{000B}'));
/// assert!(!is_invariant_whitespace('\u{00A0}'));
/// assert!(!is_invariant_whitespace('a'));
/// ```
pub fn is_invariant_whitespace(ch: char) -> bool {
    matches!(ch, '\u{0009}'..='\u{000D}' | ' ')
}

/// Strip leading and trailing invariant whitespace.
///
/// # Examples
///
/// ```
/// use json_coerce_util::strings::trim_invariant;
///
/// assert_eq!(trim_invariant("  42\n"), "42");
/// assert_eq!(trim_invariant("\u{00A0}42"), "\u{00A0}42");
/// ```
pub fn trim_invariant(s: &str) -> &str {
    s.trim_matches(is_invariant_whitespace as CharPredicate)
}
