/// Compare two identifiers ignoring ASCII case and `_` separators.
///
/// Used to bind JSON property names written in camelCase, PascalCase or
/// snake_case to the same Rust field name.
///
/// # Examples
///
/// ```
/// use json_coerce_util::strings::fold_eq;
///
/// assert!(fold_eq("userName", "user_name"));
/// assert!(fold_eq("UserName", "user_name"));
/// assert!(fold_eq("USER_NAME", "user_name"));
/// assert!(!fold_eq("userNames", "user_name"));
/// ```
pub fn fold_eq(a: &str, b: &str) -> bool {
    let mut left = a.chars().filter(|&c| c != '_');
    let mut right = b.chars().filter(|&c| c != '_');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(l), Some(r)) if l.eq_ignore_ascii_case(&r) => {}
            _ => return false,
        }
    }
}
