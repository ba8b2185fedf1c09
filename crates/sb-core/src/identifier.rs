//! Identifier grammar for names embedded literally in SQL
//!
//! Schema, table, and index names cannot be bound as query parameters, so
//! every such name is checked against a strict grammar before it is written
//! into SQL text. There is no quoting or escaping path.

/// Check whether `name` may be emitted verbatim as a SQL identifier.
///
/// Accepts a non-empty ASCII name that starts with a letter or underscore,
/// followed by letters, digits, or underscores.
///
/// # Examples
/// ```
/// use sb_core::identifier::is_valid_identifier;
/// assert!(is_valid_identifier("orders"));
/// assert!(is_valid_identifier("_tmp_2"));
/// assert!(!is_valid_identifier("2fast"));
/// assert!(!is_valid_identifier("users; DROP TABLE users"));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "identifier_test.rs"]
mod tests;
