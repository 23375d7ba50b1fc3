//! Identifier style predicates.
//!
//! All checks are ASCII-only and locale-independent.

/// Returns true if `text` starts with `prefix`, ignoring ASCII case.
///
/// Empty text never matches a non-empty prefix.
#[must_use]
pub fn has_case_insensitive_prefix(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Returns true if `text` is non-empty and made only of `A`-`Z`, `_` and digits.
#[must_use]
pub fn is_all_caps_underscore_digits(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}
