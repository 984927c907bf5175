//! Text helpers for the date grammar.
//!
//! ## Summary
//! The grammar is keyword-driven and case-insensitive, but every helper here
//! works on byte offsets into the caller's string so matched slices can be
//! cut out without re-allocating.

/// Collapses every run of whitespace into a single ASCII space and trims
/// both ends.
///
/// Examples:
/// - "  ABT   1900 " -> "ABT 1900"
/// - "1\tJAN\n1900" -> "1 JAN 1900"
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips `prefix` from the start of `text`, ignoring ASCII case.
#[must_use]
pub fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

/// Byte offset of the first occurrence of an ASCII `needle` in `haystack`,
/// ignoring ASCII case.
///
/// An ASCII needle can only match on ASCII bytes, so the returned offset is
/// always a char boundary.
#[must_use]
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Splits `text` around the first case-insensitive occurrence of
/// `delimiter`, returning the text before and after it.
#[must_use]
pub fn split_once_ignore_case<'a>(text: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    let at = find_ignore_case(text, delimiter)?;
    Some((&text[..at], &text[at + delimiter.len()..]))
}
