//! Date lexer: whitespace normalization, phrase and escape detection, and
//! keyword and component splitting.
//!
//! Every function works on the normalized text, where fields are separated
//! by exactly one ASCII space.

use gedcal_core::Modifier;
use gedcal_core::constants::{BC_SUFFIXES, ESCAPE_CLOSE, ESCAPE_OPEN};
use gedcal_core::util::text::{normalize_whitespace, strip_prefix_ignore_case};

use super::error::{ParseError, ParseResult};
use crate::calendar::Calendar;

/// Collapses whitespace runs to one space and trims the ends.
#[must_use]
pub fn normalize(input: &str) -> String {
    normalize_whitespace(input)
}

/// Inner text of a `(...)` phrase.
#[must_use]
pub fn strip_phrase(text: &str) -> Option<&str> {
    text.strip_prefix('(')?.strip_suffix(')')
}

/// Splits a leading `@#D<NAME>@` escape into the raw name and the text after
/// it. An escape without its closing `@` is not an escape.
#[must_use]
pub fn split_escape(text: &str) -> Option<(&str, &str)> {
    let body = strip_prefix_ignore_case(text, ESCAPE_OPEN)?;
    let (name, rest) = body.split_once(ESCAPE_CLOSE)?;
    Some((name, rest.trim_start()))
}

/// Resolves an escape name such as `JULIAN` or `FRENCH R`.
///
/// ## Errors
/// Returns [`ParseErrorKind::UnsupportedCalendar`](super::ParseErrorKind)
/// for any other name.
pub fn escape_calendar(input: &str, name: &str) -> ParseResult<Calendar> {
    name.parse::<Calendar>()
        .ok()
        // Only escape names are accepted here, not the snake-case spellings.
        .filter(|calendar| calendar.escape_name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ParseError::unsupported_calendar(input, name))
}

/// Splits a leading modifier keyword from the rest of the text.
#[must_use]
pub fn split_keyword(text: &str) -> Option<(Modifier, &str)> {
    let (word, rest) = text.split_once(' ').unwrap_or((text, ""));
    Modifier::from_keyword(word).map(|modifier| (modifier, rest))
}

/// Space-separated fields of a (sub)date.
#[must_use]
pub fn fields(text: &str) -> Vec<&str> {
    text.split(' ').filter(|field| !field.is_empty()).collect()
}

/// Strips a trailing era suffix (`BC`, `B.C.`, `BCE`, `B.C.E.`).
#[must_use]
pub fn split_bc_suffix<'s, 'a>(fields: &'s [&'a str]) -> (&'s [&'a str], bool) {
    match fields.split_last() {
        Some((last, rest))
            if BC_SUFFIXES
                .iter()
                .any(|suffix| suffix.eq_ignore_ascii_case(last)) =>
        {
            (rest, true)
        }
        _ => (fields, false),
    }
}
