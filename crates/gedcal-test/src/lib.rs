//! gedcal - integration test support.
//!
//! Re-exports the workspace crates and holds the input generators shared by
//! the integration tests.

pub use gedcal_core::{Calendar, Modifier};
pub use gedcal_date::calendar::CalendarExt;
pub use gedcal_date::{Date, DatePoint, DateValue, ParseErrorKind, YearSpan, parse_date};

use rand::Rng;
use rand::seq::IndexedRandom;

/// Parses `input`, panicking with the parse error on failure.
///
/// # Panics
/// When `input` is not a valid date.
#[must_use]
pub fn date(input: &str) -> Date {
    match parse_date(input) {
        Ok(date) => date,
        Err(err) => panic!("{input:?} should parse: {err}"),
    }
}

/// Fragments the grammar reacts to, mixed into random inputs so they reach
/// deep into the parser instead of failing on the first byte.
pub const GRAMMAR_FRAGMENTS: &[&str] = &[
    "ABT", "CAL", "EST", "BEF", "AFT", "BET", "AND", "FROM", "TO", "INT", "(", ")", "@#D", "@",
    "@#DJULIAN@", "@#DHEBREW@", "@#DFRENCH R@", "@#DGREGORIAN@", "@#DROMAN@", "JAN", "FEB", "TSH",
    "ADS", "VEND", "COMP", "BC", "B.C.E.", "/", "1750/51", "0", "31", "32", "1900", "2147483647",
    "2147483648", "-1", " ", "\t", "é", "日", "\u{0}",
];

/// A random string of grammar fragments, digits, and arbitrary characters.
#[must_use]
pub fn random_input(rng: &mut impl Rng) -> String {
    let len = rng.random_range(0..12);
    let mut input = String::new();
    for _ in 0..len {
        match rng.random_range(0..4) {
            0 => input.push(rng.random::<char>()),
            1 => input.push_str(&rng.random_range(0..100_000_u32).to_string()),
            _ => {
                if let Some(fragment) = GRAMMAR_FRAGMENTS.choose(rng) {
                    input.push_str(fragment);
                }
            }
        }
        if rng.random_bool(0.7) {
            input.push(' ');
        }
    }
    input
}
