/// Calendar escape delimiters shared across crates
pub const ESCAPE_OPEN: &str = "@#D";
pub const ESCAPE_CLOSE: &str = "@";

pub const GREGORIAN_NAME: &str = "GREGORIAN";
pub const JULIAN_NAME: &str = "JULIAN";
pub const HEBREW_NAME: &str = "HEBREW";
pub const FRENCH_NAME: &str = "FRENCH R";

pub const GREGORIAN_ESCAPE: &str = const_str::concat!(ESCAPE_OPEN, GREGORIAN_NAME, ESCAPE_CLOSE);
pub const JULIAN_ESCAPE: &str = const_str::concat!(ESCAPE_OPEN, JULIAN_NAME, ESCAPE_CLOSE);
pub const HEBREW_ESCAPE: &str = const_str::concat!(ESCAPE_OPEN, HEBREW_NAME, ESCAPE_CLOSE);
pub const FRENCH_ESCAPE: &str = const_str::concat!(ESCAPE_OPEN, FRENCH_NAME, ESCAPE_CLOSE);

/// Leading modifier keywords
pub const ABOUT_KEYWORD: &str = "ABT";
pub const CALCULATED_KEYWORD: &str = "CAL";
pub const ESTIMATED_KEYWORD: &str = "EST";
pub const BEFORE_KEYWORD: &str = "BEF";
pub const AFTER_KEYWORD: &str = "AFT";
pub const BETWEEN_KEYWORD: &str = "BET";
pub const FROM_KEYWORD: &str = "FROM";
pub const TO_KEYWORD: &str = "TO";
pub const INTERPRETED_KEYWORD: &str = "INT";

/// Infix delimiters, space-padded so they only match whole words
pub const AND_DELIMITER: &str = const_str::concat!(" ", "AND", " ");
pub const TO_DELIMITER: &str = const_str::concat!(" ", TO_KEYWORD, " ");

/// Era suffixes accepted after the year
pub const BC_SUFFIXES: [&str; 4] = ["BC", "B.C.", "BCE", "B.C.E."];

/// Separator between the two years of a dual date (`1750/51`)
pub const DUAL_YEAR_SEPARATOR: char = '/';
