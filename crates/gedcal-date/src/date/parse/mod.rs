//! GEDCOM date grammar.
//!
//! ## Usage
//!
//! ```rust
//! use gedcal_date::date::parse;
//!
//! let date = parse::parse_date("BET @#DJULIAN@ 1700 AND 1710").unwrap();
//! assert!(date.is_range());
//! assert_eq!(date.to_string(), "BET @#DJULIAN@ 1700 AND 1710");
//! ```
//!
//! ## Grammar
//!
//! - `(text)` phrases
//! - `@#D<NAME>@` calendar escapes, before or after the keyword
//! - `ABT`, `CAL`, `EST`, `BEF`, `AFT`, `BET .. AND ..`, `FROM [.. TO ..]`,
//!   `TO`, `INT .. (text)`
//! - `[day] [month] year[/yy] [BC]` components

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{escape_calendar, normalize, split_escape, split_keyword};
pub use parser::parse_date;
pub use values::{parse_components, parse_day, parse_month, parse_year, parse_year_with_dual};
