//! GEDCOM dates: the value model, its grammar, algebra, and validation.

pub mod algebra;
pub mod core;
pub mod parse;
pub mod validate;

#[cfg(test)]
mod tests;

pub use algebra::{Component, ConversionError, ConversionResult, YearSpan};
pub use core::{Date, DatePoint, DateValue, MonthTable, Precision, Qualifier, month_table};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse_date};
pub use validate::{ValidationError, ValidationResult};
