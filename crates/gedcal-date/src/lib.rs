//! GEDCOM date parsing and cross-calendar date arithmetic.
//!
//! ## Usage
//!
//! ```rust
//! use gedcal_date::parse_date;
//!
//! let julian = parse_date("@#DJULIAN@ 4 OCT 1582").unwrap();
//! let gregorian = parse_date("14 OCT 1582").unwrap();
//! assert!(julian.is_equal(&gregorian));
//!
//! let born = parse_date("15 MAR 1920").unwrap();
//! let died = parse_date("20 JUN 1985").unwrap();
//! let span = born.years_between(&died).unwrap();
//! assert_eq!((span.years, span.exact), (65, true));
//! ```
//!
//! The [`calendar`] module exposes the Julian Day Number kernel on its own
//! for arithmetic outside the [`Date`] abstraction.

pub mod calendar;
pub mod date;
pub mod error;

pub use calendar::{Calendar, CalendarError, CalendarExt, CalendarSystem};
pub use date::{
    ConversionError, Date, DatePoint, DateValue, ParseError, ParseErrorKind, Precision, Qualifier,
    ValidationError, YearSpan, parse_date,
};
pub use error::{DateError, DateResult};
pub use gedcal_core::Modifier;
