//! Date algebra: ordering, calendar conversion, and intervals.
//!
//! Operations that need more than one calendar go through the Julian Day
//! Number of each point; same-calendar work compares components directly.

mod compare;
mod convert;
mod interval;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::calendar::{Calendar, CalendarError};

pub use compare::{compare, is_after, is_before, is_equal};
pub use interval::YearSpan;

/// A date component, in the order completeness is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Year,
    Month,
    Day,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
        })
    }
}

/// Errors raised when a date is too incomplete, or in the wrong calendar,
/// for a conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("date has no year")]
    MissingYear,

    #[error("date has no {0}")]
    MissingComponent(Component),

    #[error("date is in the {0} calendar, not gregorian")]
    NotGregorian(Calendar),

    #[error("date phrase has no calendar date")]
    NoDate,

    #[error("{year}-{month:02}-{day:02} is not a representable date")]
    OutOfRange { year: i32, month: u32, day: u32 },

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
