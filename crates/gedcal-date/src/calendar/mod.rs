//! Calendar math kernel.
//!
//! Every calendar converts to and from a shared Julian Day Number (JDN), so
//! no pair of calendars ever converts directly. Gregorian and Julian years
//! use astronomical numbering (1 BC is year `0`, 2 BC is `-1`); Hebrew and
//! French Republican years are plain positive counts from their epochs.
//!
//! All arithmetic runs in `i64`, so any `i32` year is overflow-free.
//!
//! ## Usage
//!
//! ```rust
//! use gedcal_date::calendar::{Calendar, CalendarExt, gregorian_to_jdn, jdn_to_hebrew};
//!
//! let jdn = gregorian_to_jdn(2024, 10, 3).unwrap();
//! assert_eq!(jdn_to_hebrew(jdn), (5785, 1, 1));
//! assert_eq!(Calendar::Julian.from_jdn(jdn), (2024, 9, 20));
//! ```

mod french;
mod gregorian;
mod hebrew;
mod julian;

use thiserror::Error;

pub use french::FrenchRepublican;
pub use gedcal_core::Calendar;
pub use gregorian::Gregorian;
pub use hebrew::Hebrew;
pub use julian::Julian;

/// Errors raised by the kernel. Only month codes are checked; day overflow
/// is carried through the arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid month {month} for the {calendar} calendar")]
    InvalidMonth { month: u32, calendar: Calendar },
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;

/// Bounds of the JDN domain accepted by the `from_jdn` conversions. Wide
/// enough to hold any `i32` year of every calendar; inputs beyond are
/// clamped.
pub const MIN_JDN: i64 = -(1 << 40);
pub const MAX_JDN: i64 = 1 << 40;

/// Conversion and leap-rule contract shared by every supported calendar.
pub trait CalendarSystem {
    /// Which [`Calendar`] this implementation serves.
    const CALENDAR: Calendar;

    /// Converts a `(year, month, day)` triple to a JDN.
    ///
    /// Days past the end of the month roll forward into the next month.
    ///
    /// ## Errors
    /// Returns [`CalendarError::InvalidMonth`] when `month` is not a month
    /// code of this calendar.
    fn to_jdn(year: i32, month: u32, day: u32) -> CalendarResult<i64>;

    /// Converts a JDN back to `(year, month, day)`.
    fn from_jdn(jdn: i64) -> (i32, u32, u32);

    fn is_leap_year(year: i32) -> bool;

    /// Number of days in `month` of `year`.
    ///
    /// ## Errors
    /// Returns [`CalendarError::InvalidMonth`] for an unknown month code.
    fn days_in_month(year: i32, month: u32) -> CalendarResult<u32>;

    /// Highest month code of the calendar.
    fn months_in_year() -> u32;

    /// Checks a month code against `1..=months_in_year()`.
    ///
    /// ## Errors
    /// Returns [`CalendarError::InvalidMonth`] naming the code and calendar.
    fn check_month(month: u32) -> CalendarResult<()> {
        if (1..=Self::months_in_year()).contains(&month) {
            Ok(())
        } else {
            Err(CalendarError::InvalidMonth {
                month,
                calendar: Self::CALENDAR,
            })
        }
    }
}

/// Runtime dispatch over the closed set of calendars.
pub trait CalendarExt {
    /// ## Errors
    /// Returns [`CalendarError::InvalidMonth`] for an unknown month code.
    fn to_jdn(self, year: i32, month: u32, day: u32) -> CalendarResult<i64>;
    fn from_jdn(self, jdn: i64) -> (i32, u32, u32);
    fn is_leap_year(self, year: i32) -> bool;
    /// ## Errors
    /// Returns [`CalendarError::InvalidMonth`] for an unknown month code.
    fn days_in_month(self, year: i32, month: u32) -> CalendarResult<u32>;
    fn months_in_year(self) -> u32;
}

macro_rules! dispatch {
    ($cal:expr, $system:ident => $body:expr) => {
        match $cal {
            Calendar::Gregorian => {
                type $system = Gregorian;
                $body
            }
            Calendar::Julian => {
                type $system = Julian;
                $body
            }
            Calendar::Hebrew => {
                type $system = Hebrew;
                $body
            }
            Calendar::FrenchRepublican => {
                type $system = FrenchRepublican;
                $body
            }
        }
    };
}

impl CalendarExt for Calendar {
    fn to_jdn(self, year: i32, month: u32, day: u32) -> CalendarResult<i64> {
        dispatch!(self, S => S::to_jdn(year, month, day))
    }

    fn from_jdn(self, jdn: i64) -> (i32, u32, u32) {
        dispatch!(self, S => S::from_jdn(jdn))
    }

    fn is_leap_year(self, year: i32) -> bool {
        dispatch!(self, S => S::is_leap_year(year))
    }

    fn days_in_month(self, year: i32, month: u32) -> CalendarResult<u32> {
        dispatch!(self, S => S::days_in_month(year, month))
    }

    fn months_in_year(self) -> u32 {
        dispatch!(self, S => S::months_in_year())
    }
}

/// Day of week of a JDN in ISO numbering (`1..=7` for Monday through Sunday).
#[must_use]
pub fn day_of_week(jdn: i64) -> u32 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rem_euclid(7) is always in 0..7"
    )]
    let dow = jdn.rem_euclid(7) as u32;
    dow + 1
}

/// Narrows a kernel year back to `i32`, saturating at the bounds. Inputs are
/// `i32`, so in practice only JDNs far outside any parsed date saturate.
pub(crate) fn clamp_year(year: i64) -> i32 {
    i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX })
}

/// Narrows a month or day already known to lie in `1..=31`.
pub(crate) fn small(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

/// ## Errors
/// Returns [`CalendarError::InvalidMonth`] for a month outside `1..=12`.
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> CalendarResult<i64> {
    Gregorian::to_jdn(year, month, day)
}

#[must_use]
pub fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    Gregorian::from_jdn(jdn)
}

/// ## Errors
/// Returns [`CalendarError::InvalidMonth`] for a month outside `1..=12`.
pub fn julian_to_jdn(year: i32, month: u32, day: u32) -> CalendarResult<i64> {
    Julian::to_jdn(year, month, day)
}

#[must_use]
pub fn jdn_to_julian(jdn: i64) -> (i32, u32, u32) {
    Julian::from_jdn(jdn)
}

/// ## Errors
/// Returns [`CalendarError::InvalidMonth`] for a month outside `1..=13`.
pub fn hebrew_to_jdn(year: i32, month: u32, day: u32) -> CalendarResult<i64> {
    Hebrew::to_jdn(year, month, day)
}

#[must_use]
pub fn jdn_to_hebrew(jdn: i64) -> (i32, u32, u32) {
    Hebrew::from_jdn(jdn)
}

/// ## Errors
/// Returns [`CalendarError::InvalidMonth`] for a month outside `1..=13`.
pub fn french_to_jdn(year: i32, month: u32, day: u32) -> CalendarResult<i64> {
    FrenchRepublican::to_jdn(year, month, day)
}

#[must_use]
pub fn jdn_to_french(jdn: i64) -> (i32, u32, u32) {
    FrenchRepublican::from_jdn(jdn)
}
