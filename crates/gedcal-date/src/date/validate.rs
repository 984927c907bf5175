//! Semantic validation of parsed dates.
//!
//! The grammar accepts any day in `1..=31`; whether that day exists in its
//! month is only known here.

use thiserror::Error;

use crate::calendar::{Calendar, CalendarError, CalendarExt};
use crate::date::core::{Date, DatePoint};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("day {day} is out of range for month {month} of {year} (max {max_day})")]
    DayOutOfRange {
        day: u32,
        month: u32,
        year: i32,
        max_day: u32,
    },

    #[error("invalid month {month} for the {calendar} calendar")]
    InvalidMonth { month: u32, calendar: Calendar },

    #[error("year {year} is not positive")]
    InvalidYear { year: i32 },

    #[error("day {day} is outside 1..=31")]
    InvalidDay { day: u32 },

    #[error("a day needs a month")]
    DayWithoutMonth,
}

impl From<CalendarError> for ValidationError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::InvalidMonth { month, calendar } => {
                Self::InvalidMonth { month, calendar }
            }
        }
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Checks that the day of a complete Gregorian point exists by running it
/// through the calendar and comparing what comes back.
fn validate_point(point: &DatePoint) -> ValidationResult<()> {
    if point.calendar() != Calendar::Gregorian {
        return Ok(());
    }
    let (Some(year), Some(month), Some(day)) =
        (point.astronomical_year(), point.month(), point.day())
    else {
        return Ok(());
    };

    let calendar = point.calendar();
    let jdn = calendar.to_jdn(year, month, day)?;
    let (_, norm_month, norm_day) = calendar.from_jdn(jdn);
    if (norm_month, norm_day) == (month, day) {
        return Ok(());
    }

    let max_day = calendar.days_in_month(year, month)?;
    tracing::debug!(year, month, day, max_day, "Day out of range");
    Err(ValidationError::DayOutOfRange {
        day,
        month,
        year: point.year().unwrap_or(year),
        max_day,
    })
}

impl Date {
    /// Checks every complete Gregorian point of the date, both ends of a
    /// range included. Partial dates, other calendars, and phrases always
    /// pass.
    ///
    /// ## Errors
    /// Returns [`ValidationError::DayOutOfRange`] for a day past the end of
    /// its month, such as `30 FEB`.
    pub fn validate(&self) -> ValidationResult<()> {
        self.value()
            .points()
            .into_iter()
            .try_for_each(validate_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test_log::test]
    fn day_overflow() {
        assert_eq!(
            date("30 FEB 2023").validate().unwrap_err(),
            ValidationError::DayOutOfRange {
                day: 30,
                month: 2,
                year: 2023,
                max_day: 28
            }
        );
        assert_eq!(
            date("31 APR 1900").validate().unwrap_err(),
            ValidationError::DayOutOfRange {
                day: 31,
                month: 4,
                year: 1900,
                max_day: 30
            }
        );
    }

    #[test]
    fn leap_days() {
        assert!(date("29 FEB 2000").validate().is_ok());
        assert!(date("29 FEB 2024").validate().is_ok());
        assert!(date("29 FEB 1900").validate().is_err());
    }

    #[test]
    fn bc_reports_written_year() {
        // 1 BC is astronomical year 0, a leap year.
        assert!(date("29 FEB 1 BC").validate().is_ok());
        let err = date("29 FEB 2 BC").validate().unwrap_err();
        assert!(matches!(err, ValidationError::DayOutOfRange { year: 2, .. }));
    }

    #[test]
    fn partial_and_foreign_dates_pass() {
        assert!(date("FEB 2023").validate().is_ok());
        assert!(date("@#DJULIAN@ 30 FEB 1700").validate().is_ok());
        assert!(date("(30 FEB)").validate().is_ok());
    }

    #[test]
    fn range_end_is_checked() {
        assert!(date("BET 1 JAN 2023 AND 30 FEB 2023").validate().is_err());
        assert!(date("FROM 1 JAN 2023 TO 28 FEB 2023").validate().is_ok());
    }

    #[test]
    fn calendar_errors_map_to_invalid_month() {
        let err: ValidationError = CalendarError::InvalidMonth {
            month: 14,
            calendar: Calendar::Hebrew,
        }
        .into();
        assert_eq!(
            err,
            ValidationError::InvalidMonth {
                month: 14,
                calendar: Calendar::Hebrew
            }
        );
    }
}
