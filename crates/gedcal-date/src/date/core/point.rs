//! A single, possibly partial, calendar position.

use serde::Serialize;

use super::month::month_table;
use crate::calendar::{Calendar, CalendarExt};
use crate::date::validate::{ValidationError, ValidationResult};

/// How much of a [`DatePoint`] is known. Precision only ever degrades from
/// the day down, never leaving a day without its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    Year,
    Month,
    Day,
}

/// A date in one calendar with year, month and day each possibly unknown.
///
/// Years are written the way the source writes them: always positive, with
/// `bc` marking years before the common era in the Gregorian and Julian
/// calendars. [`DatePoint::astronomical_year`] gives the signed year the
/// kernel works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DatePoint {
    calendar: Calendar,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    bc: bool,
    dual_year: Option<i32>,
}

impl DatePoint {
    /// Creates a point from checked components.
    ///
    /// ## Errors
    /// Returns a [`ValidationError`] when the year is not positive, the
    /// month is not a month of `calendar`, the day is outside `1..=31`, or a
    /// day is given without a month.
    pub fn new(
        calendar: Calendar,
        year: i32,
        month: Option<u32>,
        day: Option<u32>,
    ) -> ValidationResult<Self> {
        if year < 1 {
            return Err(ValidationError::InvalidYear { year });
        }
        if let Some(month) = month
            && !(1..=calendar.months_in_year()).contains(&month)
        {
            return Err(ValidationError::InvalidMonth { month, calendar });
        }
        match (month, day) {
            (None, Some(_)) => return Err(ValidationError::DayWithoutMonth),
            (_, Some(day)) if !(1..=31).contains(&day) => {
                return Err(ValidationError::InvalidDay { day });
            }
            _ => {}
        }
        Ok(Self::from_parts(calendar, year, month, day))
    }

    /// A point whose year is not known at all.
    #[must_use]
    pub const fn unknown(calendar: Calendar) -> Self {
        Self {
            calendar,
            year: None,
            month: None,
            day: None,
            bc: false,
            dual_year: None,
        }
    }

    /// Caller has checked the components.
    pub(crate) const fn from_parts(
        calendar: Calendar,
        year: i32,
        month: Option<u32>,
        day: Option<u32>,
    ) -> Self {
        Self {
            calendar,
            year: Some(year),
            month,
            day,
            bc: false,
            dual_year: None,
        }
    }

    /// Marks the year as before the common era. Ignored by calendars without
    /// eras and by points without a year.
    #[must_use]
    pub const fn with_bc(mut self, bc: bool) -> Self {
        self.bc = bc && self.year.is_some();
        self
    }

    /// Sets the secondary year of a dual date such as `1750/51`.
    #[must_use]
    pub const fn with_dual_year(mut self, dual_year: Option<i32>) -> Self {
        self.dual_year = dual_year;
        self
    }

    #[must_use]
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    #[must_use]
    pub const fn year(&self) -> Option<i32> {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> Option<u32> {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> Option<u32> {
        self.day
    }

    #[must_use]
    pub const fn is_bc(&self) -> bool {
        self.bc
    }

    #[must_use]
    pub const fn dual_year(&self) -> Option<i32> {
        self.dual_year
    }

    /// `None` when the year is unknown.
    #[must_use]
    pub const fn precision(&self) -> Option<Precision> {
        match (self.year, self.month, self.day) {
            (None, _, _) => None,
            (Some(_), None, _) => Some(Precision::Year),
            (Some(_), Some(_), None) => Some(Precision::Month),
            (Some(_), Some(_), Some(_)) => Some(Precision::Day),
        }
    }

    /// Day, month and year are all known.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.precision(), Some(Precision::Day))
    }

    /// Signed year with a year zero: 1 BC is `0`, 2 BC is `-1`. Calendars
    /// without eras return the year unchanged.
    #[must_use]
    pub fn astronomical_year(&self) -> Option<i32> {
        let year = self.year?;
        Some(if self.bc && self.calendar.has_eras() {
            1 - year
        } else {
            year
        })
    }

    /// Julian Day Number of the point, with a missing month or day read as
    /// the first of the year or month. `None` without a year.
    #[must_use]
    pub fn jdn(&self) -> Option<i64> {
        let year = self.astronomical_year()?;
        self.calendar
            .to_jdn(year, self.month.unwrap_or(1), self.day.unwrap_or(1))
            .ok()
    }

    /// Upper-case month code in this point's calendar.
    #[must_use]
    pub fn month_code(&self) -> Option<&'static str> {
        month_table(self.calendar).code(self.month?)
    }
}
