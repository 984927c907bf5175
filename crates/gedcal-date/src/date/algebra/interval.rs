use serde::Serialize;

use super::{ConversionError, ConversionResult};
use crate::calendar::Calendar;
use crate::date::core::{Date, DatePoint};

/// Whole years between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearSpan {
    pub years: u32,
    /// Both dates were complete Gregorian dates, so the count honours month
    /// and day.
    pub exact: bool,
}

fn primary_year(date: &Date) -> ConversionResult<(&DatePoint, i32)> {
    let point = date.point().ok_or(ConversionError::MissingYear)?;
    let year = point.astronomical_year().ok_or(ConversionError::MissingYear)?;
    Ok((point, year))
}

const fn is_complete_gregorian(point: &DatePoint) -> bool {
    matches!(point.calendar(), Calendar::Gregorian) && point.is_complete()
}

impl Date {
    /// Whole years from `self` to `other`, never negative.
    ///
    /// When both are complete Gregorian dates the count drops the final
    /// year if its anniversary has not been reached. Anything else is the
    /// plain difference of the years as written, flagged inexact.
    ///
    /// ## Errors
    /// Returns [`ConversionError::MissingYear`] if either date has no year.
    pub fn years_between(&self, other: &Self) -> ConversionResult<YearSpan> {
        let (a, ya) = primary_year(self)?;
        let (b, yb) = primary_year(other)?;

        if !(is_complete_gregorian(a) && is_complete_gregorian(b)) {
            return Ok(YearSpan {
                years: ya.abs_diff(yb),
                exact: false,
            });
        }

        let key = |p: &DatePoint, y: i32| (y, p.month(), p.day());
        let (early, late) = if key(a, ya) <= key(b, yb) {
            ((a, ya), (b, yb))
        } else {
            ((b, yb), (a, ya))
        };
        let mut years = late.1.abs_diff(early.1);
        if (late.0.month(), late.0.day()) < (early.0.month(), early.0.day()) {
            years = years.saturating_sub(1);
        }
        Ok(YearSpan { years, exact: true })
    }

    /// Days from `self` to `other`, negative when `other` is earlier.
    /// Missing months and days count as the first.
    ///
    /// ## Errors
    /// Returns [`ConversionError::MissingYear`] if either date has no year.
    pub fn days_between(&self, other: &Self) -> ConversionResult<i64> {
        let jdn = |date: &Self| {
            date.point()
                .and_then(DatePoint::jdn)
                .ok_or(ConversionError::MissingYear)
        };
        Ok(jdn(other)? - jdn(self)?)
    }
}
