use chrono::NaiveDate;

use super::{Component, ConversionError, ConversionResult};
use crate::calendar::{Calendar, CalendarExt, jdn_to_gregorian};
use crate::date::core::{Date, DatePoint};

/// Re-expresses a point in the Gregorian calendar at the same precision.
fn gregorian_point(point: &DatePoint) -> ConversionResult<DatePoint> {
    if point.calendar() == Calendar::Gregorian {
        return Ok(*point);
    }
    let year = point
        .astronomical_year()
        .ok_or(ConversionError::MissingYear)?;
    let jdn = point.calendar().to_jdn(
        year,
        point.month().unwrap_or(1),
        point.day().unwrap_or(1),
    )?;
    let (year, month, day) = jdn_to_gregorian(jdn);
    tracing::trace!(from = %point.calendar(), jdn, year, month, day, "Converted to gregorian");

    let month = point.month().map(|_| month);
    let day = point.day().map(|_| day);
    let (year, bc) = if year <= 0 {
        (1_i32.saturating_sub(year), true)
    } else {
        (year, false)
    };
    Ok(DatePoint::from_parts(Calendar::Gregorian, year, month, day).with_bc(bc))
}

impl Date {
    /// The same date in the Gregorian calendar.
    ///
    /// Every point keeps its precision: a month-only Julian date converts
    /// to a month-only Gregorian date. Years at or before astronomical year
    /// zero come back as BC years. Dual years are dropped and the original
    /// text is kept. Gregorian dates and phrases are returned unchanged.
    ///
    /// ## Errors
    /// Returns [`ConversionError::MissingYear`] when a non-Gregorian point
    /// has no year.
    pub fn to_gregorian(&self) -> ConversionResult<Self> {
        let value = self.value().try_map_points(gregorian_point)?;
        Ok(Self::new(self.original(), value))
    }

    /// The primary point as a [`NaiveDate`]. Needs a complete Gregorian
    /// date.
    ///
    /// ## Errors
    /// - [`ConversionError::NoDate`] for phrases
    /// - [`ConversionError::NotGregorian`] for other calendars
    /// - [`ConversionError::MissingComponent`] naming the first of year,
    ///   month, or day that is missing
    /// - [`ConversionError::OutOfRange`] when the components do not form a
    ///   real date, or fall outside what chrono represents
    pub fn to_naive_date(&self) -> ConversionResult<NaiveDate> {
        let point = self.point().ok_or(ConversionError::NoDate)?;
        if point.calendar() != Calendar::Gregorian {
            return Err(ConversionError::NotGregorian(point.calendar()));
        }
        let year = point
            .astronomical_year()
            .ok_or(ConversionError::MissingComponent(Component::Year))?;
        let month = point
            .month()
            .ok_or(ConversionError::MissingComponent(Component::Month))?;
        let day = point
            .day()
            .ok_or(ConversionError::MissingComponent(Component::Day))?;
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ConversionError::OutOfRange { year, month, day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn gregorian_is_identity() {
        let d = date("30 FEB 2023");
        assert_eq!(d.to_gregorian().unwrap(), d);
        let p = date("(no idea)");
        assert_eq!(p.to_gregorian().unwrap(), p);
    }

    #[test]
    fn julian_switchover() {
        let g = date("@#DJULIAN@ 4 OCT 1582").to_gregorian().unwrap();
        assert_eq!(g.calendar(), Calendar::Gregorian);
        assert_eq!((g.year(), g.month(), g.day()), (Some(1582), Some(10), Some(14)));
        assert_eq!(g.original(), "@#DJULIAN@ 4 OCT 1582");
    }

    #[test]
    fn precision_is_kept() {
        let g = date("@#DHEBREW@ TSH 5785").to_gregorian().unwrap();
        assert_eq!((g.year(), g.month(), g.day()), (Some(2024), Some(10), None));
        let g = date("@#DFRENCH R@ 1").to_gregorian().unwrap();
        assert_eq!((g.year(), g.month(), g.day()), (Some(1792), None, None));
    }

    #[test]
    fn bc_round_trip() {
        let g = date("@#DJULIAN@ 1 JAN 1 BC").to_gregorian().unwrap();
        assert!(g.is_bc());
        assert_eq!(g.year(), Some(2));
        assert_eq!(g.month(), Some(12));
        assert_eq!(g.day(), Some(30));
    }

    #[test]
    fn ranges_convert_both_ends() {
        let g = date("@#DJULIAN@ BET 1 JAN 1700 AND 1 JAN 1710")
            .to_gregorian()
            .unwrap();
        assert_eq!(g.day(), Some(11));
        let end = g.end_date().unwrap();
        assert_eq!(end.calendar(), Calendar::Gregorian);
        assert_eq!(end.day(), Some(12));
    }

    #[test]
    fn naive_date_needs_complete_gregorian() {
        assert_eq!(
            date("15 MAR 1920").to_naive_date().unwrap(),
            NaiveDate::from_ymd_opt(1920, 3, 15).unwrap()
        );
        assert_eq!(
            date("MAR 1920").to_naive_date().unwrap_err(),
            ConversionError::MissingComponent(Component::Day)
        );
        assert_eq!(
            date("1920").to_naive_date().unwrap_err(),
            ConversionError::MissingComponent(Component::Month)
        );
        assert_eq!(
            date("@#DJULIAN@ 1 JAN 1920").to_naive_date().unwrap_err(),
            ConversionError::NotGregorian(Calendar::Julian)
        );
        assert_eq!(date("(x)").to_naive_date().unwrap_err(), ConversionError::NoDate);
        assert!(matches!(
            date("30 FEB 2023").to_naive_date().unwrap_err(),
            ConversionError::OutOfRange { .. }
        ));
    }
}
