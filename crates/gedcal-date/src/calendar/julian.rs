//! Proleptic Julian calendar.

use super::gregorian::{days_before_march_month, from_march_based, march_based, month_length};
use super::{Calendar, CalendarResult, CalendarSystem};

/// Proleptic Julian calendar with astronomical year numbering.
///
/// Identical to [`super::Gregorian`] except that every fourth year is a
/// leap year, with no century correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Julian;

impl CalendarSystem for Julian {
    const CALENDAR: Calendar = Calendar::Julian;

    fn to_jdn(year: i32, month: u32, day: u32) -> CalendarResult<i64> {
        Self::check_month(month)?;
        let (y, m) = march_based(year, month);
        Ok(i64::from(day) + days_before_march_month(m) + 365 * y + y.div_euclid(4) - 32083)
    }

    fn from_jdn(jdn: i64) -> (i32, u32, u32) {
        let jdn = jdn.clamp(super::MIN_JDN, super::MAX_JDN);
        let c = jdn + 32082;
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        from_march_based(d, e)
    }

    fn is_leap_year(year: i32) -> bool {
        year.rem_euclid(4) == 0
    }

    fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
        Self::check_month(month)?;
        Ok(month_length(month, Self::is_leap_year(year)))
    }

    fn months_in_year() -> u32 {
        12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(Julian::to_jdn(-4712, 1, 1).unwrap(), 0);
        assert_eq!(Julian::from_jdn(0), (-4712, 1, 1));
    }

    #[test]
    fn gregorian_switchover() {
        // Thursday 4 October 1582 (Julian) was followed by Friday 15 October
        // 1582 (Gregorian).
        assert_eq!(Julian::to_jdn(1582, 10, 4).unwrap(), 2_299_160);
        assert_eq!(Julian::from_jdn(2_299_161), (1582, 10, 5));
    }

    #[test]
    fn century_years_are_leap() {
        assert!(Julian::is_leap_year(1900));
        assert!(Julian::is_leap_year(1700));
        assert!(!Julian::is_leap_year(1701));
        assert_eq!(Julian::days_in_month(1900, 2).unwrap(), 29);
    }

    #[test]
    fn round_trip_around_leap_day() {
        let jdn = Julian::to_jdn(1700, 2, 29).unwrap();
        assert_eq!(Julian::from_jdn(jdn), (1700, 2, 29));
        assert_eq!(Julian::from_jdn(jdn + 1), (1700, 3, 1));
    }
}
