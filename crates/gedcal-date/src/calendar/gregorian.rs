//! Proleptic Gregorian calendar.

use super::{Calendar, CalendarResult, CalendarSystem, clamp_year, small};

/// Proleptic Gregorian calendar with astronomical year numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gregorian;

/// Cumulative days before each month in a March-based year, used by both
/// the Gregorian and Julian closed forms: `(153 * m + 2) / 5`.
pub(super) fn days_before_march_month(m: i64) -> i64 {
    (153 * m + 2) / 5
}

/// Shifts `(year, month)` to a March-based year starting at 4800 BC, which
/// keeps every intermediate positive for historical dates and moves the
/// leap day to the end of the year.
pub(super) fn march_based(year: i32, month: u32) -> (i64, i64) {
    let a = i64::from(u32::from(month <= 2));
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    (y, m)
}

/// Splits a day offset within a March-based year into `(month, day)` and
/// shifts the year back to January-based numbering.
pub(super) fn from_march_based(year: i64, day_of_year: i64) -> (i32, u32, u32) {
    let m = (5 * day_of_year + 2).div_euclid(153);
    let day = day_of_year - days_before_march_month(m) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = year - 4800 + m.div_euclid(10);
    (clamp_year(year), small(month), small(day))
}

impl CalendarSystem for Gregorian {
    const CALENDAR: Calendar = Calendar::Gregorian;

    fn to_jdn(year: i32, month: u32, day: u32) -> CalendarResult<i64> {
        Self::check_month(month)?;
        let (y, m) = march_based(year, month);
        Ok(i64::from(day) + days_before_march_month(m) + 365 * y + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045)
    }

    fn from_jdn(jdn: i64) -> (i32, u32, u32) {
        let jdn = jdn.clamp(super::MIN_JDN, super::MAX_JDN);
        let a = jdn + 32044;
        let b = (4 * a + 3).div_euclid(146_097);
        let c = a - (146_097 * b).div_euclid(4);
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        from_march_based(100 * b + d, e)
    }

    fn is_leap_year(year: i32) -> bool {
        year % 4 == 0 && year % 100 != 0 || year % 400 == 0
    }

    fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
        Self::check_month(month)?;
        Ok(month_length(month, Self::is_leap_year(year)))
    }

    fn months_in_year() -> u32 {
        12
    }
}

/// Month lengths shared with the Julian calendar; only the leap rule differs.
pub(super) fn month_length(month: u32, leap: bool) -> u32 {
    match month {
        2 if leap => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_gregorian() {
        assert_eq!(Gregorian::to_jdn(1970, 1, 1).unwrap(), 2_440_588);
        assert_eq!(Gregorian::to_jdn(2021, 9, 8).unwrap(), 2_459_466);
        assert_eq!(Gregorian::to_jdn(2000, 1, 1).unwrap(), 2_451_545);
        assert_eq!(Gregorian::to_jdn(1582, 10, 15).unwrap(), 2_299_161);
    }

    #[test]
    fn to_gregorian() {
        assert_eq!(Gregorian::from_jdn(2_440_588), (1970, 1, 1));
        assert_eq!(Gregorian::from_jdn(2_459_466), (2021, 9, 8));
        assert_eq!(Gregorian::from_jdn(2_451_545), (2000, 1, 1));
    }

    #[test]
    fn astronomical_years() {
        // 1 BC is year 0 and a leap year.
        let jdn = Gregorian::to_jdn(0, 2, 29).unwrap();
        assert_eq!(Gregorian::from_jdn(jdn), (0, 2, 29));
        assert_eq!(Gregorian::from_jdn(jdn + 1), (0, 3, 1));
        let jdn = Gregorian::to_jdn(-4713, 11, 24).unwrap();
        assert_eq!(jdn, 0);
        assert_eq!(Gregorian::from_jdn(-1), (-4713, 11, 23));
    }

    #[test]
    fn far_past_uses_floor_division() {
        let jdn = Gregorian::to_jdn(-10_000, 3, 1).unwrap();
        assert_eq!(Gregorian::from_jdn(jdn), (-10_000, 3, 1));
        assert_eq!(Gregorian::from_jdn(jdn - 1), (-10_000, 2, 29));
    }

    #[test]
    fn day_overflow_rolls_forward() {
        let jdn = Gregorian::to_jdn(2023, 2, 30).unwrap();
        assert_eq!(Gregorian::from_jdn(jdn), (2023, 3, 2));
    }

    #[test]
    fn leap_years() {
        assert!(Gregorian::is_leap_year(2000));
        assert!(Gregorian::is_leap_year(2024));
        assert!(!Gregorian::is_leap_year(1900));
        assert!(!Gregorian::is_leap_year(2023));
        assert!(Gregorian::is_leap_year(0));
        assert!(Gregorian::is_leap_year(-4));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(Gregorian::days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(Gregorian::days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(Gregorian::days_in_month(2000, 9).unwrap(), 30);
        assert_eq!(Gregorian::days_in_month(2000, 12).unwrap(), 31);
        assert!(Gregorian::days_in_month(2000, 0).is_err());
    }
}
