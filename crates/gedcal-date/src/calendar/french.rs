//! French Republican calendar.
//!
//! Twelve months of 30 days followed by the complementary days (month 13),
//! five in common years and six in leap years. Year `N` is a leap year
//! exactly when Gregorian year `1792 + N` is, which keeps the calendar's
//! average year equal to the Gregorian one.

use super::{Calendar, CalendarResult, CalendarSystem, clamp_year, small};
use crate::calendar::Gregorian;

/// French Republican calendar, years counted from 22 September 1792.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrenchRepublican;

/// JDN of 1 Vendémiaire An I (22 September 1792, Gregorian).
const EPOCH: i64 = 2_375_840;

/// Gregorian year aligned with Republican year 0.
const GREGORIAN_OFFSET: i64 = 1792;

const MONTH_DAYS: i64 = 30;

/// Gregorian leap years in `1..=year`, extended with floor division to
/// non-positive years.
fn gregorian_leaps_through(year: i64) -> i64 {
    year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)
}

/// JDN of 1 Vendémiaire of `year`: a prefix sum of year lengths, in closed
/// form.
fn year_start(year: i64) -> i64 {
    EPOCH + 365 * (year - 1) + gregorian_leaps_through(GREGORIAN_OFFSET - 1 + year)
        - gregorian_leaps_through(GREGORIAN_OFFSET)
}

impl CalendarSystem for FrenchRepublican {
    const CALENDAR: Calendar = Calendar::FrenchRepublican;

    fn to_jdn(year: i32, month: u32, day: u32) -> CalendarResult<i64> {
        Self::check_month(month)?;
        Ok(year_start(i64::from(year))
            + MONTH_DAYS * (i64::from(month) - 1)
            + i64::from(day)
            - 1)
    }

    /// The estimate uses the mean Gregorian year (146097 / 400 days), which
    /// is also this calendar's mean year, so the correction loops move at
    /// most a year or two.
    fn from_jdn(jdn: i64) -> (i32, u32, u32) {
        let jdn = jdn.clamp(super::MIN_JDN, super::MAX_JDN);
        let mut year = ((jdn - EPOCH) * 400).div_euclid(146_097) + 1;
        while year_start(year) > jdn {
            year -= 1;
        }
        while year_start(year + 1) <= jdn {
            year += 1;
        }

        let day_of_year = jdn - year_start(year);
        (
            clamp_year(year),
            small(day_of_year / MONTH_DAYS + 1),
            small(day_of_year % MONTH_DAYS + 1),
        )
    }

    fn is_leap_year(year: i32) -> bool {
        let aligned = i64::from(year) + GREGORIAN_OFFSET;
        i32::try_from(aligned).is_ok_and(Gregorian::is_leap_year)
    }

    fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
        Self::check_month(month)?;
        Ok(match month {
            13 if Self::is_leap_year(year) => 6,
            13 => 5,
            _ => 30,
        })
    }

    fn months_in_year() -> u32 {
        13
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        let jdn = FrenchRepublican::to_jdn(1, 1, 1).unwrap();
        assert_eq!(jdn, Gregorian::to_jdn(1792, 9, 22).unwrap());
        assert_eq!(FrenchRepublican::from_jdn(jdn), (1, 1, 1));
        assert_eq!(FrenchRepublican::from_jdn(jdn - 1), (0, 13, 6));
    }

    #[test]
    fn leap_rule_follows_gregorian() {
        assert!(FrenchRepublican::is_leap_year(4)); // 1796
        assert!(!FrenchRepublican::is_leap_year(3)); // 1795
        assert!(!FrenchRepublican::is_leap_year(108)); // 1900
        assert!(FrenchRepublican::is_leap_year(208)); // 2000
        assert_eq!(FrenchRepublican::days_in_month(4, 13).unwrap(), 6);
        assert_eq!(FrenchRepublican::days_in_month(5, 13).unwrap(), 5);
        assert_eq!(FrenchRepublican::days_in_month(5, 7).unwrap(), 30);
    }

    #[test]
    fn known_dates() {
        let jdn = FrenchRepublican::to_jdn(4, 13, 6).unwrap();
        assert_eq!(Gregorian::from_jdn(jdn), (1796, 9, 21));
        let jdn = FrenchRepublican::to_jdn(5, 1, 1).unwrap();
        assert_eq!(Gregorian::from_jdn(jdn), (1796, 9, 22));
        let jdn = FrenchRepublican::to_jdn(14, 4, 11).unwrap();
        assert_eq!(Gregorian::from_jdn(jdn), (1805, 12, 31));
    }

    #[test]
    fn round_trip_every_month() {
        for year in [-5, 0, 1, 3, 4, 14, 100, 208, 1000] {
            for month in 1..=13 {
                let last = FrenchRepublican::days_in_month(year, month).unwrap();
                for day in [1, last] {
                    let jdn = FrenchRepublican::to_jdn(year, month, day).unwrap();
                    assert_eq!(FrenchRepublican::from_jdn(jdn), (year, month, day));
                }
            }
        }
    }
}
