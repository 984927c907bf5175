//! Hebrew lunisolar calendar.
//!
//! Months are numbered from Tishrei regardless of the year's length:
//!
//! | code | month        | days                         |
//! |------|--------------|------------------------------|
//! | 1    | Tishrei      | 30                           |
//! | 2    | Cheshvan     | 29, or 30 in complete years  |
//! | 3    | Kislev       | 30, or 29 in deficient years |
//! | 4    | Tevet        | 29                           |
//! | 5    | Shevat       | 30                           |
//! | 6    | Adar (I)     | 29, or 30 in leap years      |
//! | 7    | Adar II      | 29 in leap years, else none  |
//! | 8–13 | Nisan … Elul | 30, 29, 30, 29, 30, 29       |
//!
//! Month 7 has no days in a common year, so `(year, 7, d)` there lands in
//! Nisan, the same way a day past the end of any month rolls forward.

use super::{Calendar, CalendarResult, CalendarSystem, clamp_year, small};

/// Hebrew calendar, years counted from the creation epoch (AM).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hebrew;

/// JDN of the day before the creation epoch; 1 Tishrei AM 1 is
/// `EPOCH + elapsed_days(1)`, i.e. JDN 347998 (7 October 3761 BC, Julian).
const EPOCH: i64 = 347_997;

const PARTS_PER_HOUR: i64 = 1080;
const HOURS_PER_DAY: i64 = 24;

/// Molad of Tishrei AM 1 (`BaHaRaD`): day 2, 5 hours, 204 parts.
const MOLAD_BEHARAD_HOURS: i64 = 5;
const MOLAD_BEHARAD_PARTS: i64 = 204;

/// Mean lunar month beyond whole days: 12 hours 793 parts.
const MONTH_HOURS: i64 = 12;
const MONTH_PARTS: i64 = 793;

/// Postponement thresholds, in parts after midnight.
const MOLAD_ZAKEN: i64 = 18 * PARTS_PER_HOUR;
const GATARAD: i64 = 9 * PARTS_PER_HOUR + 204;
const BETUTAKPAT: i64 = 15 * PARTS_PER_HOUR + 589;

/// Weekday of an elapsed-day count, 0 = Sunday.
const SUNDAY: i64 = 0;
const MONDAY: i64 = 1;
const TUESDAY: i64 = 2;
const WEDNESDAY: i64 = 3;
const FRIDAY: i64 = 5;

/// Leap years are years 3, 6, 8, 11, 14, 17 and 19 of the Metonic cycle.
fn is_leap(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

/// Lunar months from the epoch to the molad of Tishrei of `year`.
fn months_elapsed(year: i64) -> i64 {
    let cycles = (year - 1).div_euclid(19);
    let in_cycle = (year - 1).rem_euclid(19);
    235 * cycles + 12 * in_cycle + (7 * in_cycle + 1) / 19
}

/// Days from the epoch to 1 Tishrei of `year`.
///
/// The molad of Tishrei is located with the mean lunar month, then the four
/// postponements (dehiyot) are applied in order:
///
/// 1. Molad zaken: a molad at or after noon (18h counted from 6 pm) moves
///    the new year to the next day.
/// 2. `GaTaRaD`: in a common year, a Tuesday molad at or after 9h 204p moves
///    it to Wednesday, and rule 4 then moves it on to Thursday.
/// 3. `BeTUTaKPaT`: after a leap year, a Monday molad at or after 15h 589p
///    moves it to Tuesday.
/// 4. Lo ADU Rosh: the new year never falls on Sunday, Wednesday, or Friday.
///
/// Rules 1–3 are alternatives (at most one day); rule 4 applies afterwards.
fn elapsed_days(year: i64) -> i64 {
    let months = months_elapsed(year);
    let parts_elapsed = MOLAD_BEHARAD_PARTS + MONTH_PARTS * months.rem_euclid(PARTS_PER_HOUR);
    let hours_elapsed = MOLAD_BEHARAD_HOURS
        + MONTH_HOURS * months
        + MONTH_PARTS * months.div_euclid(PARTS_PER_HOUR)
        + parts_elapsed.div_euclid(PARTS_PER_HOUR);
    let mut day = 1 + 29 * months + hours_elapsed.div_euclid(HOURS_PER_DAY);
    let parts = PARTS_PER_HOUR * hours_elapsed.rem_euclid(HOURS_PER_DAY)
        + parts_elapsed.rem_euclid(PARTS_PER_HOUR);
    let weekday = day.rem_euclid(7);

    if parts >= MOLAD_ZAKEN
        || (weekday == TUESDAY && parts >= GATARAD && !is_leap(year))
        || (weekday == MONDAY && parts >= BETUTAKPAT && is_leap(year - 1))
    {
        day += 1;
    }

    if matches!(day.rem_euclid(7), SUNDAY | WEDNESDAY | FRIDAY) {
        day += 1;
    }

    day
}

/// JDN of 1 Tishrei of `year`.
fn new_year(year: i64) -> i64 {
    EPOCH + elapsed_days(year)
}

/// Days in `year`: 353, 354 or 355 for common years and 383, 384 or 385
/// for leap years (deficient, regular, complete).
fn year_length(year: i64) -> i64 {
    new_year(year + 1) - new_year(year)
}

/// Length of `month` given the year's leap flag and total length.
fn month_length(month: u32, leap: bool, length: i64) -> u32 {
    match month {
        2 if length % 10 == 5 => 30,
        3 if length % 10 == 3 => 29,
        6 if leap => 30,
        7 if leap => 29,
        7 => 0,
        1 | 3 | 5 | 8 | 10 | 12 => 30,
        _ => 29,
    }
}

impl Hebrew {
    /// JDN of Rosh Hashanah (1 Tishrei) of `year`.
    #[must_use]
    pub fn new_year(year: i32) -> i64 {
        new_year(i64::from(year))
    }

    /// Number of days in `year`.
    #[must_use]
    pub fn year_length(year: i32) -> u32 {
        small(year_length(i64::from(year)))
    }
}

impl CalendarSystem for Hebrew {
    const CALENDAR: Calendar = Calendar::Hebrew;

    fn to_jdn(year: i32, month: u32, day: u32) -> CalendarResult<i64> {
        Self::check_month(month)?;
        let year = i64::from(year);
        let leap = is_leap(year);
        let length = year_length(year);
        let before: i64 = (1..month)
            .map(|m| i64::from(month_length(m, leap, length)))
            .sum();
        Ok(new_year(year) + before + i64::from(day) - 1)
    }

    /// Locates the year by estimate and correction. The estimate uses the
    /// mean year (35975351 / 98496 days) and is off by at most a year or two,
    /// so each correction loop runs only a handful of times.
    fn from_jdn(jdn: i64) -> (i32, u32, u32) {
        let jdn = jdn.clamp(super::MIN_JDN, super::MAX_JDN);
        let mut year = ((jdn - EPOCH) * 98_496).div_euclid(35_975_351) + 1;
        while new_year(year) > jdn {
            year -= 1;
        }
        while new_year(year + 1) <= jdn {
            year += 1;
        }

        let leap = is_leap(year);
        let length = year_length(year);
        let mut remaining = jdn - new_year(year);
        let mut month = 1;
        // remaining < length, so this stops by Elul
        while month < 13 {
            let days = i64::from(month_length(month, leap, length));
            if remaining < days {
                break;
            }
            remaining -= days;
            month += 1;
        }
        (clamp_year(year), month, small(remaining + 1))
    }

    fn is_leap_year(year: i32) -> bool {
        is_leap(i64::from(year))
    }

    fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
        Self::check_month(month)?;
        let year = i64::from(year);
        Ok(month_length(month, is_leap(year), year_length(year)))
    }

    fn months_in_year() -> u32 {
        13
    }
}
