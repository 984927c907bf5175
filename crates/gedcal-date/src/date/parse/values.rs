//! Date component parsers.

use gedcal_core::constants::DUAL_YEAR_SEPARATOR;

use super::error::{ParseError, ParseResult};
use super::lexer::{fields, split_bc_suffix};
use crate::calendar::Calendar;
use crate::date::core::{DatePoint, month_table};

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a positive year that fits in `i32`.
///
/// ## Errors
/// Returns `InvalidYear` for anything else.
pub fn parse_year(input: &str, token: &str) -> ParseResult<i32> {
    if !is_digits(token) {
        return Err(ParseError::invalid_year(input, token));
    }
    token
        .parse::<i32>()
        .ok()
        .filter(|&year| year > 0)
        .ok_or_else(|| ParseError::invalid_year(input, token))
}

/// Parses `Y1` or `Y1/Y2` into the year and optional secondary year.
///
/// A two-digit `Y2` takes the century of `Y1`, so `1750/51` is 1750 and
/// 1751 while `1699/00` is 1699 and 1600.
///
/// ## Errors
/// Returns `InvalidDualYearFormat` for more than two parts, non-numeric
/// parts, or a `Y2` that is neither two nor four digits. Returns
/// `InvalidYear` for a bad `Y1` without a `/`.
pub fn parse_year_with_dual(input: &str, token: &str) -> ParseResult<(i32, Option<i32>)> {
    let mut parts = token.split(DUAL_YEAR_SEPARATOR);
    let first = parts.next().unwrap_or_default();
    let Some(second) = parts.next() else {
        return parse_year(input, first).map(|year| (year, None));
    };
    if parts.next().is_some() {
        return Err(ParseError::invalid_dual_year(
            input,
            format!("{token:?} has more than two years"),
        ));
    }
    if !is_digits(first) || !is_digits(second) {
        return Err(ParseError::invalid_dual_year(
            input,
            format!("{token:?} is not numeric"),
        ));
    }
    let year = parse_year(input, first)?;
    let dual = match second.len() {
        2 => {
            let tail: i32 = second
                .parse()
                .map_err(|err| ParseError::invalid_dual_year(input, format!("{second:?}: {err}")))?;
            let candidate = i64::from(year) / 100 * 100 + i64::from(tail);
            i32::try_from(candidate).map_err(|err| {
                ParseError::invalid_dual_year(input, format!("{token:?}: {err}"))
            })?
        }
        4 => second
            .parse()
            .map_err(|err| ParseError::invalid_dual_year(input, format!("{second:?}: {err}")))?,
        _ => {
            return Err(ParseError::invalid_dual_year(
                input,
                format!("second year {second:?} must have 2 or 4 digits"),
            ));
        }
    };
    Ok((year, Some(dual)))
}

/// Parses a day of month in `1..=31`. Month lengths are checked later by
/// validation.
///
/// ## Errors
/// Returns `InvalidDay` for anything else.
pub fn parse_day(input: &str, token: &str) -> ParseResult<u32> {
    if !is_digits(token) {
        return Err(ParseError::invalid_day(input, token));
    }
    token
        .parse::<u32>()
        .ok()
        .filter(|day| (1..=31).contains(day))
        .ok_or_else(|| ParseError::invalid_day(input, token))
}

/// Resolves a month code in the table of `calendar`.
///
/// ## Errors
/// Returns `InvalidMonthForCalendar` naming the calendar.
pub fn parse_month(input: &str, code: &str, calendar: Calendar) -> ParseResult<u32> {
    month_table(calendar)
        .lookup(code)
        .ok_or_else(|| ParseError::invalid_month(input, code, calendar))
}

/// Parses `[day] [month] year [BC]` in `calendar`.
///
/// ## Errors
/// Returns the error of the first component that fails, `EmptyDate` for no
/// fields, or `TooManyComponents` for more than three.
pub fn parse_components(input: &str, calendar: Calendar) -> ParseResult<DatePoint> {
    let all = fields(input);
    if all.is_empty() {
        return Err(ParseError::empty(input));
    }
    let (parts, bc) = split_bc_suffix(&all);
    let (day, month, year) = match *parts {
        [] => return Err(ParseError::invalid_year(input, "")),
        [year] => (None, None, year),
        [month, year] => (None, Some(month), year),
        [day, month, year] => (Some(day), Some(month), year),
        _ => return Err(ParseError::too_many_components(input, parts.len())),
    };
    let day = day.map(|token| parse_day(input, token)).transpose()?;
    let month = month
        .map(|code| parse_month(input, code, calendar))
        .transpose()?;
    let (year, dual_year) = parse_year_with_dual(input, year)?;
    Ok(DatePoint::from_parts(calendar, year, month, day)
        .with_bc(bc)
        .with_dual_year(dual_year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse::ParseErrorKind;

    fn kind<T: std::fmt::Debug>(result: ParseResult<T>) -> ParseErrorKind {
        result.unwrap_err().kind
    }

    #[test]
    fn test_year() {
        assert_eq!(parse_year("", "1900").unwrap(), 1900);
        assert_eq!(kind(parse_year("", "0")), ParseErrorKind::InvalidYear);
        assert_eq!(kind(parse_year("", "-5")), ParseErrorKind::InvalidYear);
        assert_eq!(kind(parse_year("", "+5")), ParseErrorKind::InvalidYear);
        assert_eq!(kind(parse_year("", "99999999999")), ParseErrorKind::InvalidYear);
    }

    #[test]
    fn test_dual_year() {
        assert_eq!(parse_year_with_dual("", "1750/51").unwrap(), (1750, Some(1751)));
        assert_eq!(parse_year_with_dual("", "1699/00").unwrap(), (1699, Some(1600)));
        assert_eq!(parse_year_with_dual("", "1750/1751").unwrap(), (1750, Some(1751)));
        assert_eq!(parse_year_with_dual("", "1750").unwrap(), (1750, None));
    }

    #[test]
    fn test_dual_year_errors() {
        for token in ["1750/51/52", "1750/ab", "17x0/51", "1750/", "1750/5", "1750/123"] {
            assert_eq!(
                kind(parse_year_with_dual("", token)),
                ParseErrorKind::InvalidDualYearFormat,
                "{token}"
            );
        }
        assert_eq!(
            kind(parse_year_with_dual("", "0/51")),
            ParseErrorKind::InvalidYear
        );
    }

    #[test]
    fn test_day() {
        assert_eq!(parse_day("", "31").unwrap(), 31);
        assert_eq!(kind(parse_day("", "0")), ParseErrorKind::InvalidDay);
        assert_eq!(kind(parse_day("", "32")), ParseErrorKind::InvalidDay);
        assert_eq!(kind(parse_day("", "1st")), ParseErrorKind::InvalidDay);
    }

    #[test]
    fn test_month_names_calendar() {
        let err = parse_month("", "VEND", Calendar::Gregorian).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidMonthForCalendar);
        assert!(err.message.contains("gregorian"));
        assert_eq!(parse_month("", "vend", Calendar::FrenchRepublican).unwrap(), 1);
    }

    #[test]
    fn test_components() {
        let point = parse_components("21 FEB 1750/51", Calendar::Gregorian).unwrap();
        assert_eq!(point.day(), Some(21));
        assert_eq!(point.month(), Some(2));
        assert_eq!(point.year(), Some(1750));
        assert_eq!(point.dual_year(), Some(1751));

        let point = parse_components("44 BC", Calendar::Julian).unwrap();
        assert!(point.is_bc());
        assert_eq!(point.astronomical_year(), Some(-43));
    }

    #[test]
    fn test_component_errors() {
        assert_eq!(kind(parse_components("", Calendar::Gregorian)), ParseErrorKind::EmptyDate);
        assert_eq!(kind(parse_components("BC", Calendar::Gregorian)), ParseErrorKind::InvalidYear);
        assert_eq!(
            kind(parse_components("1 JAN 1900 12", Calendar::Gregorian)),
            ParseErrorKind::TooManyComponents
        );
        assert_eq!(
            kind(parse_components("JAN", Calendar::Gregorian)),
            ParseErrorKind::InvalidYear
        );
    }
}
