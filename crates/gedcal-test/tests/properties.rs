//! Behavioural guarantees of the public date API.

use std::cmp::Ordering;

use gedcal_date::ValidationError;
use gedcal_test::{Calendar, Modifier, ParseErrorKind, YearSpan, date, parse_date};

#[test_log::test]
fn original_text_is_idempotent() {
    for input in [
        "1 JAN 1900",
        "abt  1900",
        "BET @#DJULIAN@ 1700 AND 1710",
        "INT 1900 (as (written))",
        "(phrase only)",
        "@#DFRENCH R@ FROM 1 VEND 1 TO 2 BRUM 1",
        "\t21 FEB 1750/51\n",
    ] {
        assert_eq!(date(input).to_string(), input);
    }
}

#[test]
fn julian_gregorian_switchover() {
    let julian = date("@#DJULIAN@ 4 OCT 1582");
    let gregorian = date("14 OCT 1582");
    assert_eq!(julian.compare(&gregorian), Ordering::Equal);
    assert_eq!(date("@#DJULIAN@ 5 OCT 1582").compare(&gregorian), Ordering::Greater);
}

#[test]
fn hebrew_epoch() {
    let hebrew = date("@#DHEBREW@ 1 TSH 5785");
    assert_eq!(hebrew.compare(&date("3 OCT 2024")), Ordering::Equal);
}

#[test]
fn french_republican_epoch() {
    let french = date("@#DFRENCH R@ 1 VEND 1");
    assert_eq!(french.compare(&date("22 SEP 1792")), Ordering::Equal);
}

#[test]
fn historical_vectors() {
    for (other, gregorian) in [
        ("@#DFRENCH R@ 9 THER 2", "27 JUL 1794"),
        ("@#DFRENCH R@ 1 VEND 5", "22 SEP 1796"),
        ("@#DHEBREW@ 15 NSN 5784", "23 APR 2024"),
        ("@#DHEBREW@ 1 TSH 5760", "11 SEP 1999"),
        ("@#DJULIAN@ 25 DEC 1642", "4 JAN 1643"),
        ("@#DJULIAN@ 1 JAN 1 BC", "30 DEC 2 BC"),
    ] {
        assert!(date(other).is_equal(&date(gregorian)), "{other} vs {gregorian}");
    }
}

#[test]
fn bc_ordering() {
    assert_eq!(date("100 BC").compare(&date("200 BC")), Ordering::Greater);
    assert_eq!(date("100 BC").compare(&date("2020")), Ordering::Less);
    assert!(date("1 B.C.").is_before(&date("1")));
}

#[test]
fn partial_dates_default_to_first() {
    assert_eq!(date("1920").compare(&date("1 JAN 1920")), Ordering::Equal);
    assert_eq!(date("MAR 1920").compare(&date("1 MAR 1920")), Ordering::Equal);
    assert!(date("@#DJULIAN@ 1920").is_equal(&date("14 JAN 1920")));
}

#[test]
fn validation() {
    assert!(matches!(
        date("30 FEB 2023").validate(),
        Err(ValidationError::DayOutOfRange { max_day: 28, .. })
    ));
    assert!(date("29 FEB 2000").validate().is_ok());
}

#[test]
fn interval_exactness() {
    let span = date("15 MAR 1920").years_between(&date("20 JUN 1985")).unwrap();
    assert_eq!(span, YearSpan { years: 65, exact: true });
    let span = date("1920").years_between(&date("20 JUN 1985")).unwrap();
    assert_eq!(span, YearSpan { years: 65, exact: false });
    let span = date("@#DJULIAN@ 1 JAN 1700").years_between(&date("1 JAN 1800")).unwrap();
    assert_eq!(span, YearSpan { years: 100, exact: false });
    let span = date("@#DHEBREW@ 5785").years_between(&date("2024")).unwrap();
    assert_eq!(span, YearSpan { years: 3761, exact: false });
}

#[test]
fn dual_dating() {
    let d = date("21 FEB 1750/51");
    assert_eq!(d.year(), Some(1750));
    assert_eq!(d.dual_year(), Some(1751));
    assert_eq!(date("1699/00").dual_year(), Some(1600));
    assert_eq!(
        parse_date("1750/51/52").unwrap_err().kind,
        ParseErrorKind::InvalidDualYearFormat
    );
}

#[test_log::test]
fn range_endpoints_inherit_calendar() {
    // The start takes the outer escape, the end takes the start's calendar.
    let d = date("@#DHEBREW@ BET TSH 5700 AND NSN 5701");
    let end = d.end_date().unwrap();
    assert_eq!(d.calendar(), Calendar::Hebrew);
    assert_eq!(end.calendar(), Calendar::Hebrew);

    let d = date("FROM @#DFRENCH R@ 1 VEND 1 TO 1 COMP 1");
    assert_eq!(d.end_date().unwrap().calendar(), Calendar::FrenchRepublican);
    assert_eq!(d.modifier(), Modifier::FromTo);

    // An explicit escape on the end wins.
    let d = date("BET @#DJULIAN@ 1700 AND @#DGREGORIAN@ 1800");
    assert_eq!(d.end_date().unwrap().calendar(), Calendar::Gregorian);
}

#[test]
fn error_taxonomy() {
    for (input, kind) in [
        ("", ParseErrorKind::EmptyDate),
        ("0", ParseErrorKind::InvalidYear),
        ("32 JAN 1900", ParseErrorKind::InvalidDay),
        ("1 VEND 1900", ParseErrorKind::InvalidMonthForCalendar),
        ("1 2 JAN 1900", ParseErrorKind::TooManyComponents),
        ("BET 1900", ParseErrorKind::MissingRangeDelimiter),
        ("BET 1900 AND X", ParseErrorKind::InvalidRangeEndpoint),
        ("FROM 1900 TO 0", ParseErrorKind::InvalidRangeEndpoint),
        ("1900/1", ParseErrorKind::InvalidDualYearFormat),
    ] {
        assert_eq!(parse_date(input).unwrap_err().kind, kind, "{input:?}");
    }
}

#[test]
fn to_naive_date_requires_complete_gregorian() {
    let naive = date("15 MAR 1920").to_naive_date().unwrap();
    assert_eq!(naive, chrono::NaiveDate::from_ymd_opt(1920, 3, 15).unwrap());
    let converted = date("@#DJULIAN@ 4 OCT 1582").to_gregorian().unwrap();
    assert_eq!(
        converted.to_naive_date().unwrap(),
        chrono::NaiveDate::from_ymd_opt(1582, 10, 14).unwrap()
    );
}

#[test]
fn serializes_to_json() {
    let json = serde_json::to_value(date("BET 1900 AND 1910")).unwrap();
    assert_eq!(json["kind"], "between");
    assert_eq!(json["start"]["year"], 1900);
    assert_eq!(json["end"]["year"], 1910);
    assert_eq!(json["original"], "BET 1900 AND 1910");
}
