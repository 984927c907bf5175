//! Display must give back the parsed text unchanged.

use crate::date::parse_date;

const INPUTS: &[&str] = &[
    "1 JAN 1900",
    "  1   jan 1900  ",
    "ABT 1900",
    "cal\t1900",
    "EST 44 B.C.",
    "BEF @#DJULIAN@ 1 MAR 1700/01",
    "AFT 21 FEB 1750/51",
    "BET 1900 AND 1910",
    "bet @#DHEBREW@ TSH 5500 and NSN 5501",
    "FROM 1900",
    "FROM 1900 TO 1910",
    "TO 1910",
    "INT 1900 (about (roughly) then)",
    "INT 1900",
    "(sometime in the spring)",
    "@#DFRENCH R@ 1 VEND 1",
    "@#DROMAN@ 1 JAN 1900",
    "100 BC",
];

#[test]
fn display_returns_original() {
    for input in INPUTS {
        let date = parse_date(input).unwrap();
        assert_eq!(date.to_string(), *input);
        assert_eq!(date.original(), *input);
    }
}

#[test]
fn reparse_gives_same_value() {
    for input in INPUTS {
        let date = parse_date(input).unwrap();
        let again = parse_date(&date.to_string()).unwrap();
        assert_eq!(again, date);
    }
}

#[test]
fn conversion_keeps_original() {
    for input in INPUTS {
        let date = parse_date(input).unwrap();
        if let Ok(gregorian) = date.to_gregorian() {
            assert_eq!(gregorian.original(), *input);
        }
    }
}
