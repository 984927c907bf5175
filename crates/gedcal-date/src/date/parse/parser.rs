//! Date grammar parser.

use gedcal_core::Modifier;
use gedcal_core::constants::{AND_DELIMITER, TO_DELIMITER};
use gedcal_core::util::text::split_once_ignore_case;

use super::error::{ParseError, ParseResult};
use super::lexer::{escape_calendar, normalize, split_escape, split_keyword, strip_phrase};
use super::values::parse_components;
use crate::calendar::Calendar;
use crate::date::core::{Date, DatePoint, DateValue, Qualifier};

/// Parses a GEDCOM date value.
///
/// The returned [`Date`] keeps `input` verbatim as its original text.
///
/// ## Errors
/// Returns a [`ParseError`] for the first grammar violation; there is no
/// partial result.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_date(input: &str) -> ParseResult<Date> {
    let text = normalize(input);
    if text.is_empty() {
        return Err(ParseError::empty(input));
    }

    let value = parse_value(&text)?;
    tracing::debug!(modifier = %value.modifier(), "Parsed date");
    Ok(Date::new(input, value))
}

fn parse_value(text: &str) -> ParseResult<DateValue> {
    if let Some(phrase) = strip_phrase(text) {
        tracing::trace!("Date phrase");
        return Ok(DateValue::Phrase {
            text: phrase.to_string(),
        });
    }

    let (calendar, rest) = read_escape(text, Calendar::default());
    let Some((modifier, rest)) = split_keyword(rest) else {
        return Ok(DateValue::Point {
            qualifier: Qualifier::Exact,
            point: parse_point(rest, calendar)?,
        });
    };
    tracing::trace!(%modifier, "Date keyword");

    match modifier {
        Modifier::Between => {
            let (start, end) = split_once_ignore_case(rest, AND_DELIMITER)
                .ok_or_else(|| ParseError::missing_delimiter(text, AND_DELIMITER))?;
            let (start, end) = parse_endpoints(text, start, end, calendar)?;
            Ok(DateValue::Between { start, end })
        }
        Modifier::From => match split_once_ignore_case(rest, TO_DELIMITER) {
            Some((start, end)) => {
                let (start, end) = parse_endpoints(text, start, end, calendar)?;
                Ok(DateValue::From {
                    start,
                    end: Some(end),
                })
            }
            None => Ok(DateValue::From {
                start: parse_point(rest, calendar)?,
                end: None,
            }),
        },
        Modifier::To => Ok(DateValue::To {
            end: parse_point(rest, calendar)?,
        }),
        Modifier::Interpreted => {
            let (date, phrase) = split_interpretation(rest);
            Ok(DateValue::Interpreted {
                point: parse_point(date, calendar)?,
                phrase: phrase.map(str::to_string),
            })
        }
        _ => {
            let qualifier = Qualifier::from_modifier(modifier).unwrap_or_default();
            Ok(DateValue::Point {
                qualifier,
                point: parse_point(rest, calendar)?,
            })
        }
    }
}

/// Reads an optional calendar escape, falling back to `inherited`. An
/// unknown calendar name is dropped along with its escape.
fn read_escape(text: &str, inherited: Calendar) -> (Calendar, &str) {
    let Some((name, rest)) = split_escape(text) else {
        return (inherited, text);
    };
    match escape_calendar(text, name) {
        Ok(calendar) => (calendar, rest),
        Err(err) => {
            tracing::warn!(%err, "Ignoring calendar escape");
            (inherited, rest)
        }
    }
}

/// Parses one (sub)date. Its own escape wins over `inherited`.
fn parse_point(text: &str, inherited: Calendar) -> ParseResult<DatePoint> {
    let (calendar, rest) = read_escape(text, inherited);
    parse_components(rest, calendar)
}

/// Parses both sides of a range or period. The start inherits the outer
/// calendar; the end inherits the calendar the start resolved to.
fn parse_endpoints(
    input: &str,
    start: &str,
    end: &str,
    calendar: Calendar,
) -> ParseResult<(DatePoint, DatePoint)> {
    let start = parse_point(start.trim(), calendar)
        .map_err(|err| ParseError::invalid_endpoint(input, err))?;
    let end = parse_point(end.trim(), start.calendar())
        .map_err(|err| ParseError::invalid_endpoint(input, err))?;
    Ok((start, end))
}

/// Splits `INT <date> (<phrase>)`. The phrase runs to the last `)`, so it
/// may itself contain parentheses; a missing `)` takes the rest of the text.
fn split_interpretation(text: &str) -> (&str, Option<&str>) {
    let Some(open) = text.find('(') else {
        return (text, None);
    };
    let date = text[..open].trim_end();
    let body = &text[open + 1..];
    let phrase = body.rfind(')').map_or(body, |close| &body[..close]);
    (date, Some(phrase))
}
