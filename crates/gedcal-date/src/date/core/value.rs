//! Parsed date values.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::point::DatePoint;
use crate::calendar::Calendar;
use crate::date::parse::{ParseError, parse_date};
use gedcal_core::Modifier;

/// Qualifier on a single-point date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    #[default]
    Exact,
    About,
    Calculated,
    Estimated,
    Before,
    After,
}

impl Qualifier {
    #[must_use]
    pub const fn modifier(self) -> Modifier {
        match self {
            Self::Exact => Modifier::None,
            Self::About => Modifier::About,
            Self::Calculated => Modifier::Calculated,
            Self::Estimated => Modifier::Estimated,
            Self::Before => Modifier::Before,
            Self::After => Modifier::After,
        }
    }

    /// Maps the single-point modifiers back; range, period, and
    /// interpretation modifiers have no qualifier.
    #[must_use]
    pub const fn from_modifier(modifier: Modifier) -> Option<Self> {
        match modifier {
            Modifier::None => Some(Self::Exact),
            Modifier::About => Some(Self::About),
            Modifier::Calculated => Some(Self::Calculated),
            Modifier::Estimated => Some(Self::Estimated),
            Modifier::Before => Some(Self::Before),
            Modifier::After => Some(Self::After),
            Modifier::Between
            | Modifier::From
            | Modifier::To
            | Modifier::FromTo
            | Modifier::Interpreted => None,
        }
    }
}

/// Everything a date string can express.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateValue {
    /// `(free text)`, kept verbatim without the parentheses.
    Phrase { text: String },
    /// `INT <date> (<phrase>)`.
    Interpreted {
        point: DatePoint,
        phrase: Option<String>,
    },
    /// A plain or qualified single date.
    Point {
        qualifier: Qualifier,
        point: DatePoint,
    },
    /// `BET <start> AND <end>`.
    Between { start: DatePoint, end: DatePoint },
    /// `FROM <start>` with an optional `TO <end>`.
    From {
        start: DatePoint,
        end: Option<DatePoint>,
    },
    /// `TO <end>`.
    To { end: DatePoint },
}

impl DateValue {
    #[must_use]
    pub const fn modifier(&self) -> Modifier {
        match self {
            Self::Phrase { .. } => Modifier::None,
            Self::Interpreted { .. } => Modifier::Interpreted,
            Self::Point { qualifier, .. } => qualifier.modifier(),
            Self::Between { .. } => Modifier::Between,
            Self::From { end: None, .. } => Modifier::From,
            Self::From { end: Some(_), .. } => Modifier::FromTo,
            Self::To { .. } => Modifier::To,
        }
    }

    /// The point the value is anchored on: the start of a range or period,
    /// the end of a `TO` period. `None` for phrases.
    #[must_use]
    pub const fn point(&self) -> Option<&DatePoint> {
        match self {
            Self::Phrase { .. } => None,
            Self::Interpreted { point, .. } | Self::Point { point, .. } => Some(point),
            Self::Between { start, .. } | Self::From { start, .. } => Some(start),
            Self::To { end } => Some(end),
        }
    }

    /// Second point of a `BET`/`FROM .. TO` value.
    #[must_use]
    pub const fn end_point(&self) -> Option<&DatePoint> {
        match self {
            Self::Between { end, .. } => Some(end),
            Self::From { end, .. } => end.as_ref(),
            _ => None,
        }
    }

    /// Every calendar point in the value, in textual order.
    #[must_use]
    pub fn points(&self) -> Vec<&DatePoint> {
        self.point().into_iter().chain(self.end_point()).collect()
    }

    /// Applies `f` to every point, keeping the shape of the value.
    pub(crate) fn try_map_points<E>(
        &self,
        mut f: impl FnMut(&DatePoint) -> Result<DatePoint, E>,
    ) -> Result<Self, E> {
        Ok(match self {
            Self::Phrase { text } => Self::Phrase { text: text.clone() },
            Self::Interpreted { point, phrase } => Self::Interpreted {
                point: f(point)?,
                phrase: phrase.clone(),
            },
            Self::Point { qualifier, point } => Self::Point {
                qualifier: *qualifier,
                point: f(point)?,
            },
            Self::Between { start, end } => Self::Between {
                start: f(start)?,
                end: f(end)?,
            },
            Self::From { start, end } => Self::From {
                start: f(start)?,
                end: end.as_ref().map(&mut f).transpose()?,
            },
            Self::To { end } => Self::To { end: f(end)? },
        })
    }
}

/// A parsed date together with the exact text it came from.
///
/// `Display` writes the original text back unchanged, so a value can always
/// be re-emitted byte for byte. Dates are immutable; conversions return new
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Date {
    original: String,
    #[serde(flatten)]
    value: DateValue,
}

impl Date {
    /// Builds a date from a value constructed outside the parser.
    #[must_use]
    pub fn new(original: impl Into<String>, value: DateValue) -> Self {
        Self {
            original: original.into(),
            value,
        }
    }

    /// Parses a date string. Same as [`parse_date`].
    ///
    /// ## Errors
    /// Returns a [`ParseError`] describing the first grammar violation.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_date(input)
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub const fn value(&self) -> &DateValue {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> DateValue {
        self.value
    }

    #[must_use]
    pub const fn modifier(&self) -> Modifier {
        self.value.modifier()
    }

    /// Primary point; see [`DateValue::point`].
    #[must_use]
    pub const fn point(&self) -> Option<&DatePoint> {
        self.value.point()
    }

    /// End of a `BET .. AND ..` or `FROM .. TO ..` value as a date of its own.
    #[must_use]
    pub fn end_date(&self) -> Option<Self> {
        let end = self.value.end_point()?;
        Some(Self::new(
            self.original.clone(),
            DateValue::Point {
                qualifier: Qualifier::Exact,
                point: *end,
            },
        ))
    }

    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.point()?.year()
    }

    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.point()?.month()
    }

    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.point()?.day()
    }

    /// Calendar of the primary point; phrases report the default calendar.
    #[must_use]
    pub fn calendar(&self) -> Calendar {
        self.point().map(DatePoint::calendar).unwrap_or_default()
    }

    #[must_use]
    pub fn is_bc(&self) -> bool {
        self.point().is_some_and(DatePoint::is_bc)
    }

    #[must_use]
    pub fn dual_year(&self) -> Option<i32> {
        self.point()?.dual_year()
    }

    #[must_use]
    pub fn phrase(&self) -> Option<&str> {
        if let DateValue::Phrase { text } = &self.value {
            Some(text)
        } else {
            None
        }
    }

    /// Free-text interpretation source of an `INT` date.
    #[must_use]
    pub fn interpreted_from(&self) -> Option<&str> {
        match &self.value {
            DateValue::Interpreted { phrase, .. } => phrase.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_phrase(&self) -> bool {
        matches!(self.value, DateValue::Phrase { .. })
    }

    #[must_use]
    pub const fn is_interpreted(&self) -> bool {
        matches!(self.value, DateValue::Interpreted { .. })
    }

    /// `BET .. AND ..`.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        self.modifier().is_range()
    }

    /// `FROM`, `TO`, or `FROM .. TO ..`.
    #[must_use]
    pub const fn is_period(&self) -> bool {
        self.modifier().is_period()
    }

    /// `ABT`, `CAL`, or `EST`.
    #[must_use]
    pub const fn is_approximate(&self) -> bool {
        self.modifier().is_approximate()
    }

    /// An unqualified single date.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(
            self.value,
            DateValue::Point {
                qualifier: Qualifier::Exact,
                ..
            }
        )
    }

    /// Primary point carries day, month, and year.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.point().is_some_and(DatePoint::is_complete)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}
