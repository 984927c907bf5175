//! Date grammar error types.

use std::fmt;

use crate::calendar::Calendar;

/// Result type for date parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A grammar violation. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The date text, or range endpoint, that failed.
    pub input: String,
    /// Additional context or message.
    pub message: String,
    cause: Option<Box<ParseError>>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, input: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            message: message.into(),
            cause: None,
        }
    }

    #[must_use]
    pub fn empty(input: &str) -> Self {
        Self::new(ParseErrorKind::EmptyDate, input, "no date components")
    }

    #[must_use]
    pub fn invalid_year(input: &str, token: &str) -> Self {
        Self::new(
            ParseErrorKind::InvalidYear,
            input,
            format!("expected a positive year, found {token:?}"),
        )
    }

    #[must_use]
    pub fn invalid_day(input: &str, token: &str) -> Self {
        Self::new(
            ParseErrorKind::InvalidDay,
            input,
            format!("expected a day between 1 and 31, found {token:?}"),
        )
    }

    #[must_use]
    pub fn invalid_month(input: &str, code: &str, calendar: Calendar) -> Self {
        Self::new(
            ParseErrorKind::InvalidMonthForCalendar,
            input,
            format!("{code:?} is not a month of the {calendar} calendar"),
        )
    }

    #[must_use]
    pub fn too_many_components(input: &str, count: usize) -> Self {
        Self::new(
            ParseErrorKind::TooManyComponents,
            input,
            format!("expected at most 3 components, found {count}"),
        )
    }

    #[must_use]
    pub fn missing_delimiter(input: &str, delimiter: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingRangeDelimiter,
            input,
            format!("missing {:?} between range endpoints", delimiter.trim()),
        )
    }

    #[must_use]
    pub fn invalid_dual_year(input: &str, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidDualYearFormat, input, message)
    }

    #[must_use]
    pub fn unsupported_calendar(input: &str, name: &str) -> Self {
        Self::new(
            ParseErrorKind::UnsupportedCalendar,
            input,
            format!("unknown calendar escape {name:?}"),
        )
    }

    /// Wraps the failure of one side of a `BET`/`FROM .. TO` value.
    #[must_use]
    pub fn invalid_endpoint(input: &str, cause: Self) -> Self {
        Self {
            kind: ParseErrorKind::InvalidRangeEndpoint,
            input: input.to_string(),
            message: format!("invalid endpoint {:?}", cause.input),
            cause: Some(Box::new(cause)),
        }
    }

    /// The endpoint error behind an [`ParseErrorKind::InvalidRangeEndpoint`].
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} in {:?}", self.kind, self.message, self.input)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Nothing left after whitespace normalization.
    EmptyDate,
    /// Year missing, zero, non-numeric, or too large.
    InvalidYear,
    /// Day non-numeric or outside `1..=31`.
    InvalidDay,
    /// Month code unknown to the date's calendar.
    InvalidMonthForCalendar,
    /// More than day, month, and year.
    TooManyComponents,
    /// `BET` without `AND`.
    MissingRangeDelimiter,
    /// One side of a range or period failed to parse.
    InvalidRangeEndpoint,
    /// Malformed `Y1/Y2`.
    InvalidDualYearFormat,
    /// Unknown `@#D...@` calendar name.
    UnsupportedCalendar,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDate => write!(f, "empty date"),
            Self::InvalidYear => write!(f, "invalid year"),
            Self::InvalidDay => write!(f, "invalid day"),
            Self::InvalidMonthForCalendar => write!(f, "invalid month for calendar"),
            Self::TooManyComponents => write!(f, "too many components"),
            Self::MissingRangeDelimiter => write!(f, "missing range delimiter"),
            Self::InvalidRangeEndpoint => write!(f, "invalid range endpoint"),
            Self::InvalidDualYearFormat => write!(f, "invalid dual year"),
            Self::UnsupportedCalendar => write!(f, "unsupported calendar"),
        }
    }
}
