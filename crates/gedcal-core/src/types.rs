//! Closed enumerations shared by the parser, the calendar kernel, and the
//! front end.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ABOUT_KEYWORD, AFTER_KEYWORD, BEFORE_KEYWORD, BETWEEN_KEYWORD, CALCULATED_KEYWORD,
    ESTIMATED_KEYWORD, FRENCH_NAME, FROM_KEYWORD, GREGORIAN_NAME, HEBREW_NAME,
    INTERPRETED_KEYWORD, JULIAN_NAME, TO_KEYWORD,
};
use crate::error::CoreError;

/// Calendar system a date is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    #[default]
    Gregorian,
    Julian,
    Hebrew,
    FrenchRepublican,
}

impl Calendar {
    pub const ALL: [Self; 4] = [
        Self::Gregorian,
        Self::Julian,
        Self::Hebrew,
        Self::FrenchRepublican,
    ];

    /// Name used inside a `@#D...@` escape.
    #[must_use]
    pub const fn escape_name(self) -> &'static str {
        match self {
            Self::Gregorian => GREGORIAN_NAME,
            Self::Julian => JULIAN_NAME,
            Self::Hebrew => HEBREW_NAME,
            Self::FrenchRepublican => FRENCH_NAME,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Julian => "julian",
            Self::Hebrew => "hebrew",
            Self::FrenchRepublican => "french_republican",
        }
    }

    /// Whether the calendar numbers years across an era boundary (BC/AD).
    #[must_use]
    pub const fn has_eras(self) -> bool {
        matches!(self, Self::Gregorian | Self::Julian)
    }
}

impl std::fmt::Display for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Calendar {
    type Err = CoreError;

    /// Accepts escape names (`FRENCH R`) as well as the snake-case names,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|cal| {
                cal.escape_name().eq_ignore_ascii_case(name)
                    || cal.as_str().eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| CoreError::UnsupportedCalendar(name.to_string()))
    }
}

/// Qualifier attached to a date value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    #[default]
    None,
    About,
    Calculated,
    Estimated,
    Before,
    After,
    Between,
    From,
    To,
    FromTo,
    Interpreted,
}

impl Modifier {
    pub const ALL: [Self; 11] = [
        Self::None,
        Self::About,
        Self::Calculated,
        Self::Estimated,
        Self::Before,
        Self::After,
        Self::Between,
        Self::From,
        Self::To,
        Self::FromTo,
        Self::Interpreted,
    ];

    /// Leading keywords, in the order the grammar tries them.
    pub const KEYWORDS: [(&'static str, Self); 9] = [
        (ABOUT_KEYWORD, Self::About),
        (CALCULATED_KEYWORD, Self::Calculated),
        (ESTIMATED_KEYWORD, Self::Estimated),
        (BEFORE_KEYWORD, Self::Before),
        (AFTER_KEYWORD, Self::After),
        (BETWEEN_KEYWORD, Self::Between),
        (FROM_KEYWORD, Self::From),
        (TO_KEYWORD, Self::To),
        (INTERPRETED_KEYWORD, Self::Interpreted),
    ];

    /// Looks up a leading keyword, ignoring ASCII case.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(kw, _)| kw.eq_ignore_ascii_case(word))
            .map(|&(_, modifier)| modifier)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::About => "about",
            Self::Calculated => "calculated",
            Self::Estimated => "estimated",
            Self::Before => "before",
            Self::After => "after",
            Self::Between => "between",
            Self::From => "from",
            Self::To => "to",
            Self::FromTo => "from_to",
            Self::Interpreted => "interpreted",
        }
    }

    /// `ABT`, `CAL` and `EST`.
    #[must_use]
    pub const fn is_approximate(self) -> bool {
        matches!(self, Self::About | Self::Calculated | Self::Estimated)
    }

    /// `BET ... AND ...`
    #[must_use]
    pub const fn is_range(self) -> bool {
        matches!(self, Self::Between)
    }

    /// `FROM`, `TO`, and `FROM ... TO ...`
    #[must_use]
    pub const fn is_period(self) -> bool {
        matches!(self, Self::From | Self::To | Self::FromTo)
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::from_keyword(name)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|m| m.as_str().eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| CoreError::UnknownModifier(name.to_string()))
    }
}
