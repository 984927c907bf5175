use std::cmp::Ordering;

use crate::date::core::{Date, DatePoint};

/// Sort key of a point within its own calendar. Missing month and day count
/// as the first; a missing year sorts before every known one.
fn component_key(point: Option<&DatePoint>) -> (Option<i32>, u32, u32) {
    point.map_or((None, 1, 1), |point| {
        (
            point.astronomical_year(),
            point.month().unwrap_or(1),
            point.day().unwrap_or(1),
        )
    })
}

fn compare_points(a: Option<&DatePoint>, b: Option<&DatePoint>) -> Ordering {
    if let (Some(pa), Some(pb)) = (a, b)
        && pa.calendar() != pb.calendar()
        && let (Some(ja), Some(jb)) = (pa.jdn(), pb.jdn())
    {
        return ja.cmp(&jb);
    }
    component_key(a).cmp(&component_key(b))
}

impl Date {
    /// Chronological order of the primary points of two dates.
    ///
    /// Points in different calendars are compared by Julian Day Number.
    /// When either side has no year the comparison falls back to the
    /// components, treating a missing month or day as 1. Phrases compare as
    /// dates with nothing known.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        compare_points(self.point(), other.point())
    }

    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.compare(other).is_lt()
    }

    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.compare(other).is_gt()
    }

    /// Same chronological position. `1920` equals `1 JAN 1920`.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}

/// [`Date::compare`] over optional dates; `None` when either is absent.
#[must_use]
pub fn compare(a: Option<&Date>, b: Option<&Date>) -> Option<Ordering> {
    Some(a?.compare(b?))
}

/// `false` when either date is absent.
#[must_use]
pub fn is_before(a: Option<&Date>, b: Option<&Date>) -> bool {
    compare(a, b).is_some_and(Ordering::is_lt)
}

/// `false` when either date is absent.
#[must_use]
pub fn is_after(a: Option<&Date>, b: Option<&Date>) -> bool {
    compare(a, b).is_some_and(Ordering::is_gt)
}

/// `false` when either date is absent.
#[must_use]
pub fn is_equal(a: Option<&Date>, b: Option<&Date>) -> bool {
    compare(a, b).is_some_and(Ordering::is_eq)
}
