//! Per-calendar month code tables.
//!
//! Gregorian and Julian share one table. The tables are plain statics: they
//! are built at compile time and never mutated.

use gedcal_core::Calendar;

/// Month codes and names of one calendar, indexed by month number - 1.
#[derive(Debug)]
pub struct MonthTable {
    pub codes: &'static [&'static str],
    pub names: &'static [&'static str],
}

static GREGORIAN_MONTHS: MonthTable = MonthTable {
    codes: &[
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ],
    names: &[
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
};

static HEBREW_MONTHS: MonthTable = MonthTable {
    codes: &[
        "TSH", "CSH", "KSL", "TVT", "SHV", "ADR", "ADS", "NSN", "IYR", "SVN", "TMZ", "AAV", "ELL",
    ],
    names: &[
        "Tishrei", "Cheshvan", "Kislev", "Tevet", "Shevat", "Adar", "Adar II", "Nisan", "Iyar",
        "Sivan", "Tammuz", "Av", "Elul",
    ],
};

static FRENCH_MONTHS: MonthTable = MonthTable {
    codes: &[
        "VEND", "BRUM", "FRIM", "NIVO", "PLUV", "VENT", "GERM", "FLOR", "PRAI", "MESS", "THER",
        "FRUC", "COMP",
    ],
    names: &[
        "Vendémiaire",
        "Brumaire",
        "Frimaire",
        "Nivôse",
        "Pluviôse",
        "Ventôse",
        "Germinal",
        "Floréal",
        "Prairial",
        "Messidor",
        "Thermidor",
        "Fructidor",
        "Jours complémentaires",
    ],
};

/// Month table used to read month codes of `calendar`.
#[must_use]
pub fn month_table(calendar: Calendar) -> &'static MonthTable {
    match calendar {
        Calendar::Gregorian | Calendar::Julian => &GREGORIAN_MONTHS,
        Calendar::Hebrew => &HEBREW_MONTHS,
        Calendar::FrenchRepublican => &FRENCH_MONTHS,
    }
}

impl MonthTable {
    /// Month number of `code`, ignoring ASCII case.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<u32> {
        self.codes
            .iter()
            .position(|c| c.eq_ignore_ascii_case(code))
            .and_then(|idx| u32::try_from(idx + 1).ok())
    }

    /// Upper-case code of `month`, e.g. `"JAN"`.
    #[must_use]
    pub fn code(&self, month: u32) -> Option<&'static str> {
        let idx = usize::try_from(month.checked_sub(1)?).ok()?;
        self.codes.get(idx).copied()
    }

    /// Full name of `month`.
    #[must_use]
    pub fn name(&self, month: u32) -> Option<&'static str> {
        let idx = usize::try_from(month.checked_sub(1)?).ok()?;
        self.names.get(idx).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(month_table(Calendar::Gregorian).len(), 12);
        assert_eq!(month_table(Calendar::Julian).len(), 12);
        assert_eq!(month_table(Calendar::Hebrew).len(), 13);
        assert_eq!(month_table(Calendar::FrenchRepublican).len(), 13);
    }

    #[test]
    fn lookup_ignores_case() {
        let table = month_table(Calendar::Gregorian);
        assert_eq!(table.lookup("jan"), Some(1));
        assert_eq!(table.lookup("Dec"), Some(12));
        assert_eq!(table.lookup("TSH"), None);
    }

    #[test]
    fn calendar_specific_codes() {
        assert_eq!(month_table(Calendar::Hebrew).lookup("ads"), Some(7));
        assert_eq!(month_table(Calendar::Hebrew).lookup("ELL"), Some(13));
        assert_eq!(month_table(Calendar::FrenchRepublican).lookup("COMP"), Some(13));
        assert_eq!(month_table(Calendar::FrenchRepublican).lookup("JAN"), None);
    }

    #[test]
    fn reverse_lookup() {
        let table = month_table(Calendar::FrenchRepublican);
        assert_eq!(table.code(1), Some("VEND"));
        assert_eq!(table.name(2), Some("Brumaire"));
        assert_eq!(table.code(0), None);
        assert_eq!(table.code(14), None);
    }
}
