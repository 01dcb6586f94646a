//! Calendar year handling for the search date ranges.
//!
//! A `Year` can only be built from input that names a real calendar year, so
//! the range it produces for search queries is always well-formed.

use chrono::{Datelike, NaiveDate, Utc};
use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year {
    value: i32,
    first: NaiveDate,
    last: NaiveDate,
}

impl Year {
    /// Parse exactly four ASCII digits, e.g. `"2024"`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidYear(input.to_string()));
        }
        let value: i32 = trimmed
            .parse()
            .map_err(|_| Error::InvalidYear(input.to_string()))?;
        Self::from_value(value).ok_or_else(|| Error::InvalidYear(input.to_string()))
    }

    /// The year of today's date in UTC.
    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        Self {
            value: today.year(),
            first: today.with_ordinal(1).unwrap_or(today),
            last: NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today),
        }
    }

    fn from_value(value: i32) -> Option<Self> {
        Some(Self {
            value,
            first: NaiveDate::from_ymd_opt(value, 1, 1)?,
            last: NaiveDate::from_ymd_opt(value, 12, 31)?,
        })
    }

    pub fn value(self) -> i32 {
        self.value
    }

    /// Inclusive search range in GitHub's `start..end` syntax.
    pub fn search_range(self) -> String {
        format!(
            "{}..{}",
            self.first.format("%Y-%m-%d"),
            self.last.format("%Y-%m-%d")
        )
    }

    /// The following year's number, for the sign-off.
    pub fn next(self) -> i32 {
        self.value + 1
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_digit_years() {
        let year = Year::parse("2024").unwrap();
        assert_eq!(year.value(), 2024);
        assert_eq!(year.search_range(), "2024-01-01..2024-12-31");
        assert_eq!(year.next(), 2025);
        assert_eq!(year.to_string(), "2024");
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(Year::parse(" 1999\n").unwrap().value(), 1999);
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "24", "20245", "20a4", "-202", "２０２４"] {
            assert!(
                matches!(Year::parse(bad), Err(Error::InvalidYear(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn leading_zero_years_keep_their_width() {
        let year = Year::parse("0999").unwrap();
        assert_eq!(year.to_string(), "0999");
        assert_eq!(year.search_range(), "0999-01-01..0999-12-31");
    }

    #[test]
    fn current_year_spans_the_whole_calendar() {
        let year = Year::current();
        let range = year.search_range();
        assert!(range.ends_with(&format!("{year}-12-31")));
        assert!(range.starts_with(&format!("{year}-01-01")));
    }
}
