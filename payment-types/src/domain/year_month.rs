//! Calendar year-month value type.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset};

use crate::error::DomainError;

/// A calendar year and month, used to scope month-window queries.
///
/// Month is always in `1..=12`. A payment falls in a `YearMonth` when its
/// date reads as that year and month in the payment's own recorded offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a new year-month.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the calendar month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns true when the date falls in this year and month, read in the
    /// date's own offset.
    pub fn contains(&self, date: &DateTime<FixedOffset>) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Derives year and month from a single instant.
impl From<DateTime<FixedOffset>> for YearMonth {
    fn from(date: DateTime<FixedOffset>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = DomainError;

    /// Parses the `YYYY-MM` form, e.g. `2023-06`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| DomainError::ValidationError(format!("Expected YYYY-MM, got {s:?}")))?;
        let year = year
            .parse()
            .map_err(|_| DomainError::ValidationError(format!("Invalid year in {s:?}")))?;
        let month = month
            .parse()
            .map_err(|_| DomainError::ValidationError(format!("Invalid month in {s:?}")))?;
        Self::new(year, month)
    }
}
