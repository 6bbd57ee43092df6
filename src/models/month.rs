//! Calendar month and period windowing
//!
//! The reporting cursor is either a calendar month ("YYYY-MM") or a calendar
//! year, independent of "today". Months support calendar arithmetic with
//! year rollover; years are plain integers. A `Period` narrows ledger
//! queries to one of the two.

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month, e.g. 2024-06
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month; `month` must be 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The calendar year this month belongs to
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The current calendar month (local time)
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Advance by a signed number of months, rolling the year over as needed
    ///
    /// # Examples
    /// ```
    /// use finanzas_cli::models::Month;
    /// let jan: Month = "2024-01".parse().unwrap();
    /// assert_eq!(jan.advance(-1).to_string(), "2023-12");
    /// assert_eq!(jan.advance(12).to_string(), "2025-01");
    /// ```
    pub fn advance(&self, delta_months: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + delta_months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// This month and the 11 preceding it, in chronological order
    pub fn last_12(&self) -> Vec<Month> {
        (0..12).rev().map(|i| self.advance(-i)).collect()
    }

    /// Whether this month falls in the given calendar year
    pub fn in_year(&self, year: i32) -> bool {
        self.year == year
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

// Wire format: the original "YYYY-MM" strings.

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A reporting window: a single month or a whole year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Month(Month),
    Year(i32),
}

impl Period {
    /// Whether a transaction month falls inside this window
    ///
    /// Month windows match exactly; year windows match every month of the
    /// year (the original's string-prefix test on "YYYY-").
    pub fn contains(&self, month: Month) -> bool {
        match self {
            Period::Month(m) => *m == month,
            Period::Year(y) => month.in_year(*y),
        }
    }

    /// Step the window: months for a month window, years for a year window
    pub fn advance(&self, delta: i32) -> Self {
        match self {
            Period::Month(m) => Period::Month(m.advance(delta)),
            Period::Year(y) => Period::Year(y + delta),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Month(m) => write!(f, "{}", m),
            Period::Year(y) => write!(f, "{:04}", y),
        }
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month '{}', expected YYYY-MM", s)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month number: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(s: &str) -> Month {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let m = month("2024-06");
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 6);
        assert_eq!(m.to_string(), "2024-06");

        assert!("2024".parse::<Month>().is_err());
        assert!("2024-13".parse::<Month>().is_err());
        assert!("abcd-ef".parse::<Month>().is_err());
    }

    #[test]
    fn test_advance_rollover() {
        assert_eq!(month("2024-01").advance(-1), month("2023-12"));
        assert_eq!(month("2023-12").advance(1), month("2024-01"));
        assert_eq!(month("2024-06").advance(-18), month("2022-12"));
        assert_eq!(month("2024-06").advance(0), month("2024-06"));
    }

    #[test]
    fn test_last_12() {
        let months = month("2024-06").last_12();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], month("2023-07"));
        assert_eq!(months[11], month("2024-06"));
        // Chronological order
        for w in months.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn test_period_contains() {
        let june = month("2024-06");
        assert!(Period::Month(june).contains(june));
        assert!(!Period::Month(june).contains(month("2024-05")));
        assert!(Period::Year(2024).contains(june));
        assert!(!Period::Year(2023).contains(june));
    }

    #[test]
    fn test_period_advance() {
        assert_eq!(Period::Year(2024).advance(-1), Period::Year(2023));
        assert_eq!(Period::Year(2024).advance(3), Period::Year(2027));
        assert_eq!(
            Period::Month(month("2024-01")).advance(-1),
            Period::Month(month("2023-12"))
        );
    }

    #[test]
    fn test_ordering() {
        assert!(month("2023-12") < month("2024-01"));
        assert!(month("2024-01") < month("2024-02"));
    }

    #[test]
    fn test_serialization() {
        let m = month("2024-06");
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"2024-06\"");
        let back: Month = serde_json::from_str("\"2024-06\"").unwrap();
        assert_eq!(back, m);
    }
}
