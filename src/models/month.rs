//! Calendar month key used to bucket expenses
//!
//! Ordered by (year, month) so that sorting keys sorts them chronologically.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar month, e.g. "2024-03"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, returning `None` if `month` is not in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date` (the day component is dropped)
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        // year/month are validated on construction, day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    /// Parse a month string in `YYYY-MM` format
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let invalid = || MonthParseError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or(MonthParseError::InvalidMonth(month))
    }
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthParseError {
    #[error("Invalid month format: {0}. Use YYYY-MM")]
    InvalidFormat(String),

    #[error("Invalid month number: {0}")]
    InvalidMonth(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_of_drops_day() {
        let key = MonthKey::of(date(2024, 3, 31));
        assert_eq!(key, MonthKey::new(2024, 3).unwrap());
        assert_eq!(key.start_date(), date(2024, 3, 1));
        assert!(key.contains(date(2024, 3, 1)));
        assert!(!key.contains(date(2024, 4, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthKey::new(2024, 3).unwrap().to_string(), "2024-03");
        assert_eq!(MonthKey::new(987, 11).unwrap().to_string(), "0987-11");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys = vec![
            MonthKey::new(2024, 10).unwrap(),
            MonthKey::new(2023, 12).unwrap(),
            MonthKey::new(2024, 2).unwrap(),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(rendered, vec!["2023-12", "2024-02", "2024-10"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(MonthKey::parse("2025-01").unwrap(), MonthKey::new(2025, 1).unwrap());
        assert_eq!(MonthKey::parse("2025-13"), Err(MonthParseError::InvalidMonth(13)));
        assert!(MonthKey::parse("2025-1").is_err());
        assert!(MonthKey::parse("January").is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(MonthKey::new(2024, 0).is_none());
        assert!(MonthKey::new(2024, 13).is_none());
    }

    #[test]
    fn test_every_constructor_keeps_month_in_range() {
        for month in 0..=14 {
            let built = [
                MonthKey::new(2024, month),
                MonthKey::parse(&format!("2024-{:02}", month)).ok(),
            ];
            for key in built.into_iter().flatten() {
                assert!((1..=12).contains(&key.month()), "{key}");
            }
        }
    }
}
