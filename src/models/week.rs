//! Fiscal week representation
//!
//! The fiscal calendar has exactly 52 Saturday-to-Friday weeks per year. A
//! week is identified by its number and the fiscal year whose Week 1 it is
//! counted from, which is not always the calendar year of its dates.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{HseError, HseResult};

/// Number of weeks in every fiscal year
pub const WEEKS_PER_YEAR: u32 = 52;

/// Weekday every fiscal week starts on
pub const WEEK_START_DAY: Weekday = Weekday::Sat;

/// An inclusive Saturday..=Friday date range covering one fiscal week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl WeekRange {
    /// Create a week range starting on the given Saturday
    ///
    /// Fails when `start` isn't a Saturday or the Friday after it falls
    /// outside chrono's date range.
    pub fn new(start: NaiveDate) -> HseResult<Self> {
        if start.weekday() != WEEK_START_DAY {
            return Err(HseError::InvalidArgument(format!(
                "fiscal weeks start on Saturday, {} is a {}",
                start,
                start.weekday()
            )));
        }
        let end = start
            .checked_add_days(Days::new(6))
            .ok_or_else(|| HseError::year_out_of_range(start.year()))?;
        Ok(Self { start, end })
    }

    /// First day of the week (always a Saturday)
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the week (always a Friday)
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within this week
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterate over the seven days of the week
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(7)
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// A fiscal (week, year) pair with the week number in 1..=52
///
/// Serialized in its canonical text form, e.g. `"2026-W03"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekIdentifier {
    year: i32,
    week: u32,
}

impl WeekIdentifier {
    /// Create a week identifier
    ///
    /// Rejects week numbers outside 1..=52 and years chrono cannot represent.
    pub fn new(week: u32, year: i32) -> HseResult<Self> {
        if !(1..=WEEKS_PER_YEAR).contains(&week) {
            return Err(HseError::invalid_week(week));
        }
        if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
            return Err(HseError::year_out_of_range(year));
        }
        Ok(Self { year, week })
    }

    /// Build an identifier whose week number is already known to be in range
    pub(crate) fn new_unchecked(week: u32, year: i32) -> Self {
        debug_assert!((1..=WEEKS_PER_YEAR).contains(&week));
        Self { year, week }
    }

    /// Week number (1..=52)
    pub fn week(&self) -> u32 {
        self.week
    }

    /// Fiscal year the week is counted in
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The following week, rolling over into Week 1 of the next fiscal year
    pub fn next(&self) -> Self {
        if self.week >= WEEKS_PER_YEAR {
            Self {
                year: self.year + 1,
                week: 1,
            }
        } else {
            Self {
                year: self.year,
                week: self.week + 1,
            }
        }
    }

    /// The preceding week, rolling back into Week 52 of the previous fiscal year
    pub fn prev(&self) -> Self {
        if self.week <= 1 {
            Self {
                year: self.year - 1,
                week: WEEKS_PER_YEAR,
            }
        } else {
            Self {
                year: self.year,
                week: self.week - 1,
            }
        }
    }

    /// Parse the canonical `YYYY-Www` form (e.g. "2026-W03")
    pub fn parse(s: &str) -> HseResult<Self> {
        let s = s.trim();
        let (year, week) = s
            .rsplit_once("-W")
            .or_else(|| s.rsplit_once("-w"))
            .ok_or_else(|| HseError::Validation(format!("Invalid week format: {}", s)))?;

        let year: i32 = year
            .parse()
            .map_err(|_| HseError::Validation(format!("Invalid week format: {}", s)))?;
        let week: u32 = week
            .parse()
            .map_err(|_| HseError::Validation(format!("Invalid week format: {}", s)))?;

        Self::new(week, year)
    }
}

impl fmt::Display for WeekIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekIdentifier {
    type Err = HseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WeekIdentifier {
    type Error = HseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WeekIdentifier> for String {
    fn from(id: WeekIdentifier) -> Self {
        id.to_string()
    }
}

/// One fiscal week with its dates and a display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekInfo {
    /// Week number and fiscal year
    pub id: WeekIdentifier,
    /// Saturday..=Friday date range
    pub range: WeekRange,
    /// Human-readable label
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_range_requires_saturday() {
        let range = WeekRange::new(date(2026, 1, 3)).unwrap();
        assert_eq!(range.end(), date(2026, 1, 9));
        assert_eq!(range.end().weekday(), Weekday::Fri);

        let err = WeekRange::new(date(2026, 1, 4)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_week_range_contains_and_days() {
        let range = WeekRange::new(date(2026, 1, 3)).unwrap();
        assert!(range.contains(date(2026, 1, 3)));
        assert!(range.contains(date(2026, 1, 9)));
        assert!(!range.contains(date(2026, 1, 10)));

        let days: Vec<_> = range.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[6], range.end());
    }

    #[test]
    fn test_identifier_bounds() {
        assert!(WeekIdentifier::new(1, 2026).is_ok());
        assert!(WeekIdentifier::new(52, 2026).is_ok());
        assert!(WeekIdentifier::new(0, 2026).unwrap_err().is_invalid_argument());
        assert!(WeekIdentifier::new(53, 2026).unwrap_err().is_invalid_argument());
        assert!(WeekIdentifier::new(1, 1_000_000)
            .unwrap_err()
            .is_invalid_argument());
        assert!(WeekIdentifier::new(1, i32::MIN).is_err());
    }

    #[test]
    fn test_week_range_at_end_of_date_range() {
        // Saturday -> 0, Sunday -> 1, ..., Friday -> 6
        let back = (NaiveDate::MAX.weekday().num_days_from_sunday() + 1) % 7;
        let last_saturday = NaiveDate::MAX
            .checked_sub_days(Days::new(u64::from(back)))
            .unwrap();
        let result = WeekRange::new(last_saturday);
        if NaiveDate::MAX.weekday() == Weekday::Fri {
            assert_eq!(result.unwrap().end(), NaiveDate::MAX);
        } else {
            assert!(result.unwrap_err().is_invalid_argument());
        }
    }

    #[test]
    fn test_identifier_navigation() {
        let last = WeekIdentifier::new(52, 2025).unwrap();
        assert_eq!(last.next(), WeekIdentifier::new(1, 2026).unwrap());
        assert_eq!(last.next().prev(), last);

        let mid = WeekIdentifier::new(10, 2026).unwrap();
        assert_eq!(mid.next().week(), 11);
        assert_eq!(mid.prev().week(), 9);
    }

    #[test]
    fn test_identifier_ordering() {
        let a = WeekIdentifier::new(52, 2025).unwrap();
        let b = WeekIdentifier::new(1, 2026).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_parse_and_display() {
        let id = WeekIdentifier::parse("2026-W03").unwrap();
        assert_eq!(id.week(), 3);
        assert_eq!(id.year(), 2026);
        assert_eq!(id.to_string(), "2026-W03");

        assert!(WeekIdentifier::parse("2026-W53").unwrap_err().is_invalid_argument());
        assert!(WeekIdentifier::parse("2026-03").is_err());
    }

    #[test]
    fn test_serialization() {
        let id = WeekIdentifier::new(7, 2026).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"2026-W07\"");
        let back: WeekIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<WeekIdentifier>("\"2026-W60\"").is_err());
    }
}
