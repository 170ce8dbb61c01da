//! Pay period model.
//!
//! A pay period is a calendar half-month window derived from a reference
//! date; it is never stored as its own entity.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The half of the month a date or loan schedule falls into.
///
/// The wire names match the source system's stored schedule strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthHalf {
    /// Days 1 through 15.
    #[serde(rename = "1st half")]
    First,
    /// Day 16 through the end of the month.
    #[serde(rename = "2nd half")]
    Second,
}

impl MonthHalf {
    /// Classifies a date: day-of-month 15 or earlier is the first half.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::MonthHalf;
    /// use chrono::NaiveDate;
    ///
    /// assert_eq!(MonthHalf::of(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()), MonthHalf::First);
    /// assert_eq!(MonthHalf::of(NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()), MonthHalf::Second);
    /// ```
    pub fn of(date: NaiveDate) -> Self {
        if date.day() <= 15 {
            MonthHalf::First
        } else {
            MonthHalf::Second
        }
    }
}

/// A half-month pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Derives the half-month period containing a reference date.
    ///
    /// The first half runs from the 1st through the 15th; the second half
    /// from the 16th through the last day of the month.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::half_month_containing(NaiveDate::from_ymd_opt(2025, 2, 20).unwrap());
    /// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 2, 16).unwrap());
    /// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    /// ```
    pub fn half_month_containing(date: NaiveDate) -> Self {
        let (year, month) = (date.year(), date.month());
        match MonthHalf::of(date) {
            MonthHalf::First => Self {
                start_date: NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month"),
                end_date: NaiveDate::from_ymd_opt(year, month, 15).expect("valid mid month"),
            },
            MonthHalf::Second => Self {
                start_date: NaiveDate::from_ymd_opt(year, month, 16).expect("valid mid month"),
                end_date: Self::last_day_of_month(year, month),
            },
        }
    }

    fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
        let first_of_next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        first_of_next.expect("valid first of month") - chrono::Days::new(1)
    }

    /// The date that stands in for the whole period when matching schedules.
    pub fn representative_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The month half this period pays out.
    pub fn half(&self) -> MonthHalf {
        MonthHalf::of(self.representative_date())
    }

    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// PP-001: the 15th belongs to the first half
    #[test]
    fn test_fifteenth_is_first_half() {
        assert_eq!(MonthHalf::of(date("2025-03-15")), MonthHalf::First);
    }

    /// PP-002: the 16th belongs to the second half
    #[test]
    fn test_sixteenth_is_second_half() {
        assert_eq!(MonthHalf::of(date("2025-03-16")), MonthHalf::Second);
    }

    /// PP-003: first-half derivation
    #[test]
    fn test_first_half_derivation() {
        let period = PayPeriod::half_month_containing(date("2025-03-10"));
        assert_eq!(period.start_date, date("2025-03-01"));
        assert_eq!(period.end_date, date("2025-03-15"));
        assert_eq!(period.half(), MonthHalf::First);
    }

    /// PP-004: second-half derivation runs to the end of the month
    #[test]
    fn test_second_half_derivation() {
        let period = PayPeriod::half_month_containing(date("2025-03-20"));
        assert_eq!(period.start_date, date("2025-03-16"));
        assert_eq!(period.end_date, date("2025-03-31"));
        assert_eq!(period.half(), MonthHalf::Second);
    }

    /// PP-005: February and leap years
    #[test]
    fn test_february_second_half() {
        let period = PayPeriod::half_month_containing(date("2025-02-20"));
        assert_eq!(period.end_date, date("2025-02-28"));

        let leap = PayPeriod::half_month_containing(date("2024-02-20"));
        assert_eq!(leap.end_date, date("2024-02-29"));
    }

    /// PP-006: December second half crosses no year boundary
    #[test]
    fn test_december_second_half() {
        let period = PayPeriod::half_month_containing(date("2025-12-25"));
        assert_eq!(period.start_date, date("2025-12-16"));
        assert_eq!(period.end_date, date("2025-12-31"));
    }

    #[test]
    fn test_contains_date_is_inclusive() {
        let period = PayPeriod::half_month_containing(date("2025-03-10"));
        assert!(period.contains_date(date("2025-03-01")));
        assert!(period.contains_date(date("2025-03-15")));
        assert!(!period.contains_date(date("2025-03-16")));
        assert!(!period.contains_date(date("2025-02-28")));
    }

    #[test]
    fn test_month_half_wire_names() {
        assert_eq!(
            serde_json::to_string(&MonthHalf::First).unwrap(),
            "\"1st half\""
        );
        assert_eq!(
            serde_json::to_string(&MonthHalf::Second).unwrap(),
            "\"2nd half\""
        );
        let parsed: MonthHalf = serde_json::from_str("\"2nd half\"").unwrap();
        assert_eq!(parsed, MonthHalf::Second);
    }
}
