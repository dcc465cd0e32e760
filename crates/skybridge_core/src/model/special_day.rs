//! Recurring calendar annotations (holidays, national days, birthdays).
//!
//! # Responsibility
//! - Represent year-agnostic month/day markers with a content suggestion.
//!
//! # Invariants
//! - `MonthDay` is a valid day in a leap year; Feb 29 resolves to `None` in
//!   other years.
//! - Dates never shift between years, so lunar holidays are approximate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const LEAP_REFERENCE_YEAR: i32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialDayKind {
    /// International observance.
    Holiday,
    /// UAE national or religious day.
    Uae,
    /// Team or client birthday.
    Birthday,
}

/// Month and day without a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Returns `None` when the pair is not a calendar day in a leap year.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, month, day).map(|_| Self { month, day })
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Resolves this month/day in `year`.
    pub fn in_year(self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

/// Read-only reference entry shown on the calendar and in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDay {
    pub date: MonthDay,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SpecialDayKind,
    pub suggestion: String,
}

#[cfg(test)]
mod tests {
    use super::MonthDay;
    use chrono::NaiveDate;

    #[test]
    fn new_rejects_impossible_days() {
        assert!(MonthDay::new(2, 30).is_none());
        assert!(MonthDay::new(13, 1).is_none());
        assert!(MonthDay::new(2, 29).is_some());
    }

    #[test]
    fn leap_day_only_resolves_in_leap_years() {
        let leap_day = MonthDay::new(2, 29).unwrap();
        assert_eq!(leap_day.in_year(2025), None);
        assert_eq!(leap_day.in_year(2028), NaiveDate::from_ymd_opt(2028, 2, 29));
    }
}
