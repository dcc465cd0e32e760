//! Month grid arithmetic.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

const DAYS_PER_WEEK: u64 = 7;

/// First column of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Column headers in grid order.
    pub fn header_labels(self) -> [&'static str; 7] {
        match self {
            Self::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            Self::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    /// Column index (0..7) of `weekday` in a grid starting at `self`.
    fn column_of(self, weekday: Weekday) -> u64 {
        let offset = 7 + weekday.num_days_from_monday() - self.weekday().num_days_from_monday();
        u64::from(offset) % DAYS_PER_WEEK
    }
}

/// The month currently shown by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisibleMonth {
    first: NaiveDate,
}

impl VisibleMonth {
    /// Returns `None` for an invalid month number or out-of-range year.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Month containing `date` (used by the "Today" button).
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month(self) -> u32 {
        self.first.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    pub fn last_day(self) -> NaiveDate {
        let mut day = self.first;
        while let Some(next) = day.succ_opt() {
            if next.month() != self.first.month() {
                break;
            }
            day = next;
        }
        day
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Saturates at the last representable month.
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(self)
    }

    /// Saturates at the first representable month.
    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(self)
    }
}

/// Every day from the week-start on/before the 1st through the week-end
/// on/after the last day of `month`.
pub fn month_grid(month: VisibleMonth, week_start: WeekStart) -> Vec<NaiveDate> {
    let first = month.first_day();
    let last = month.last_day();

    let lead = week_start.column_of(first.weekday());
    let trail = DAYS_PER_WEEK - 1 - week_start.column_of(last.weekday());
    let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);
    let end = last.checked_add_days(Days::new(trail)).unwrap_or(last);

    let mut days = Vec::with_capacity(42);
    let mut cursor = Some(start);
    while let Some(day) = cursor {
        if day > end {
            break;
        }
        days.push(day);
        cursor = day.succ_opt();
    }
    days
}
