//! Post bucketing and month projection.

use crate::calendar::grid::{month_grid, VisibleMonth, WeekStart};
use crate::model::post::{ClientFilter, Post};
use crate::model::special_day::SpecialDay;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Inputs that select one calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarQuery {
    pub month: VisibleMonth,
    pub filter: ClientFilter,
    pub week_start: WeekStart,
    /// Highlighted as the current day.
    pub today: NaiveDate,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    /// `false` for leading/trailing days from adjacent months.
    pub in_month: bool,
    pub is_today: bool,
    /// Insertion order of the store.
    pub posts: Vec<&'a Post>,
    pub special_day: Option<&'a SpecialDay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth<'a> {
    pub month: VisibleMonth,
    pub filter: ClientFilter,
    pub days: Vec<CalendarDay<'a>>,
}

impl<'a> CalendarMonth<'a> {
    /// Grid rows of seven days.
    pub fn weeks(&self) -> std::slice::Chunks<'_, CalendarDay<'a>> {
        self.days.chunks(7)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay<'a>> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Posts visible in the grid, including adjacent-month days.
    pub fn post_count(&self) -> usize {
        self.days.iter().map(|day| day.posts.len()).sum()
    }
}

/// Groups posts matching `filter` by local calendar day. Posts inside a day
/// keep slice order.
pub fn group_posts_by_day(
    posts: &[Post],
    filter: ClientFilter,
) -> BTreeMap<NaiveDate, Vec<&Post>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Post>> = BTreeMap::new();
    for post in posts.iter().filter(|post| filter.matches(post.client)) {
        grouped.entry(post.day()).or_default().push(post);
    }
    grouped
}

/// Resolves special days in `year` and indexes them by date. A later entry
/// for the same day wins; days that do not exist in `year` are skipped.
pub fn index_special_days(
    special_days: &[SpecialDay],
    year: i32,
) -> HashMap<NaiveDate, &SpecialDay> {
    special_days
        .iter()
        .filter_map(|day| day.date.in_year(year).map(|date| (date, day)))
        .collect()
}

/// Builds the grid for `query.month` with posts and special-day markers.
/// Markers are resolved in the displayed year, so adjacent-year days in the
/// grid carry none.
pub fn project_month<'a>(
    posts: &'a [Post],
    special_days: &'a [SpecialDay],
    query: &CalendarQuery,
) -> CalendarMonth<'a> {
    let mut posts_by_day = group_posts_by_day(posts, query.filter);
    let special_by_day = index_special_days(special_days, query.month.year());

    let days = month_grid(query.month, query.week_start)
        .into_iter()
        .map(|date| CalendarDay {
            date,
            in_month: query.month.contains(date),
            is_today: date == query.today,
            posts: posts_by_day.remove(&date).unwrap_or_default(),
            special_day: special_by_day.get(&date).copied(),
        })
        .collect();

    CalendarMonth {
        month: query.month,
        filter: query.filter,
        days,
    }
}
