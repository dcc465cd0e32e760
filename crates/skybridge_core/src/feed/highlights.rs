//! Upcoming special days, recent activity and notification counters.

use crate::model::activity::ActivityLog;
use crate::model::notification::Notification;
use crate::model::special_day::SpecialDay;
use crate::model::user::User;
use chrono::{Datelike, NaiveDate};

/// A special day resolved to a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingSpecialDay<'a> {
    pub date: NaiveDate,
    pub special_day: &'a SpecialDay,
}

/// Special days on or after `today`, resolved in `today`'s year, ascending,
/// at most `limit`. Days already passed this year do not roll over.
pub fn upcoming_special_days(
    special_days: &[SpecialDay],
    today: NaiveDate,
    limit: usize,
) -> Vec<UpcomingSpecialDay<'_>> {
    let mut upcoming: Vec<UpcomingSpecialDay<'_>> = special_days
        .iter()
        .filter_map(|special_day| {
            special_day
                .date
                .in_year(today.year())
                .map(|date| UpcomingSpecialDay { date, special_day })
        })
        .filter(|entry| entry.date >= today)
        .collect();
    upcoming.sort_by_key(|entry| entry.date);
    upcoming.truncate(limit);
    upcoming
}

/// First `limit` entries of a newest-first activity log.
pub fn recent_activity(activity_logs: &[ActivityLog], limit: usize) -> &[ActivityLog] {
    &activity_logs[..limit.min(activity_logs.len())]
}

pub fn unread_notification_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// Resolves the author of a message or log entry. Returns `None` for users
/// deleted after the record was written.
pub fn find_author<'a>(users: &'a [User], user_id: &str) -> Option<&'a User> {
    users.iter().find(|user| user.id == user_id)
}
