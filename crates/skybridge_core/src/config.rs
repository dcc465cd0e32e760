//! Dashboard configuration.
//!
//! # Responsibility
//! - Hold tunables for toasts, sidebar lists and the calendar grid.
//! - Normalize caller-provided list limits.

use crate::calendar::grid::WeekStart;
use chrono::Duration;

/// Toasts disappear this long after they are pushed.
pub const DEFAULT_TOAST_TTL_SECS: i64 = 5;
/// Upcoming special days shown in the sidebar.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;
/// Activity entries shown in the sidebar.
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 5;
pub const MAX_LIST_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub toast_ttl: Duration,
    pub upcoming_limit: usize,
    pub recent_activity_limit: usize,
    pub week_start: WeekStart,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            toast_ttl: Duration::seconds(DEFAULT_TOAST_TTL_SECS),
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            recent_activity_limit: DEFAULT_RECENT_ACTIVITY_LIMIT,
            week_start: WeekStart::Sunday,
        }
    }
}

/// Maps `None`/`0` to `default` and caps at [`MAX_LIST_LIMIT`].
pub fn normalize_limit(limit: Option<usize>, default: usize) -> usize {
    match limit {
        Some(0) | None => default,
        Some(value) if value > MAX_LIST_LIMIT => MAX_LIST_LIMIT,
        Some(value) => value,
    }
}
