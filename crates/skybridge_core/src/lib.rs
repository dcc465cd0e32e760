//! Core domain logic for the SkyBridge content planner.
//! This crate is the single source of truth for dashboard state and invariants.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod feed;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use calendar::grid::{month_grid, VisibleMonth, WeekStart};
pub use calendar::projection::{
    group_posts_by_day, project_month, CalendarDay, CalendarMonth, CalendarQuery,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{normalize_limit, DashboardConfig, MAX_LIST_LIMIT};
pub use feed::files::{files_by_day, format_bytes, DatedFile, FileGroup};
pub use feed::highlights::{
    find_author, recent_activity, unread_notification_count, upcoming_special_days,
    UpcomingSpecialDay,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::activity::{ActivityKind, ActivityLog};
pub use model::message::Message;
pub use model::notification::{Notification, NotificationKind};
pub use model::post::{
    Client, ClientFilter, FileUpload, Platform, Post, PostDraft, PostFile, PostValidationError,
};
pub use model::special_day::{MonthDay, SpecialDay, SpecialDayKind};
pub use model::toast::{Toast, ToastLevel};
pub use model::user::{NewUser, User, UserRole, UserStatus, UserValidationError};
pub use service::dashboard::{Dashboard, DashboardError, DashboardResult};
pub use service::session::{App, AuthError};
pub use service::toast_queue::ToastQueue;
pub use store::entity_store::{EntityStore, StoreSeed};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
