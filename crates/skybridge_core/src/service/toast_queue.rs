//! Toast queue with time-based expiry.
//!
//! # Invariants
//! - A toast is active while `now < created_at + ttl`.
//! - Expired toasts are dropped on every push, so storage stays bounded by
//!   the toasts live within one TTL window.
//! - Expiry never touches entity state.

use crate::config::DEFAULT_TOAST_TTL_SECS;
use crate::model::toast::{Toast, ToastLevel};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ToastQueue {
    ttl: Duration,
    toasts: Vec<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_TOAST_TTL_SECS))
    }
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            toasts: Vec::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Drops expired toasts, enqueues a new one and returns its id.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        level: ToastLevel,
        now: DateTime<Utc>,
    ) -> Uuid {
        self.prune(now);
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            message: message.into(),
            level,
            created_at: now,
        });
        id
    }

    /// Unexpired toasts, oldest first.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<&Toast> {
        self.toasts
            .iter()
            .filter(|toast| is_live(toast, self.ttl, now))
            .collect()
    }

    /// Drops expired toasts. Returns how many were removed.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.toasts.len();
        let ttl = self.ttl;
        self.toasts.retain(|toast| is_live(toast, ttl, now));
        before - self.toasts.len()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// A TTL that overflows the calendar never expires.
fn is_live(toast: &Toast, ttl: Duration, now: DateTime<Utc>) -> bool {
    toast
        .created_at
        .checked_add_signed(ttl)
        .map_or(true, |expires_at| now < expires_at)
}

#[cfg(test)]
mod tests {
    use super::ToastQueue;
    use crate::model::toast::ToastLevel;
    use chrono::{DateTime, Duration, Utc};

    #[test]
    fn toasts_expire_after_ttl() {
        let start: DateTime<Utc> = "2025-06-15T10:00:00Z".parse().unwrap();
        let mut queue = ToastQueue::new(Duration::seconds(5));

        queue.push("first", ToastLevel::Success, start);
        queue.push("second", ToastLevel::Info, start + Duration::seconds(3));

        assert_eq!(queue.active(start + Duration::seconds(4)).len(), 2);
        let later = queue.active(start + Duration::seconds(5));
        assert_eq!(later.len(), 1);
        assert_eq!(later[0].message, "second");

        assert_eq!(queue.prune(start + Duration::seconds(5)), 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.prune(start + Duration::seconds(9)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn push_drops_expired_toasts_so_storage_stays_bounded() {
        let start: DateTime<Utc> = "2025-06-15T10:00:00Z".parse().unwrap();
        let mut queue = ToastQueue::new(Duration::seconds(5));

        for step in 0..1_000 {
            let now = start + Duration::seconds(10 * step);
            queue.push("All notifications marked as read.", ToastLevel::Info, now);
            assert_eq!(queue.len(), 1);
        }
        assert!(queue.active(start + Duration::seconds(10_000)).is_empty());
    }

    #[test]
    fn overflowing_ttl_keeps_toasts_live_without_panicking() {
        let start: DateTime<Utc> = "2025-06-15T10:00:00Z".parse().unwrap();
        let mut queue = ToastQueue::new(Duration::days(365 * 1_000_000));

        queue.push("sticky", ToastLevel::Warning, start);
        queue.push("still sticky", ToastLevel::Warning, start + Duration::days(365));

        assert_eq!(queue.active(start + Duration::days(730)).len(), 2);
        assert_eq!(queue.prune(start + Duration::days(730)), 0);
    }
}
