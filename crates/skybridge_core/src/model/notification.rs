//! Notification model.
//!
//! # Invariants
//! - `is_read` only moves from `false` to `true`.

use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type NotificationId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PostCreated,
    FileUploaded,
    ProfileUpdated,
}

/// Bell-menu notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Marks as read. Returns whether the flag changed.
    pub fn mark_read(&mut self) -> bool {
        let changed = !self.is_read;
        self.is_read = true;
        changed
    }
}
