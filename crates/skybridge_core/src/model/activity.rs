//! Activity log (audit trail) model.
//!
//! # Invariants
//! - Logs are append-only and stored newest-first.
//! - `user_id` referenced an existing user when the entry was written.

use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ActivityLogId = String;

/// Closed set of auditable actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    PostCreated,
    FileUploaded,
    ProfileUpdated,
    UserUpdated,
    UserAdded,
    UserDeleted,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PostCreated => "post_created",
            Self::FileUploaded => "file_uploaded",
            Self::ProfileUpdated => "profile_updated",
            Self::UserUpdated => "user_updated",
            Self::UserAdded => "user_added",
            Self::UserDeleted => "user_deleted",
        }
    }
}

/// One audit trail entry. `description` is rendered after the actor name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: ActivityLogId,
    pub user_id: UserId,
    #[serde(rename = "action_type")]
    pub action: ActivityKind,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
