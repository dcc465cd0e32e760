//! Team chat message.

use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type MessageId = String;

/// Chat message. Messages are append-only and kept in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
