//! Timestamp-derived id generation.
//!
//! # Invariants
//! - Issued millis strictly increase, so ids never repeat within one
//!   generator even when the clock does not advance between calls.

use chrono::{DateTime, Utc};

pub const USER_ID_PREFIX: &str = "u";
pub const POST_ID_PREFIX: &str = "p";
pub const MESSAGE_ID_PREFIX: &str = "m";
pub const ACTIVITY_ID_PREFIX: &str = "a";
pub const FILE_ID_PREFIX: &str = "f";

/// Issues `<prefix><epoch millis>` ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_millis: i64,
}

impl IdGenerator {
    /// Returns the next id for `prefix`, bumping past the last issued millis
    /// when `now` has not moved forward.
    pub fn next(&mut self, prefix: &str, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis().max(self.last_millis + 1);
        self.last_millis = millis;
        format!("{prefix}{millis}")
    }
}

/// Attachment id scoped to its parent post.
pub fn file_id(post_id: &str, index: usize) -> String {
    format!("{FILE_ID_PREFIX}{post_id}-{index}")
}

#[cfg(test)]
mod tests {
    use super::{file_id, IdGenerator, POST_ID_PREFIX, USER_ID_PREFIX};
    use chrono::{DateTime, Utc};

    #[test]
    fn ids_stay_unique_when_clock_stalls() {
        let now: DateTime<Utc> = "2025-06-15T10:00:00Z".parse().unwrap();
        let mut ids = IdGenerator::default();

        let first = ids.next(USER_ID_PREFIX, now);
        let second = ids.next(USER_ID_PREFIX, now);
        let third = ids.next(POST_ID_PREFIX, now);

        assert_eq!(first, format!("u{}", now.timestamp_millis()));
        assert_eq!(second, format!("u{}", now.timestamp_millis() + 1));
        assert_eq!(third, format!("p{}", now.timestamp_millis() + 2));
    }

    #[test]
    fn file_ids_embed_post_id_and_index() {
        assert_eq!(file_id("p42", 3), "fp42-3");
    }
}
