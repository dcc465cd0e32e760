//! Entity store: the single source of truth for one session.
//!
//! # Responsibility
//! - Own users, posts, messages, activity logs, notifications and special days.
//! - Expose read-only snapshots for projections.
//!
//! # Invariants
//! - Ids are unique within each collection.
//! - `activity_logs` is newest-first; `messages` and `posts` keep insertion order.
//! - Notification read flags only move to `true`.

use crate::model::activity::ActivityLog;
use crate::model::message::Message;
use crate::model::notification::Notification;
use crate::model::post::Post;
use crate::model::special_day::SpecialDay;
use crate::model::user::User;
use crate::store::ids::IdGenerator;
use chrono::{DateTime, Utc};

/// Initial collections for a store.
#[derive(Debug, Clone, Default)]
pub struct StoreSeed {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub messages: Vec<Message>,
    /// Newest-first.
    pub activity_logs: Vec<ActivityLog>,
    pub notifications: Vec<Notification>,
    pub special_days: Vec<SpecialDay>,
}

#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    users: Vec<User>,
    posts: Vec<Post>,
    messages: Vec<Message>,
    activity_logs: Vec<ActivityLog>,
    notifications: Vec<Notification>,
    special_days: Vec<SpecialDay>,
    ids: IdGenerator,
}

impl EntityStore {
    pub fn from_seed(seed: StoreSeed) -> Self {
        Self {
            users: seed.users,
            posts: seed.posts,
            messages: seed.messages,
            activity_logs: seed.activity_logs,
            notifications: seed.notifications,
            special_days: seed.special_days,
            ids: IdGenerator::default(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Newest-first audit trail.
    pub fn activity_logs(&self) -> &[ActivityLog] {
        &self.activity_logs
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn special_days(&self) -> &[SpecialDay] {
        &self.special_days
    }

    pub fn find_user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == user_id)
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.has_email(email))
    }

    pub(crate) fn next_id(&mut self, prefix: &str, now: DateTime<Utc>) -> String {
        self.ids.next(prefix, now)
    }

    pub(crate) fn push_user(&mut self, user: User) {
        debug_assert!(self.find_user(&user.id).is_none(), "duplicate user id");
        self.users.push(user);
    }

    /// Replaces the record with the same id. Returns the previous record.
    pub(crate) fn replace_user(&mut self, user: User) -> Option<User> {
        let slot = self.users.iter_mut().find(|existing| existing.id == user.id)?;
        Some(std::mem::replace(slot, user))
    }

    pub(crate) fn remove_user(&mut self, user_id: &str) -> Option<User> {
        let index = self.users.iter().position(|user| user.id == user_id)?;
        Some(self.users.remove(index))
    }

    pub(crate) fn push_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub(crate) fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn prepend_activity(&mut self, log: ActivityLog) {
        self.activity_logs.insert(0, log);
    }

    /// Marks every notification read. Returns how many flags changed.
    pub(crate) fn mark_all_notifications_read(&mut self) -> usize {
        self.notifications
            .iter_mut()
            .map(Notification::mark_read)
            .filter(|changed| *changed)
            .count()
    }
}
