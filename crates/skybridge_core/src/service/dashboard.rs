//! Dashboard use-case service.
//!
//! # Responsibility
//! - Apply schedule-post, chat, notification and team-management actions.
//! - Derive activity log entries and toasts for every user-visible action.
//! - Expose calendar and sidebar projections over the current snapshot.
//!
//! # Invariants
//! - The acting user must exist in the store when a mutation starts.
//! - Activity logs are prepended; posts, users and messages are appended.
//! - Deleting an unknown user id is a silent no-op.
//! - Deleting a user leaves their posts, messages and logs in place.

use crate::calendar::grid::VisibleMonth;
use crate::calendar::projection::{project_month, CalendarMonth, CalendarQuery};
use crate::clock::Clock;
use crate::config::DashboardConfig;
use crate::feed::files::{files_by_day, FileGroup};
use crate::feed::highlights::{
    recent_activity, unread_notification_count, upcoming_special_days, UpcomingSpecialDay,
};
use crate::model::activity::{ActivityKind, ActivityLog, ActivityLogId};
use crate::model::message::{Message, MessageId};
use crate::model::post::{ClientFilter, Post, PostDraft, PostFile, PostId, PostValidationError};
use crate::model::toast::{Toast, ToastLevel};
use crate::model::user::{NewUser, User, UserId, UserStatus, UserValidationError};
use crate::service::toast_queue::ToastQueue;
use crate::store::entity_store::EntityStore;
use crate::store::ids::{
    file_id, ACTIVITY_ID_PREFIX, MESSAGE_ID_PREFIX, POST_ID_PREFIX, USER_ID_PREFIX,
};
use crate::store::seed::seeded_store;
use chrono::NaiveDate;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use uuid::Uuid;

const LOCAL_FILE_SCHEME: &str = "blob:skybridge/";

pub type DashboardResult<T> = Result<T, DashboardError>;

/// Errors from dashboard mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Add/edit member form failed validation.
    InvalidUser(UserValidationError),
    /// Schedule-post form failed validation.
    InvalidPost(PostValidationError),
    /// Another member already uses this e-mail.
    DuplicateEmail(String),
    /// Edit target does not exist.
    UserNotFound(UserId),
    /// Signed-in user no longer exists in the store.
    ActorNotFound(UserId),
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUser(err) => write!(f, "{err}"),
            Self::InvalidPost(err) => write!(f, "{err}"),
            Self::DuplicateEmail(email) => write!(f, "email already in use: `{email}`"),
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
            Self::ActorNotFound(id) => write!(f, "acting user no longer exists: {id}"),
        }
    }
}

impl Error for DashboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidUser(err) => Some(err),
            Self::InvalidPost(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UserValidationError> for DashboardError {
    fn from(value: UserValidationError) -> Self {
        Self::InvalidUser(value)
    }
}

impl From<PostValidationError> for DashboardError {
    fn from(value: PostValidationError) -> Self {
        Self::InvalidPost(value)
    }
}

/// Signed-in dashboard state: one store, one acting user, one toast queue.
pub struct Dashboard {
    store: EntityStore,
    current_user_id: UserId,
    clock: Arc<dyn Clock>,
    config: DashboardConfig,
    toasts: ToastQueue,
}

impl Dashboard {
    /// Creates a dashboard over an existing store.
    pub fn new(
        store: EntityStore,
        current_user_id: impl Into<UserId>,
        clock: Arc<dyn Clock>,
        config: DashboardConfig,
        toasts: ToastQueue,
    ) -> Self {
        Self {
            store,
            current_user_id: current_user_id.into(),
            clock,
            config,
            toasts,
        }
    }

    /// Creates a dashboard over freshly seeded mock data.
    pub fn seeded(
        current_user_id: impl Into<UserId>,
        clock: Arc<dyn Clock>,
        config: DashboardConfig,
        toasts: ToastQueue,
    ) -> Self {
        let store = seeded_store(clock.now());
        Self::new(store, current_user_id, clock, config, toasts)
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn current_user_id(&self) -> &str {
        self.current_user_id.as_str()
    }

    /// Returns `None` once the signed-in user has been deleted.
    pub fn current_user(&self) -> Option<&User> {
        self.store.find_user(&self.current_user_id)
    }

    pub fn active_toasts(&self) -> Vec<&Toast> {
        self.toasts.active(self.clock.now_utc())
    }

    pub fn prune_toasts(&mut self) -> usize {
        self.toasts.prune(self.clock.now_utc())
    }

    pub(crate) fn push_toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toasts.push(message, level, self.clock.now_utc());
    }

    pub(crate) fn into_toasts(self) -> ToastQueue {
        self.toasts
    }

    /// Schedules a post with its attachments.
    ///
    /// # Contract
    /// - Post id is `p<millis>`; file ids are `f<post_id>-<index>`.
    /// - Every file gets a local reference; images also get a preview.
    /// - Logs `post_created`, then `file_uploaded` when files are attached.
    pub fn add_post(&mut self, draft: PostDraft) -> DashboardResult<PostId> {
        draft.validate()?;
        let actor_id = self.actor_id()?;
        let now = self.clock.now_utc();
        let post_id = self.store.next_id(POST_ID_PREFIX, now);

        let files: Vec<PostFile> = draft
            .files
            .iter()
            .enumerate()
            .map(|(index, upload)| {
                let local_ref = local_file_reference();
                PostFile {
                    id: file_id(&post_id, index),
                    post_id: post_id.clone(),
                    file_name: upload.name.clone(),
                    file_type: upload.mime_type.clone(),
                    file_size: upload.size_bytes,
                    preview_url: upload.is_image().then(|| local_ref.clone()),
                    file_url: local_ref,
                }
            })
            .collect();
        let file_count = files.len();

        self.store.push_post(Post {
            id: post_id.clone(),
            date: draft.date,
            content: draft.content,
            platform: draft.platform,
            client: draft.client,
            user_id: actor_id.clone(),
            files,
            created_at: now,
        });

        self.write_log(
            &actor_id,
            ActivityKind::PostCreated,
            format!("created a post for {} on {}.", draft.client, draft.platform),
        );
        if file_count > 0 {
            self.write_log(
                &actor_id,
                ActivityKind::FileUploaded,
                format!("uploaded {file_count} file(s) for the new post."),
            );
        }
        self.push_toast("Post scheduled successfully!", ToastLevel::Success);

        info!(
            "event=post_created module=dashboard status=ok post_id={} client={} files={}",
            post_id, draft.client, file_count
        );
        Ok(post_id)
    }

    /// Appends a chat message as the acting user.
    ///
    /// Content is stored as given; blank input is rejected by the caller.
    pub fn add_message(&mut self, content: impl Into<String>) -> DashboardResult<MessageId> {
        let actor_id = self.actor_id()?;
        let now = self.clock.now_utc();
        let message_id = self.store.next_id(MESSAGE_ID_PREFIX, now);
        self.store.push_message(Message {
            id: message_id.clone(),
            user_id: actor_id,
            content: content.into(),
            created_at: now,
        });
        debug!(
            "event=message_sent module=dashboard status=ok message_id={}",
            message_id
        );
        Ok(message_id)
    }

    /// Marks every notification in the store read, regardless of recipient.
    /// Returns how many flags changed.
    pub fn mark_all_notifications_read(&mut self) -> usize {
        let changed = self.store.mark_all_notifications_read();
        self.push_toast("All notifications marked as read.", ToastLevel::Info);
        info!(
            "event=notifications_read module=dashboard status=ok changed={}",
            changed
        );
        changed
    }

    /// Adds a team member and logs `user_added`.
    pub fn add_user(&mut self, input: NewUser) -> DashboardResult<UserId> {
        input.validate()?;
        self.ensure_email_available(&input.email, None)?;
        let actor_id = self.actor_id()?;
        let now = self.clock.now_utc();
        let user_id = self.store.next_id(USER_ID_PREFIX, now);
        let user = input.into_user(user_id.clone());
        let name = user.name.clone();

        self.store.push_user(user);
        self.write_log(
            &actor_id,
            ActivityKind::UserAdded,
            format!("added a new member: {name}."),
        );
        self.push_toast(format!("User {name} added."), ToastLevel::Success);

        info!(
            "event=user_added module=dashboard status=ok user_id={}",
            user_id
        );
        Ok(user_id)
    }

    /// Replaces the stored record with the same id and logs `user_updated`.
    pub fn update_user(&mut self, user: User) -> DashboardResult<()> {
        let description = format!("updated profile for {}.", user.name);
        self.apply_user_update(user, description)
    }

    /// Flips active/inactive through the update path with a status-specific
    /// log entry. Returns the new status.
    pub fn toggle_user_status(&mut self, user_id: &str) -> DashboardResult<UserStatus> {
        let mut user = self
            .store
            .find_user(user_id)
            .cloned()
            .ok_or_else(|| DashboardError::UserNotFound(user_id.to_string()))?;
        user.status = user.status.toggled();
        let status = user.status;
        let description = format!("set status for {} to {}.", user.name, status.as_str());
        self.apply_user_update(user, description)?;
        Ok(status)
    }

    /// Removes a team member. Unknown ids return `Ok(None)` without side
    /// effects.
    pub fn delete_user(&mut self, user_id: &str) -> DashboardResult<Option<User>> {
        let Some(name) = self.store.find_user(user_id).map(|user| user.name.clone()) else {
            debug!(
                "event=user_delete module=dashboard status=skipped reason=not_found user_id={}",
                user_id
            );
            return Ok(None);
        };
        let actor_id = self.actor_id()?;

        self.write_log(
            &actor_id,
            ActivityKind::UserDeleted,
            format!("deleted user: {name}."),
        );
        let removed = self.store.remove_user(user_id);
        self.push_toast(format!("User {name} deleted."), ToastLevel::Warning);

        info!(
            "event=user_deleted module=dashboard status=ok user_id={}",
            user_id
        );
        Ok(removed)
    }

    /// Asks `confirm` with the deletion prompt and deletes only on `true`.
    /// Declining, or an unknown id, changes nothing.
    pub fn request_user_deletion(
        &mut self,
        user_id: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> DashboardResult<Option<User>> {
        let Some(user) = self.store.find_user(user_id) else {
            return Ok(None);
        };
        let prompt = format!("Are you sure you want to delete {}?", user.name);
        if !confirm(prompt.as_str()) {
            return Ok(None);
        }
        self.delete_user(user_id)
    }

    /// Appends an audit entry for the acting user.
    pub fn add_activity_log(
        &mut self,
        kind: ActivityKind,
        description: impl Into<String>,
    ) -> DashboardResult<ActivityLogId> {
        let actor_id = self.actor_id()?;
        Ok(self.write_log(&actor_id, kind, description.into()))
    }

    /// Calendar grid for `month` under `filter`.
    pub fn calendar(&self, month: VisibleMonth, filter: ClientFilter) -> CalendarMonth<'_> {
        let query = CalendarQuery {
            month,
            filter,
            week_start: self.config.week_start,
            today: self.clock.today(),
        };
        project_month(self.store.posts(), self.store.special_days(), &query)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Month containing today's date.
    pub fn current_month(&self) -> VisibleMonth {
        VisibleMonth::containing(self.clock.today())
    }

    pub fn upcoming_special_days(&self) -> Vec<UpcomingSpecialDay<'_>> {
        upcoming_special_days(
            self.store.special_days(),
            self.clock.today(),
            self.config.upcoming_limit,
        )
    }

    pub fn recent_activity(&self) -> &[ActivityLog] {
        recent_activity(
            self.store.activity_logs(),
            self.config.recent_activity_limit,
        )
    }

    pub fn file_groups(&self) -> Vec<FileGroup<'_>> {
        files_by_day(self.store.posts())
    }

    pub fn unread_notification_count(&self) -> usize {
        unread_notification_count(self.store.notifications())
    }

    fn apply_user_update(&mut self, user: User, description: String) -> DashboardResult<()> {
        user.validate()?;
        if self.store.find_user(&user.id).is_none() {
            return Err(DashboardError::UserNotFound(user.id));
        }
        self.ensure_email_available(&user.email, Some(user.id.as_str()))?;
        let actor_id = self.actor_id()?;
        let user_id = user.id.clone();
        let name = user.name.clone();

        self.store.replace_user(user);
        self.write_log(&actor_id, ActivityKind::UserUpdated, description);
        self.push_toast(format!("User {name} updated."), ToastLevel::Success);

        info!(
            "event=user_updated module=dashboard status=ok user_id={}",
            user_id
        );
        Ok(())
    }

    fn actor_id(&self) -> DashboardResult<UserId> {
        match self.store.find_user(&self.current_user_id) {
            Some(user) => Ok(user.id.clone()),
            None => Err(DashboardError::ActorNotFound(self.current_user_id.clone())),
        }
    }

    fn ensure_email_available(&self, email: &str, except_id: Option<&str>) -> DashboardResult<()> {
        let taken = self
            .store
            .users()
            .iter()
            .any(|user| user.has_email(email) && Some(user.id.as_str()) != except_id);
        if taken {
            return Err(DashboardError::DuplicateEmail(email.trim().to_string()));
        }
        Ok(())
    }

    fn write_log(
        &mut self,
        actor_id: &str,
        kind: ActivityKind,
        description: String,
    ) -> ActivityLogId {
        let now = self.clock.now_utc();
        let log_id = self.store.next_id(ACTIVITY_ID_PREFIX, now);
        self.store.prepend_activity(ActivityLog {
            id: log_id.clone(),
            user_id: actor_id.to_string(),
            action: kind,
            description,
            created_at: now,
        });
        debug!(
            "event=activity_logged module=dashboard status=ok log_id={} action={}",
            log_id,
            kind.as_str()
        );
        log_id
    }
}

fn local_file_reference() -> String {
    format!("{LOCAL_FILE_SCHEME}{}", Uuid::new_v4())
}
