//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single process-wide `App` and convert core types to owned DTOs.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Core errors surface as their display string inside a failure envelope.
//! - A poisoned state lock is recovered, never propagated.

use chrono::{DateTime, Datelike};
use log::warn;
use skybridge_core::{
    core_version as core_version_inner, find_author, format_bytes,
    init_logging as init_logging_inner, normalize_limit, ping as ping_inner,
    recent_activity as recent_activity_inner,
    upcoming_special_days as upcoming_special_days_inner, ActivityLog, App, CalendarDay, Client,
    ClientFilter, Dashboard, DashboardConfig, FileUpload, Message, NewUser, Notification,
    NotificationKind, Platform, Post, PostDraft, PostFile, SpecialDay, SpecialDayKind,
    SystemClock, Toast, User, UserRole, UserStatus, VisibleMonth,
};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

const NOT_SIGNED_IN: &str = "Not signed in.";
const FILE_SIZE_DECIMALS: usize = 2;

static APP_STATE: OnceLock<Mutex<App>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Team member as shown in the admin panel and header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub title: String,
    pub email: String,
    pub avatar_url: String,
    pub reward_points: u32,
    /// `admin|member`.
    pub role: String,
    /// `active|inactive`.
    pub status: String,
}

/// File picked in the schedule-post form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUploadInput {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFileDto {
    pub id: String,
    pub post_id: String,
    pub file_name: String,
    pub file_type: String,
    pub file_url: String,
    pub file_size: u64,
    /// Human-readable size, e.g. `200 KB`.
    pub size_label: String,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDto {
    pub id: String,
    /// RFC 3339 with the offset the post was scheduled in.
    pub date: String,
    pub content: String,
    pub platform: String,
    pub client: String,
    pub author_name: Option<String>,
    pub files: Vec<PostFileDto>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialDayDto {
    /// `YYYY-MM-DD` in the requested year, or `MM-DD` when unresolved.
    pub date: String,
    pub title: String,
    /// `holiday|uae|birthday`.
    pub kind: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDayDto {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub day_of_month: u32,
    pub in_month: bool,
    pub is_today: bool,
    pub posts: Vec<PostDto>,
    pub special_day: Option<SpecialDayDto>,
}

/// Calendar view response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonthResponse {
    pub ok: bool,
    pub year: i32,
    pub month: u32,
    /// Weekday labels in grid column order.
    pub header: Vec<String>,
    pub days: Vec<CalendarDayDto>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDto {
    pub id: String,
    /// `None` once the actor has been deleted.
    pub user_name: Option<String>,
    pub action_type: String,
    pub description: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroupDto {
    /// `YYYY-MM-DD`.
    pub date_key: String,
    pub files: Vec<PostFileDto>,
}

/// Team chat entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDto {
    pub id: String,
    pub user_id: String,
    /// `None` once the sender has been deleted.
    pub user_name: Option<String>,
    pub content: String,
    pub created_at: String,
    /// Sent by the signed-in user.
    pub is_own: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDto {
    pub id: String,
    /// `post_created|file_uploaded|profile_updated`.
    pub kind: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastDto {
    pub id: String,
    pub message: String,
    /// `success|error|info|warning`.
    pub level: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Optional created or affected entity ID.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Signs in by e-mail. Passwords are not checked.
///
/// # FFI contract
/// - On failure `message` is the inline login error.
/// - On success `id` is the signed-in user id.
#[flutter_rust_bridge::frb(sync)]
pub fn login(email: String, password: String) -> ActionResponse {
    with_app(|app| login_in(app, &email, &password))
}

#[flutter_rust_bridge::frb(sync)]
pub fn logout() -> ActionResponse {
    with_app(logout_in)
}

/// Signed-in user, or `None` when signed out or deleted.
#[flutter_rust_bridge::frb(sync)]
pub fn session_user() -> Option<UserDto> {
    with_app(|app| app.current_user().map(to_user_dto))
}

/// Schedules a post as the signed-in user.
///
/// Input semantics:
/// - `date`: RFC 3339 timestamp with offset.
/// - `platform`, `client`: display labels (`Instagram`, `H&S`, ...).
#[flutter_rust_bridge::frb(sync)]
pub fn schedule_post(
    date: String,
    content: String,
    platform: String,
    client: String,
    files: Vec<FileUploadInput>,
) -> ActionResponse {
    with_app(|app| schedule_post_in(app, &date, content, &platform, &client, files))
}

/// Sends a chat message. Blank input is rejected without touching state.
#[flutter_rust_bridge::frb(sync)]
pub fn send_message(content: String) -> ActionResponse {
    with_app(|app| send_message_in(app, content))
}

#[flutter_rust_bridge::frb(sync)]
pub fn mark_all_notifications_read() -> ActionResponse {
    with_app(|app| {
        with_dashboard(app, |dashboard| {
            let changed = dashboard.mark_all_notifications_read();
            ActionResponse::success(format!("Marked {changed} notification(s) read."), None)
        })
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn add_user(name: String, title: String, email: String, is_admin: bool) -> ActionResponse {
    with_app(|app| add_user_in(app, name, title, email, is_admin))
}

/// Replaces the stored record with the same id.
#[flutter_rust_bridge::frb(sync)]
pub fn update_user(user: UserDto) -> ActionResponse {
    with_app(|app| update_user_in(app, user))
}

#[flutter_rust_bridge::frb(sync)]
pub fn toggle_user_status(user_id: String) -> ActionResponse {
    with_app(|app| toggle_user_status_in(app, &user_id))
}

/// Deletes a team member once the UI has confirmed.
///
/// # FFI contract
/// - `confirmed=false` is a successful no-op.
/// - Unknown ids succeed without changes.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_user(user_id: String, confirmed: bool) -> ActionResponse {
    with_app(|app| delete_user_in(app, &user_id, confirmed))
}

/// Month grid for the calendar view.
///
/// Input semantics:
/// - `month`: 1-12.
/// - `client_filter`: `All` or a client label.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_month(year: i32, month: u32, client_filter: String) -> CalendarMonthResponse {
    with_app(|app| calendar_month_in(app, year, month, &client_filter))
}

/// Special days from today on, soonest first.
#[flutter_rust_bridge::frb(sync)]
pub fn upcoming_special_days(limit: Option<u32>) -> Vec<SpecialDayDto> {
    with_app(|app| upcoming_special_days_in(app, limit))
}

/// Newest activity entries first.
#[flutter_rust_bridge::frb(sync)]
pub fn recent_activity(limit: Option<u32>) -> Vec<ActivityDto> {
    with_app(|app| recent_activity_in(app, limit))
}

/// Attachments grouped by schedule day, newest day first.
#[flutter_rust_bridge::frb(sync)]
pub fn file_groups() -> Vec<FileGroupDto> {
    with_app(|app| {
        app.dashboard()
            .map(|dashboard| {
                dashboard
                    .file_groups()
                    .into_iter()
                    .map(|group| FileGroupDto {
                        date_key: group.date_key,
                        files: group
                            .files
                            .into_iter()
                            .map(|entry| to_post_file_dto(entry.file))
                            .collect(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    })
}

/// Team directory of the signed-in store, in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_users() -> Vec<UserDto> {
    with_app(|app| list_users_in(app))
}

/// Chat history, oldest first.
#[flutter_rust_bridge::frb(sync)]
pub fn messages() -> Vec<MessageDto> {
    with_app(|app| messages_in(app))
}

/// Bell-menu notifications in stored order.
#[flutter_rust_bridge::frb(sync)]
pub fn notifications() -> Vec<NotificationDto> {
    with_app(|app| notifications_in(app))
}

/// Badge count. `0` when signed out.
#[flutter_rust_bridge::frb(sync)]
pub fn unread_notification_count() -> u32 {
    with_app(|app| unread_notification_count_in(app))
}

/// Unexpired toasts, oldest first.
///
/// # FFI contract
/// - Expired toasts are dropped from the queue on every call.
#[flutter_rust_bridge::frb(sync)]
pub fn active_toasts() -> Vec<ToastDto> {
    with_app(active_toasts_in)
}

fn with_app<T>(f: impl FnOnce(&mut App) -> T) -> T {
    let state = APP_STATE.get_or_init(|| {
        Mutex::new(App::new(Arc::new(SystemClock), DashboardConfig::default()))
    });
    let mut app = state.lock().unwrap_or_else(|poisoned| {
        warn!("event=state_lock module=ffi status=recovered");
        PoisonError::into_inner(poisoned)
    });
    f(&mut app)
}

fn with_dashboard(
    app: &mut App,
    f: impl FnOnce(&mut Dashboard) -> ActionResponse,
) -> ActionResponse {
    match app.dashboard_mut() {
        Some(dashboard) => f(dashboard),
        None => ActionResponse::failure(NOT_SIGNED_IN),
    }
}

fn login_in(app: &mut App, email: &str, password: &str) -> ActionResponse {
    match app.login(email, password) {
        Ok(dashboard) => ActionResponse::success(
            "Signed in.",
            Some(dashboard.current_user_id().to_string()),
        ),
        Err(err) => ActionResponse::failure(err.to_string()),
    }
}

fn logout_in(app: &mut App) -> ActionResponse {
    if app.logout() {
        ActionResponse::success("Signed out.", None)
    } else {
        ActionResponse::failure(NOT_SIGNED_IN)
    }
}

fn schedule_post_in(
    app: &mut App,
    date: &str,
    content: String,
    platform: &str,
    client: &str,
    files: Vec<FileUploadInput>,
) -> ActionResponse {
    let date = match DateTime::parse_from_rfc3339(date.trim()) {
        Ok(date) => date,
        Err(err) => return ActionResponse::failure(format!("invalid post date: {err}")),
    };
    let Some(platform) = Platform::from_label(platform) else {
        return ActionResponse::failure(format!("unknown platform: `{platform}`"));
    };
    let Some(client) = Client::from_label(client) else {
        return ActionResponse::failure(format!("unknown client: `{client}`"));
    };
    let draft = PostDraft {
        date,
        content,
        platform,
        client,
        files: files
            .into_iter()
            .map(|file| FileUpload::new(file.name, file.mime_type, file.size_bytes))
            .collect(),
    };

    with_dashboard(app, |dashboard| match dashboard.add_post(draft) {
        Ok(post_id) => ActionResponse::success("Post scheduled successfully!", Some(post_id)),
        Err(err) => ActionResponse::failure(err.to_string()),
    })
}

fn send_message_in(app: &mut App, content: String) -> ActionResponse {
    if content.trim().is_empty() {
        return ActionResponse::failure("message cannot be empty");
    }
    with_dashboard(app, |dashboard| match dashboard.add_message(content) {
        Ok(message_id) => ActionResponse::success("Message sent.", Some(message_id)),
        Err(err) => ActionResponse::failure(err.to_string()),
    })
}

fn add_user_in(
    app: &mut App,
    name: String,
    title: String,
    email: String,
    is_admin: bool,
) -> ActionResponse {
    let role = if is_admin {
        UserRole::Admin
    } else {
        UserRole::Member
    };
    let input = NewUser::new(name, title, email).with_role(role);
    with_dashboard(app, |dashboard| match dashboard.add_user(input) {
        Ok(user_id) => ActionResponse::success("User added.", Some(user_id)),
        Err(err) => ActionResponse::failure(err.to_string()),
    })
}

fn update_user_in(app: &mut App, user: UserDto) -> ActionResponse {
    let user = match from_user_dto(user) {
        Ok(user) => user,
        Err(message) => return ActionResponse::failure(message),
    };
    let user_id = user.id.clone();
    with_dashboard(app, |dashboard| match dashboard.update_user(user) {
        Ok(()) => ActionResponse::success("User updated.", Some(user_id)),
        Err(err) => ActionResponse::failure(err.to_string()),
    })
}

fn toggle_user_status_in(app: &mut App, user_id: &str) -> ActionResponse {
    with_dashboard(app, |dashboard| match dashboard.toggle_user_status(user_id) {
        Ok(status) => ActionResponse::success(
            format!("Status set to {}.", status.as_str()),
            Some(user_id.to_string()),
        ),
        Err(err) => ActionResponse::failure(err.to_string()),
    })
}

fn delete_user_in(app: &mut App, user_id: &str, confirmed: bool) -> ActionResponse {
    with_dashboard(app, |dashboard| {
        match dashboard.request_user_deletion(user_id, |_prompt| confirmed) {
            Ok(Some(user)) => ActionResponse::success("User deleted.", Some(user.id)),
            Ok(None) => ActionResponse::success("Nothing deleted.", None),
            Err(err) => ActionResponse::failure(err.to_string()),
        }
    })
}

fn calendar_month_in(
    app: &mut App,
    year: i32,
    month: u32,
    client_filter: &str,
) -> CalendarMonthResponse {
    let failure = |message: String| CalendarMonthResponse {
        ok: false,
        year,
        month,
        header: Vec::new(),
        days: Vec::new(),
        message,
    };
    let Some(visible) = VisibleMonth::new(year, month) else {
        return failure(format!("invalid month: {year}-{month}"));
    };
    let Some(filter) = ClientFilter::from_label(client_filter) else {
        return failure(format!("unknown client filter: `{client_filter}`"));
    };
    let Some(dashboard) = app.dashboard() else {
        return failure(NOT_SIGNED_IN.to_string());
    };

    let calendar = dashboard.calendar(visible, filter);
    let users = dashboard.store().users();
    let days: Vec<CalendarDayDto> = calendar
        .days
        .iter()
        .map(|day| to_calendar_day_dto(day, users))
        .collect();
    let message = format!("{} post(s) visible.", calendar.post_count());

    CalendarMonthResponse {
        ok: true,
        year,
        month,
        header: dashboard
            .config()
            .week_start
            .header_labels()
            .iter()
            .map(|label| label.to_string())
            .collect(),
        days,
        message,
    }
}

fn upcoming_special_days_in(app: &mut App, limit: Option<u32>) -> Vec<SpecialDayDto> {
    let Some(dashboard) = app.dashboard() else {
        return Vec::new();
    };
    let limit = normalize_limit(
        limit.map(|value| value as usize),
        dashboard.config().upcoming_limit,
    );
    upcoming_special_days_inner(dashboard.store().special_days(), dashboard.today(), limit)
        .into_iter()
        .map(|entry| SpecialDayDto {
            date: entry.date.format("%Y-%m-%d").to_string(),
            ..to_special_day_dto(entry.special_day)
        })
        .collect()
}

fn recent_activity_in(app: &mut App, limit: Option<u32>) -> Vec<ActivityDto> {
    let Some(dashboard) = app.dashboard() else {
        return Vec::new();
    };
    let limit = normalize_limit(
        limit.map(|value| value as usize),
        dashboard.config().recent_activity_limit,
    );
    let users = dashboard.store().users();
    recent_activity_inner(dashboard.store().activity_logs(), limit)
        .iter()
        .map(|log| to_activity_dto(log, users))
        .collect()
}

fn list_users_in(app: &App) -> Vec<UserDto> {
    app.dashboard()
        .map(|dashboard| dashboard.store().users().iter().map(to_user_dto).collect())
        .unwrap_or_default()
}

fn messages_in(app: &App) -> Vec<MessageDto> {
    let Some(dashboard) = app.dashboard() else {
        return Vec::new();
    };
    let users = dashboard.store().users();
    dashboard
        .store()
        .messages()
        .iter()
        .map(|message| to_message_dto(message, users, dashboard.current_user_id()))
        .collect()
}

fn notifications_in(app: &App) -> Vec<NotificationDto> {
    app.dashboard()
        .map(|dashboard| {
            dashboard
                .store()
                .notifications()
                .iter()
                .map(to_notification_dto)
                .collect()
        })
        .unwrap_or_default()
}

fn unread_notification_count_in(app: &App) -> u32 {
    app.dashboard()
        .map(|dashboard| u32::try_from(dashboard.unread_notification_count()).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

fn active_toasts_in(app: &mut App) -> Vec<ToastDto> {
    app.prune_toasts();
    app.active_toasts().into_iter().map(to_toast_dto).collect()
}

fn to_user_dto(user: &User) -> UserDto {
    UserDto {
        id: user.id.clone(),
        name: user.name.clone(),
        title: user.title.clone(),
        email: user.email.clone(),
        avatar_url: user.avatar_url.clone(),
        reward_points: user.reward_points,
        role: role_label(user.role).to_string(),
        status: user.status.as_str().to_string(),
    }
}

fn from_user_dto(dto: UserDto) -> Result<User, String> {
    let role = match dto.role.trim().to_ascii_lowercase().as_str() {
        "admin" => UserRole::Admin,
        "member" => UserRole::Member,
        other => return Err(format!("unknown role: `{other}`")),
    };
    let status = match dto.status.trim().to_ascii_lowercase().as_str() {
        "active" => UserStatus::Active,
        "inactive" => UserStatus::Inactive,
        other => return Err(format!("unknown status: `{other}`")),
    };
    Ok(User {
        id: dto.id,
        name: dto.name,
        title: dto.title,
        email: dto.email,
        avatar_url: dto.avatar_url,
        reward_points: dto.reward_points,
        role,
        status,
    })
}

fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::Member => "member",
    }
}

fn to_post_dto(post: &Post, users: &[User]) -> PostDto {
    PostDto {
        id: post.id.clone(),
        date: post.date.to_rfc3339(),
        content: post.content.clone(),
        platform: post.platform.label().to_string(),
        client: post.client.label().to_string(),
        author_name: find_author(users, &post.user_id).map(|user| user.name.clone()),
        files: post.files.iter().map(to_post_file_dto).collect(),
    }
}

fn to_post_file_dto(file: &PostFile) -> PostFileDto {
    PostFileDto {
        id: file.id.clone(),
        post_id: file.post_id.clone(),
        file_name: file.file_name.clone(),
        file_type: file.file_type.clone(),
        file_url: file.file_url.clone(),
        file_size: file.file_size,
        size_label: format_bytes(file.file_size, FILE_SIZE_DECIMALS),
        preview_url: file.preview_url.clone(),
    }
}

fn to_special_day_dto(special_day: &SpecialDay) -> SpecialDayDto {
    let kind = match special_day.kind {
        SpecialDayKind::Holiday => "holiday",
        SpecialDayKind::Uae => "uae",
        SpecialDayKind::Birthday => "birthday",
    };
    SpecialDayDto {
        date: format!(
            "{:02}-{:02}",
            special_day.date.month(),
            special_day.date.day()
        ),
        title: special_day.title.clone(),
        kind: kind.to_string(),
        suggestion: special_day.suggestion.clone(),
    }
}

fn to_calendar_day_dto(day: &CalendarDay<'_>, users: &[User]) -> CalendarDayDto {
    let date = day.date.format("%Y-%m-%d").to_string();
    CalendarDayDto {
        day_of_month: day.date.day(),
        in_month: day.in_month,
        is_today: day.is_today,
        posts: day.posts.iter().map(|post| to_post_dto(post, users)).collect(),
        special_day: day.special_day.map(|special_day| SpecialDayDto {
            date: date.clone(),
            ..to_special_day_dto(special_day)
        }),
        date,
    }
}

fn to_activity_dto(log: &ActivityLog, users: &[User]) -> ActivityDto {
    ActivityDto {
        id: log.id.clone(),
        user_name: find_author(users, &log.user_id).map(|user| user.name.clone()),
        action_type: log.action.as_str().to_string(),
        description: log.description.clone(),
        created_at: log.created_at.to_rfc3339(),
    }
}

fn to_message_dto(message: &Message, users: &[User], current_user_id: &str) -> MessageDto {
    MessageDto {
        id: message.id.clone(),
        user_id: message.user_id.clone(),
        user_name: find_author(users, &message.user_id).map(|user| user.name.clone()),
        content: message.content.clone(),
        created_at: message.created_at.to_rfc3339(),
        is_own: message.user_id == current_user_id,
    }
}

fn to_notification_dto(notification: &Notification) -> NotificationDto {
    let kind = match notification.kind {
        NotificationKind::PostCreated => "post_created",
        NotificationKind::FileUploaded => "file_uploaded",
        NotificationKind::ProfileUpdated => "profile_updated",
    };
    NotificationDto {
        id: notification.id.clone(),
        kind: kind.to_string(),
        message: notification.message.clone(),
        is_read: notification.is_read,
        created_at: notification.created_at.to_rfc3339(),
    }
}

fn to_toast_dto(toast: &Toast) -> ToastDto {
    ToastDto {
        id: toast.id.to_string(),
        message: toast.message.clone(),
        level: toast.level.as_str().to_string(),
    }
}
