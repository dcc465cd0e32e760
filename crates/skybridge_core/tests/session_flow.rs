use chrono::{DateTime, Duration, FixedOffset};
use skybridge_core::{App, AuthError, DashboardConfig, ManualClock, NewUser, ToastLevel};
use std::sync::Arc;

fn signed_out_app() -> (App, Arc<ManualClock>) {
    let start = DateTime::<FixedOffset>::parse_from_rfc3339("2025-06-10T09:00:00+04:00").unwrap();
    let clock = Arc::new(ManualClock::new(start));
    (App::new(clock.clone(), DashboardConfig::default()), clock)
}

fn toast_messages(app: &App) -> Vec<String> {
    app.active_toasts()
        .into_iter()
        .map(|toast| toast.message.clone())
        .collect()
}

#[test]
fn unknown_email_is_rejected_and_stays_signed_out() {
    let (mut app, _clock) = signed_out_app();

    let error = app.login("nobody@skybridge.com", "secret").err().unwrap();
    assert_eq!(error, AuthError::InvalidCredentials);
    assert_eq!(error.to_string(), "Invalid email or password.");
    assert!(!app.is_signed_in());
    assert!(app.current_user().is_none());
    assert!(app.active_toasts().is_empty());
}

#[test]
fn login_matches_trimmed_email_case_insensitively_and_welcomes() {
    let (mut app, _clock) = signed_out_app();

    let dashboard = app.login("  RIAZ@skybridge.com ", "anything").unwrap();
    assert_eq!(dashboard.current_user_id(), "u1");

    let current = app.current_user().unwrap();
    assert_eq!(current.name, "Riaz");
    assert!(current.is_admin());

    let toasts = app.active_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Welcome back, Riaz!");
    assert_eq!(toasts[0].level, ToastLevel::Success);
}

#[test]
fn second_login_requires_logout_first() {
    let (mut app, _clock) = signed_out_app();
    app.login("riaz@skybridge.com", "").unwrap();

    let error = app.login("emad@skybridge.com", "").err().unwrap();
    assert_eq!(error, AuthError::AlreadySignedIn);
    assert_eq!(app.current_user().unwrap().id, "u1");
}

#[test]
fn logout_keeps_toasts_until_they_expire() {
    let (mut app, clock) = signed_out_app();
    app.login("riaz@skybridge.com", "").unwrap();

    assert!(app.logout());
    assert!(!app.is_signed_in());
    assert_eq!(
        toast_messages(&app),
        vec!["Welcome back, Riaz!", "You have been logged out."]
    );

    clock.advance(Duration::seconds(6));
    assert!(app.active_toasts().is_empty());
    assert_eq!(app.prune_toasts(), 2);
    assert_eq!(app.prune_toasts(), 0);
    assert!(!app.logout());
}

#[test]
fn each_login_starts_from_fresh_mock_data() {
    let (mut app, _clock) = signed_out_app();

    let dashboard = app.login("riaz@skybridge.com", "").unwrap();
    let seeded_users = dashboard.store().users().len();
    let seeded_posts = dashboard.store().posts().len();
    dashboard
        .add_user(NewUser::new("Layla Haddad", "Copywriter", "layla@skybridge.com"))
        .unwrap();
    dashboard.delete_user("u2").unwrap();
    dashboard.mark_all_notifications_read();
    assert_eq!(dashboard.unread_notification_count(), 0);
    app.logout();

    let dashboard = app.login("emad@skybridge.com", "").unwrap();
    assert_eq!(dashboard.store().users().len(), seeded_users);
    assert_eq!(dashboard.store().posts().len(), seeded_posts);
    assert!(dashboard.store().find_user("u2").is_some());
    assert!(dashboard
        .store()
        .find_user_by_email("layla@skybridge.com")
        .is_none());
    assert_eq!(dashboard.unread_notification_count(), 2);
}

#[test]
fn directory_is_unaffected_by_dashboard_edits() {
    let (mut app, _clock) = signed_out_app();
    let dashboard = app.login("emad@skybridge.com", "").unwrap();
    dashboard.delete_user("u1").unwrap();
    app.logout();

    assert!(app.directory().iter().any(|user| user.id == "u1"));
    let dashboard = app.login("riaz@skybridge.com", "").unwrap();
    assert_eq!(dashboard.current_user().unwrap().name, "Riaz");
}
