use chrono::{DateTime, FixedOffset};
use serde_json::{json, Value};
use skybridge_core::{
    files_by_day, format_bytes, ActivityKind, Client, Dashboard, DashboardConfig, FileUpload,
    ManualClock, MonthDay, Platform, PostDraft, SpecialDay, SpecialDayKind, ToastQueue, User,
};
use std::sync::Arc;

fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

fn seeded() -> Dashboard {
    let clock = Arc::new(ManualClock::new(at("2025-06-10T09:00:00+04:00")));
    Dashboard::seeded(
        "u1",
        clock,
        DashboardConfig::default(),
        ToastQueue::default(),
    )
}

#[test]
fn posts_serialize_with_display_labels() {
    let dashboard = seeded();
    let launch = dashboard
        .store()
        .posts()
        .iter()
        .find(|post| post.id == "p2")
        .unwrap();

    let value = serde_json::to_value(launch).unwrap();
    assert_eq!(value["client"], "DECA");
    assert_eq!(value["platform"], "Instagram");
    assert_eq!(value["user_id"], "u2");
    assert_eq!(value["files"][0]["file_type"], "image/jpeg");
    assert_eq!(value["files"][0]["file_size"], 102_400);

    assert_eq!(serde_json::to_value(Client::Hs).unwrap(), json!("H&S"));
    assert_eq!(serde_json::to_value(Platform::LinkedIn).unwrap(), json!("LinkedIn"));
    assert_eq!(
        serde_json::from_value::<Client>(json!("DPS")).unwrap(),
        Client::Dps
    );
}

#[test]
fn records_use_type_and_action_type_keys() {
    let dashboard = seeded();

    let notification = serde_json::to_value(&dashboard.store().notifications()[0]).unwrap();
    assert_eq!(notification["type"], "post_created");
    assert_eq!(notification["is_read"], false);

    let log = serde_json::to_value(&dashboard.store().activity_logs()[1]).unwrap();
    assert_eq!(log["action_type"], "file_uploaded");
    assert!(log.get("action").is_none());

    let user = serde_json::to_value(dashboard.store().find_user("u11").unwrap()).unwrap();
    assert_eq!(user["role"], "admin");
    assert_eq!(user["status"], "active");
    assert_eq!(user["reward_points"], 250);
}

#[test]
fn special_days_round_trip_through_json() {
    let raw = json!({
        "date": { "month": 12, "day": 2 },
        "title": "UAE National Day",
        "type": "uae",
        "suggestion": "Celebrate the spirit of the union with special offers."
    });

    let parsed: SpecialDay = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(parsed.kind, SpecialDayKind::Uae);
    assert_eq!(parsed.date, MonthDay::new(12, 2).unwrap());
    assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
}

#[test]
fn user_json_loads_into_the_domain_type() {
    let raw: Value = json!({
        "id": "u42",
        "name": "Noor Saleh",
        "title": "Strategist",
        "email": "noor@skybridge.com",
        "avatar_url": "https://i.pravatar.cc/150?u=noor@skybridge.com",
        "reward_points": 0,
        "role": "member",
        "status": "inactive"
    });
    let user: User = serde_json::from_value(raw).unwrap();
    assert!(!user.is_admin());
    assert!(!user.is_active());
    assert_eq!(user.first_name(), "Noor");
}

#[test]
fn file_manager_groups_attachments_newest_day_first() {
    let mut dashboard = seeded();
    dashboard
        .add_post(PostDraft {
            date: at("2025-06-20T10:00:00+04:00"),
            content: "Behind the scenes".to_string(),
            platform: Platform::Facebook,
            client: Client::Dps,
            files: vec![
                FileUpload::new("storyboard.pdf", "application/pdf", 1_536),
                FileUpload::new("still.png", "image/png", 5 * 1024 * 1024),
            ],
        })
        .unwrap();
    dashboard
        .add_post(PostDraft {
            date: at("2025-06-11T08:00:00+04:00"),
            content: "Countdown".to_string(),
            platform: Platform::Twitter,
            client: Client::Hs,
            files: vec![FileUpload::new("countdown.gif", "image/gif", 204_800)],
        })
        .unwrap();
    dashboard
        .add_activity_log(ActivityKind::ProfileUpdated, "updated their profile.")
        .unwrap();

    let groups = files_by_day(dashboard.store().posts());
    let keys: Vec<&str> = groups.iter().map(|group| group.date_key.as_str()).collect();
    assert_eq!(keys, vec!["2025-06-20", "2025-06-12", "2025-06-11"]);

    let newest: Vec<&str> = groups[0]
        .files
        .iter()
        .map(|entry| entry.file.file_name.as_str())
        .collect();
    assert_eq!(newest, vec!["storyboard.pdf", "still.png"]);
    assert!(groups[0].files[0].file.preview_url.is_none());
    assert!(groups[0].files[1].file.preview_url.is_some());

    let sizes: Vec<String> = groups
        .iter()
        .flat_map(|group| group.files.iter())
        .map(|entry| format_bytes(entry.file.file_size, 2))
        .collect();
    assert_eq!(sizes, vec!["1.5 KB", "5 MB", "100 KB", "200 KB"]);

    assert_eq!(dashboard.file_groups(), groups);
}
