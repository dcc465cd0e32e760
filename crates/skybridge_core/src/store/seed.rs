//! Mock data every session starts from.
//!
//! Dates relative to "now" (posts, messages, logs, notifications) are computed
//! from the caller's instant so the calendar always has nearby content.

use crate::model::activity::{ActivityKind, ActivityLog};
use crate::model::message::Message;
use crate::model::notification::{Notification, NotificationKind};
use crate::model::post::{Client, Platform, Post, PostFile};
use crate::model::special_day::{MonthDay, SpecialDay, SpecialDayKind};
use crate::model::user::{avatar_url_for, User, UserRole, UserStatus};
use crate::store::entity_store::{EntityStore, StoreSeed};
use chrono::{DateTime, Duration, FixedOffset, Utc};

const LAUNCH_BANNER_URL: &str =
    "https://images.unsplash.com/photo-1620712943543-2858200f7456?w=400";

/// Builds a fully seeded store anchored at `now`.
pub fn seeded_store(now: DateTime<FixedOffset>) -> EntityStore {
    EntityStore::from_seed(StoreSeed {
        users: team_directory(),
        posts: seed_posts(now),
        messages: seed_messages(now.with_timezone(&Utc)),
        activity_logs: seed_activity_logs(now.with_timezone(&Utc)),
        notifications: seed_notifications(now.with_timezone(&Utc)),
        special_days: special_days(),
    })
}

/// Login directory and initial team list.
pub fn team_directory() -> Vec<User> {
    [
        ("u1", "Riaz", "Admin", 120, UserRole::Admin),
        ("u2", "Basi", "Graphic Designer", 100, UserRole::Member),
        ("u3", "Misbah", "Videographer", 100, UserRole::Member),
        ("u4", "Hari", "Graphic Designer", 100, UserRole::Member),
        ("u5", "Ginu", "Graphic Designer", 100, UserRole::Member),
        ("u6", "Sabira", "Social Media Co", 100, UserRole::Member),
        ("u7", "Salman", "Videographer", 100, UserRole::Member),
        ("u8", "Mustafa", "Videographer", 100, UserRole::Member),
        ("u9", "Escano", "Marketing", 100, UserRole::Member),
        ("u10", "Agha", "Marketing Co", 100, UserRole::Member),
        ("u11", "Emad", "CEO", 250, UserRole::Admin),
    ]
    .into_iter()
    .map(|(id, name, title, reward_points, role)| {
        let email = format!("{}@skybridge.com", name.to_ascii_lowercase());
        User {
            id: id.to_string(),
            name: name.to_string(),
            title: title.to_string(),
            avatar_url: avatar_url_for(&email),
            email,
            reward_points,
            role,
            status: UserStatus::Active,
        }
    })
    .collect()
}

/// Recurring markers. Lunar holidays use a fixed approximation.
pub fn special_days() -> Vec<SpecialDay> {
    use SpecialDayKind::{Birthday, Holiday, Uae};

    let entries: [(u32, u32, &str, SpecialDayKind, &str); 21] = [
        (1, 1, "New Year's Day", Holiday, "Launch a 'New Year, New Goals' campaign."),
        (2, 14, "Valentine's Day", Holiday, "Run a contest for the most romantic story."),
        (
            3,
            8,
            "International Women's Day",
            Holiday,
            "Highlight influential women in your industry.",
        ),
        (
            3,
            20,
            "International Day of Happiness",
            Holiday,
            "Share content that brings joy and positivity.",
        ),
        (4, 22, "Earth Day", Holiday, "Promote your brand's sustainability efforts."),
        (
            5,
            1,
            "International Workers' Day",
            Holiday,
            "Thank your team and celebrate their hard work.",
        ),
        (
            6,
            21,
            "International Yoga Day",
            Holiday,
            "Post about wellness and mental health benefits.",
        ),
        (10, 31, "Halloween", Holiday, "Host a spooky-themed giveaway or photo contest."),
        (12, 25, "Christmas Day", Holiday, "Share festive greetings and holiday-themed content."),
        (
            12,
            31,
            "New Year's Eve",
            Holiday,
            "Post a year-in-review and tease upcoming announcements.",
        ),
        (4, 10, "Eid Al Fitr", Uae, "Share warm greetings for Eid and promote special offers."),
        (6, 15, "Arafat Day", Uae, "Post content reflecting on peace and spirituality."),
        (6, 16, "Eid Al Adha", Uae, "Celebrate the festival of sacrifice with themed content."),
        (
            7,
            7,
            "Islamic New Year",
            Uae,
            "Wish followers a happy Hijri New Year and share resolutions.",
        ),
        (9, 15, "Prophet Mohammed's Birthday", Uae, "Share inspiring quotes and stories."),
        (11, 3, "UAE Flag Day", Uae, "Share patriotic content and celebrate national pride."),
        (
            12,
            1,
            "Commemoration Day",
            Uae,
            "Honor the nation's martyrs with respectful and patriotic posts.",
        ),
        (12, 2, "UAE National Day", Uae, "Celebrate the spirit of the union with special offers."),
        (2, 10, "Mr Saad's Birthday", Birthday, "Celebrate Mr Saad's special day!"),
        (7, 15, "Mr Emad's Birthday", Birthday, "Celebrate Mr Emad's special day!"),
        (11, 12, "Mr Fahad's Birthday", Birthday, "Celebrate Mr Fahad's special day!"),
    ];

    entries
        .into_iter()
        .filter_map(|(month, day, title, kind, suggestion)| {
            MonthDay::new(month, day).map(|date| SpecialDay {
                date,
                title: title.to_string(),
                kind,
                suggestion: suggestion.to_string(),
            })
        })
        .collect()
}

fn seed_posts(now: DateTime<FixedOffset>) -> Vec<Post> {
    let created_at = now.with_timezone(&Utc);
    let post = |id: &str, offset_days: i64, content: &str, platform, client, user_id: &str| Post {
        id: id.to_string(),
        date: now + Duration::days(offset_days),
        content: content.to_string(),
        platform,
        client,
        user_id: user_id.to_string(),
        files: Vec::new(),
        created_at,
    };

    let mut launch = post(
        "p2",
        2,
        "New product launch announcement!",
        Platform::Instagram,
        Client::Deca,
        "u2",
    );
    launch.files.push(PostFile {
        id: "f1".to_string(),
        post_id: "p2".to_string(),
        file_name: "launch-banner.jpg".to_string(),
        file_type: "image/jpeg".to_string(),
        file_url: LAUNCH_BANNER_URL.to_string(),
        file_size: 102_400,
        preview_url: Some(LAUNCH_BANNER_URL.to_string()),
    });

    vec![
        post("p1", 0, "Weekly team meeting recap post.", Platform::LinkedIn, Client::Hs, "u1"),
        launch,
        post("p3", 3, "Blog post about new design trends.", Platform::Facebook, Client::Dps, "u2"),
        post("p4", 5, "Hiring for a new frontend developer!", Platform::LinkedIn, Client::Hs, "u1"),
    ]
}

fn seed_messages(now: DateTime<Utc>) -> Vec<Message> {
    vec![
        Message {
            id: "m1".to_string(),
            user_id: "u2".to_string(),
            content: "Hey team, how is the campaign planning going for DECA?".to_string(),
            created_at: now - Duration::minutes(5),
        },
        Message {
            id: "m2".to_string(),
            user_id: "u1".to_string(),
            content: "Going well! I just scheduled the launch post.".to_string(),
            created_at: now,
        },
    ]
}

fn seed_activity_logs(now: DateTime<Utc>) -> Vec<ActivityLog> {
    vec![
        ActivityLog {
            id: "a1".to_string(),
            user_id: "u1".to_string(),
            action: ActivityKind::PostCreated,
            description: "created a post for H&S on LinkedIn.".to_string(),
            created_at: now - Duration::minutes(1),
        },
        ActivityLog {
            id: "a2".to_string(),
            user_id: "u2".to_string(),
            action: ActivityKind::FileUploaded,
            description: "uploaded launch-banner.jpg.".to_string(),
            created_at: now - Duration::minutes(2),
        },
    ]
}

fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: "n1".to_string(),
            user_id: "u1".to_string(),
            kind: NotificationKind::PostCreated,
            message: "Jane Smith scheduled a new post for DECA.".to_string(),
            is_read: false,
            created_at: now - Duration::minutes(10),
        },
        Notification {
            id: "n2".to_string(),
            user_id: "u1".to_string(),
            kind: NotificationKind::FileUploaded,
            message: "A new file was uploaded for the \"New Product Launch\" post.".to_string(),
            is_read: false,
            created_at: now - Duration::minutes(30),
        },
        Notification {
            id: "n3".to_string(),
            user_id: "u1".to_string(),
            kind: NotificationKind::ProfileUpdated,
            message: "Sam Wilson is now inactive.".to_string(),
            is_read: true,
            created_at: now - Duration::hours(2),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{seeded_store, special_days, team_directory};
    use chrono::DateTime;
    use std::collections::HashSet;

    #[test]
    fn directory_has_unique_ids_and_emails() {
        let users = team_directory();
        let ids: HashSet<_> = users.iter().map(|user| user.id.as_str()).collect();
        let emails: HashSet<_> = users.iter().map(|user| user.email.as_str()).collect();
        assert_eq!(users.len(), 11);
        assert_eq!(ids.len(), users.len());
        assert_eq!(emails.len(), users.len());
        assert_eq!(users.iter().filter(|user| user.is_admin()).count(), 2);
    }

    #[test]
    fn all_special_days_are_valid() {
        assert_eq!(special_days().len(), 21);
    }

    #[test]
    fn seeded_posts_reference_directory_users() {
        let now = DateTime::parse_from_rfc3339("2025-06-15T10:00:00+04:00").unwrap();
        let store = seeded_store(now);
        for post in store.posts() {
            assert!(store.find_user(&post.user_id).is_some());
        }
        assert_eq!(store.posts()[1].files.len(), 1);
        assert_eq!(
            store.notifications().iter().filter(|n| !n.is_read).count(),
            2
        );
    }
}
