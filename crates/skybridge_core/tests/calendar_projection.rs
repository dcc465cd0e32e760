use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use skybridge_core::{
    group_posts_by_day, month_grid, Client, ClientFilter, Dashboard, DashboardConfig, ManualClock,
    Platform, PostDraft, SpecialDayKind, ToastQueue, VisibleMonth, WeekStart,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn june_dashboard() -> Dashboard {
    let clock = Arc::new(ManualClock::new(at("2025-06-10T09:00:00+04:00")));
    let mut dashboard = Dashboard::seeded(
        "u1",
        clock,
        DashboardConfig::default(),
        ToastQueue::default(),
    );
    let scheduled = [
        ("2025-06-15T10:00:00Z", Client::Deca, Platform::Instagram),
        ("2025-06-15T23:30:00-05:00", Client::Dps, Platform::Twitter),
        ("2025-06-16T00:15:00+04:00", Client::Hs, Platform::Facebook),
        ("2025-07-02T12:00:00+04:00", Client::Deca, Platform::LinkedIn),
    ];
    for (when, client, platform) in scheduled {
        dashboard
            .add_post(PostDraft {
                date: at(when),
                content: format!("{client} on {platform}"),
                platform,
                client,
                files: Vec::new(),
            })
            .unwrap();
    }
    dashboard
}

#[test]
fn per_client_groups_merge_to_the_unfiltered_grouping() {
    let dashboard = june_dashboard();
    let posts = dashboard.store().posts();

    let mut merged: BTreeMap<NaiveDate, BTreeSet<&str>> = BTreeMap::new();
    for client in Client::ALL {
        for (day, day_posts) in group_posts_by_day(posts, ClientFilter::Only(client)) {
            assert!(day_posts.iter().all(|post| post.client == client));
            merged
                .entry(day)
                .or_default()
                .extend(day_posts.iter().map(|post| post.id.as_str()));
        }
    }

    let all: BTreeMap<NaiveDate, BTreeSet<&str>> = group_posts_by_day(posts, ClientFilter::All)
        .into_iter()
        .map(|(day, day_posts)| (day, day_posts.iter().map(|post| post.id.as_str()).collect()))
        .collect();

    assert_eq!(merged, all);
}

#[test]
fn posts_bucket_by_their_own_local_date_in_insertion_order() {
    let dashboard = june_dashboard();
    let grouped = group_posts_by_day(dashboard.store().posts(), ClientFilter::All);

    let june_15: Vec<_> = grouped[&date(2025, 6, 15)]
        .iter()
        .map(|post| post.client)
        .collect();
    assert_eq!(june_15, vec![Client::Hs, Client::Deca, Client::Dps]);

    let june_16: Vec<_> = grouped[&date(2025, 6, 16)]
        .iter()
        .map(|post| post.client)
        .collect();
    assert_eq!(june_16, vec![Client::Hs]);
}

#[test]
fn month_grids_are_whole_weeks_covering_the_month() {
    for week_start in [WeekStart::Sunday, WeekStart::Monday] {
        for year in 2024..=2027 {
            for month in 1..=12 {
                let visible = VisibleMonth::new(year, month).unwrap();
                let days = month_grid(visible, week_start);

                assert_eq!(days.len() % 7, 0, "{year}-{month}");
                assert!(days.len() >= 28 && days.len() <= 42);
                assert_eq!(days[0].weekday(), week_start.weekday());
                assert!(days.contains(&visible.first_day()));
                assert!(days.contains(&visible.last_day()));
                assert!(days.windows(2).all(|pair| pair[0].succ_opt() == Some(pair[1])));
            }
        }
    }
}

#[test]
fn calendar_marks_today_month_days_and_special_days() {
    let dashboard = june_dashboard();
    let month = dashboard.current_month();
    assert_eq!((month.year(), month.month()), (2025, 6));

    let calendar = dashboard.calendar(month, ClientFilter::All);
    assert_eq!(calendar.days.len(), 35);
    assert_eq!(calendar.weeks().count(), 5);

    let today = calendar.day(date(2025, 6, 10)).unwrap();
    assert!(today.is_today);
    assert_eq!(calendar.days.iter().filter(|day| day.is_today).count(), 1);

    let arafat = calendar.day(date(2025, 6, 15)).unwrap();
    let marker = arafat.special_day.unwrap();
    assert_eq!(marker.title, "Arafat Day");
    assert_eq!(marker.kind, SpecialDayKind::Uae);
    assert_eq!(arafat.posts.len(), 3);

    let trailing = calendar.day(date(2025, 7, 2)).unwrap();
    assert!(!trailing.in_month);
    assert_eq!(trailing.posts.len(), 1);
}

#[test]
fn client_filter_limits_calendar_posts() {
    let dashboard = june_dashboard();
    let month = VisibleMonth::new(2025, 6).unwrap();

    let deca = dashboard.calendar(month, ClientFilter::Only(Client::Deca));
    assert!(deca
        .days
        .iter()
        .flat_map(|day| day.posts.iter())
        .all(|post| post.client == Client::Deca));
    assert_eq!(deca.day(date(2025, 6, 15)).unwrap().posts.len(), 1);

    let all = dashboard.calendar(month, ClientFilter::All);
    assert!(all.post_count() > deca.post_count());
}

#[test]
fn special_days_resolve_in_the_displayed_year_only() {
    let dashboard = june_dashboard();

    let december = dashboard.calendar(VisibleMonth::new(2025, 12).unwrap(), ClientFilter::All);
    let national_day = december.day(date(2025, 12, 2)).unwrap();
    assert_eq!(national_day.special_day.unwrap().title, "UAE National Day");

    let next_new_year = december.day(date(2026, 1, 1)).unwrap();
    assert!(!next_new_year.in_month);
    assert!(next_new_year.special_day.is_none());

    let january = dashboard.calendar(VisibleMonth::new(2026, 1).unwrap(), ClientFilter::All);
    assert_eq!(
        january.day(date(2026, 1, 1)).unwrap().special_day.unwrap().title,
        "New Year's Day"
    );
    let previous_eve = january.day(date(2025, 12, 31)).unwrap();
    assert!(!previous_eve.in_month);
    assert!(previous_eve.special_day.is_none());
    assert!(january.days.iter().all(|day| !day.is_today));
}

#[test]
fn special_days_recur_in_later_years() {
    let dashboard = june_dashboard();

    let december = dashboard.calendar(VisibleMonth::new(2030, 12).unwrap(), ClientFilter::All);
    let national_day = december.day(date(2030, 12, 2)).unwrap();
    assert_eq!(national_day.special_day.unwrap().title, "UAE National Day");
    assert!(december.day(date(2031, 1, 1)).unwrap().special_day.is_none());
}
