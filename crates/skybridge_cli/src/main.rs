//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `skybridge_core` linkage.
//! - Print the seeded agenda for the current month as a quick sanity check.

use skybridge_core::{App, ClientFilter, DashboardConfig, SystemClock};
use std::process::ExitCode;
use std::sync::Arc;

const SMOKE_LOGIN: &str = "riaz@skybridge.com";

fn main() -> ExitCode {
    println!("skybridge_core ping={}", skybridge_core::ping());
    println!("skybridge_core version={}", skybridge_core::core_version());

    let mut app = App::new(Arc::new(SystemClock), DashboardConfig::default());
    let dashboard = match app.login(SMOKE_LOGIN, "") {
        Ok(dashboard) => dashboard,
        Err(err) => {
            eprintln!("login failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let month = dashboard.current_month();
    let calendar = dashboard.calendar(month, ClientFilter::All);
    println!(
        "agenda {}-{:02} posts={}",
        month.year(),
        month.month(),
        calendar.post_count()
    );
    for day in calendar.days.iter().filter(|day| day.in_month) {
        if let Some(special_day) = day.special_day {
            println!("  {} * {}", day.date, special_day.title);
        }
        for post in &day.posts {
            println!("  {} {} {}", day.date, post.client, post.platform);
        }
    }

    for upcoming in dashboard.upcoming_special_days() {
        println!("upcoming {} {}", upcoming.date, upcoming.special_day.title);
    }
    println!("unread_notifications={}", dashboard.unread_notification_count());
    ExitCode::SUCCESS
}
