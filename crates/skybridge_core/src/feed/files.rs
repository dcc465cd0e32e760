//! File manager listing.

use crate::model::post::{Post, PostFile};
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;

const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
const BYTE_BASE: f64 = 1024.0;

/// Attachment tagged with its parent post's schedule date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedFile<'a> {
    pub file: &'a PostFile,
    pub post_date: DateTime<FixedOffset>,
}

/// Files scheduled on one day. `date_key` is `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup<'a> {
    pub date_key: String,
    pub files: Vec<DatedFile<'a>>,
}

/// Groups every post attachment by day, newest day first. Files inside a
/// group keep post order, then attachment order.
pub fn files_by_day(posts: &[Post]) -> Vec<FileGroup<'_>> {
    let mut groups: BTreeMap<String, Vec<DatedFile<'_>>> = BTreeMap::new();
    for post in posts {
        for file in &post.files {
            groups
                .entry(post.day().format("%Y-%m-%d").to_string())
                .or_default()
                .push(DatedFile {
                    file,
                    post_date: post.date,
                });
        }
    }

    groups
        .into_iter()
        .rev()
        .map(|(date_key, files)| FileGroup { date_key, files })
        .collect()
}

/// Human-readable size with base-1024 units and trailing zeros trimmed,
/// e.g. `204800` -> `200 KB`, `1536` -> `1.5 KB`.
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= BYTE_BASE && unit < BYTE_UNITS.len() - 1 {
        value /= BYTE_BASE;
        unit += 1;
    }

    let fixed = format!("{value:.decimals$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    format!("{trimmed} {}", BYTE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::format_bytes;

    #[test]
    fn format_bytes_matches_panel_labels() {
        assert_eq!(format_bytes(0, 2), "0 Bytes");
        assert_eq!(format_bytes(512, 2), "512 Bytes");
        assert_eq!(format_bytes(1536, 2), "1.5 KB");
        assert_eq!(format_bytes(204_800, 2), "200 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024, 2), "5 MB");
        assert_eq!(format_bytes(1_234_567, 1), "1.2 MB");
    }
}
