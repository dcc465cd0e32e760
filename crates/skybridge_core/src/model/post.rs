//! Scheduled post and attachment model.
//!
//! # Responsibility
//! - Define posts, their attached files, and the schedule-post input.
//! - Provide the client filter used by the calendar toolbar.
//!
//! # Invariants
//! - `PostFile::post_id` always equals the owning `Post::id`.
//! - `Post::date` keeps its own UTC offset; day bucketing uses that offset.

use crate::model::user::UserId;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PostId = String;
pub type PostFileId = String;

const IMAGE_MIME_PREFIX: &str = "image/";

/// Social network a post is published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    Twitter,
    Facebook,
    LinkedIn,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::Facebook,
        Platform::LinkedIn,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// Agency customer account a post is scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Client {
    #[serde(rename = "H&S")]
    Hs,
    #[serde(rename = "DECA")]
    Deca,
    #[serde(rename = "DPS")]
    Dps,
}

impl Client {
    pub const ALL: [Client; 3] = [Client::Hs, Client::Deca, Client::Dps];

    pub fn label(self) -> &'static str {
        match self {
            Self::Hs => "H&S",
            Self::Deca => "DECA",
            Self::Dps => "DPS",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|client| client.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl Display for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Calendar toolbar filter. `All` is the identity filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientFilter {
    #[default]
    All,
    Only(Client),
}

impl ClientFilter {
    pub fn matches(self, client: Client) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == client,
        }
    }

    /// Parses toolbar labels: `All` or one of the client labels.
    pub fn from_label(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Client::from_label(value).map(Self::Only)
    }
}

/// File attached to a post. `file_url` is a transient local reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFile {
    pub id: PostFileId,
    pub post_id: PostId,
    pub file_name: String,
    pub file_type: String,
    pub file_url: String,
    pub file_size: u64,
    pub preview_url: Option<String>,
}

impl PostFile {
    pub fn is_image(&self) -> bool {
        is_image_mime(&self.file_type)
    }
}

/// Scheduled social-media post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub date: DateTime<FixedOffset>,
    pub content: String,
    pub platform: Platform,
    pub client: Client,
    pub user_id: UserId,
    pub files: Vec<PostFile>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Calendar day of `date` in the post's own offset.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Local file handle picked in the upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }
}

/// Input for the schedule-post flow. Ids, owner and timestamps are assigned
/// by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub date: DateTime<FixedOffset>,
    pub content: String,
    pub platform: Platform,
    pub client: Client,
    pub files: Vec<FileUpload>,
}

impl PostDraft {
    pub fn validate(&self) -> Result<(), PostValidationError> {
        if self.content.trim().is_empty() {
            return Err(PostValidationError::EmptyContent);
        }
        Ok(())
    }
}

/// Validation failures for the schedule-post form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostValidationError {
    EmptyContent,
}

impl Display for PostValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "post content must not be blank"),
        }
    }
}

impl Error for PostValidationError {}

fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with(IMAGE_MIME_PREFIX)
}
