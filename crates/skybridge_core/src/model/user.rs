//! Team member model.
//!
//! # Responsibility
//! - Define the user record managed from the admin panel.
//! - Validate add/edit form input before it reaches the store.
//!
//! # Invariants
//! - `id` is never reused inside one store.
//! - `email` has `local@domain.tld` shape; uniqueness is enforced by the service.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150?u=";

/// Prefixed string id (`u1`, `u1718445600000`).
pub type UserId = String;

/// Permission flag read by the UI. Core does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Member,
}

/// Whether a team member is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// Returns the opposite status, used by the admin toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Team member record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub title: String,
    pub email: String,
    pub avatar_url: String,
    pub reward_points: u32,
    pub role: UserRole,
    pub status: UserStatus,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// First whitespace-separated token of the display name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(self.name.as_str())
    }

    /// Case-insensitive e-mail comparison used by login and duplicate checks.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    /// Checks the same field rules as [`NewUser::validate`].
    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_profile(&self.name, &self.title, &self.email)
    }
}

/// Input for the admin "add member" flow. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub title: String,
    pub email: String,
    pub avatar_url: String,
    pub reward_points: u32,
    pub role: UserRole,
    pub status: UserStatus,
}

impl NewUser {
    /// Builds form defaults: member role, active status, zero points and an
    /// avatar keyed by e-mail.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let email = email.into();
        Self {
            name: name.into(),
            title: title.into(),
            avatar_url: avatar_url_for(email.as_str()),
            email,
            reward_points: 0,
            role: UserRole::Member,
            status: UserStatus::Active,
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_profile(&self.name, &self.title, &self.email)
    }

    pub(crate) fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            email: self.email.trim().to_string(),
            avatar_url: self.avatar_url,
            reward_points: self.reward_points,
            role: self.role,
            status: self.status,
        }
    }
}

/// Validation failures for add/edit member forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    EmptyTitle,
    InvalidEmail(String),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be blank"),
            Self::EmptyTitle => write!(f, "title must not be blank"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
        }
    }
}

impl Error for UserValidationError {}

/// Avatar placeholder URL keyed by an arbitrary seed.
pub fn avatar_url_for(seed: &str) -> String {
    format!("{AVATAR_BASE_URL}{}", seed.trim())
}

fn validate_profile(name: &str, title: &str, email: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    if title.trim().is_empty() {
        return Err(UserValidationError::EmptyTitle);
    }
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(UserValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}
