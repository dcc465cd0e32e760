//! Session lifecycle: login, logout and the signed-in dashboard.
//!
//! # Responsibility
//! - Match login e-mails against the team directory.
//! - Create a freshly seeded dashboard per login and drop it on logout.
//! - Keep the toast queue alive across sign-in/sign-out transitions.
//!
//! # Invariants
//! - A failed login leaves the session signed out.
//! - Passwords are accepted but never checked; there is no real auth.

use crate::clock::Clock;
use crate::config::DashboardConfig;
use crate::model::toast::{Toast, ToastLevel};
use crate::model::user::User;
use crate::service::dashboard::Dashboard;
use crate::service::toast_queue::ToastQueue;
use crate::store::seed::team_directory;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// E-mail not found in the directory.
    InvalidCredentials,
    /// A session is already active.
    AlreadySignedIn,
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "Invalid email or password."),
            Self::AlreadySignedIn => write!(f, "already signed in; log out first"),
        }
    }
}

impl Error for AuthError {}

/// Top-level application state handed to the UI layer.
pub struct App {
    clock: Arc<dyn Clock>,
    config: DashboardConfig,
    directory: Vec<User>,
    dashboard: Option<Dashboard>,
    signed_out_toasts: ToastQueue,
}

impl App {
    /// Creates a signed-out app using the seeded team directory.
    pub fn new(clock: Arc<dyn Clock>, config: DashboardConfig) -> Self {
        Self::with_directory(clock, config, team_directory())
    }

    pub fn with_directory(
        clock: Arc<dyn Clock>,
        config: DashboardConfig,
        directory: Vec<User>,
    ) -> Self {
        let signed_out_toasts = ToastQueue::new(config.toast_ttl);
        Self {
            clock,
            config,
            directory,
            dashboard: None,
            signed_out_toasts,
        }
    }

    /// Signs in by e-mail (trimmed, case-insensitive).
    ///
    /// # Errors
    /// - `InvalidCredentials` when no directory entry matches.
    /// - `AlreadySignedIn` when a session is active.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<&mut Dashboard, AuthError> {
        if self.dashboard.is_some() {
            return Err(AuthError::AlreadySignedIn);
        }
        let Some(user) = self.directory.iter().find(|user| user.has_email(email)) else {
            warn!("event=login module=session status=error reason=invalid_credentials");
            return Err(AuthError::InvalidCredentials);
        };
        let user_id = user.id.clone();
        let welcome = format!("Welcome back, {}!", user.first_name());

        let toasts = std::mem::replace(
            &mut self.signed_out_toasts,
            ToastQueue::new(self.config.toast_ttl),
        );
        let mut dashboard = Dashboard::seeded(
            user_id.clone(),
            Arc::clone(&self.clock),
            self.config.clone(),
            toasts,
        );
        dashboard.push_toast(welcome, ToastLevel::Success);

        info!("event=login module=session status=ok user_id={}", user_id);
        Ok(self.dashboard.insert(dashboard))
    }

    /// Ends the session and discards its store. Returns `false` when already
    /// signed out.
    pub fn logout(&mut self) -> bool {
        let Some(dashboard) = self.dashboard.take() else {
            return false;
        };
        let user_id = dashboard.current_user_id().to_string();
        self.signed_out_toasts = dashboard.into_toasts();
        self.signed_out_toasts.push(
            "You have been logged out.",
            ToastLevel::Info,
            self.clock.now_utc(),
        );
        info!("event=logout module=session status=ok user_id={}", user_id);
        true
    }

    pub fn is_signed_in(&self) -> bool {
        self.dashboard.is_some()
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        self.dashboard.as_mut()
    }

    /// Signed-in user, if any and still present in the store.
    pub fn current_user(&self) -> Option<&User> {
        self.dashboard.as_ref().and_then(Dashboard::current_user)
    }

    pub fn directory(&self) -> &[User] {
        &self.directory
    }

    /// Active toasts for whichever state currently owns the queue.
    pub fn active_toasts(&self) -> Vec<&Toast> {
        match &self.dashboard {
            Some(dashboard) => dashboard.active_toasts(),
            None => self.signed_out_toasts.active(self.clock.now_utc()),
        }
    }

    /// Drops expired toasts from whichever state owns the queue.
    pub fn prune_toasts(&mut self) -> usize {
        match &mut self.dashboard {
            Some(dashboard) => dashboard.prune_toasts(),
            None => self.signed_out_toasts.prune(self.clock.now_utc()),
        }
    }
}
