//! Domain model for the scheduling dashboard.
//!
//! # Responsibility
//! - Define the records held by the entity store.
//! - Keep wire names aligned with the UI payloads (`type`, `action_type`).
//!
//! # Invariants
//! - Every record is identified by a prefixed string id unique in its collection.
//! - Posts and their files are immutable once created.

pub mod activity;
pub mod message;
pub mod notification;
pub mod post;
pub mod special_day;
pub mod toast;
pub mod user;
