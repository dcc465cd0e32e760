//! Sidebar and panel derivations.
//!
//! # Responsibility
//! - Derive upcoming special days, recent activity and unread counts.
//! - Flatten post attachments into the date-grouped file manager listing.
//!
//! # Invariants
//! - Every derivation is a pure function over a store snapshot.

pub mod files;
pub mod highlights;
