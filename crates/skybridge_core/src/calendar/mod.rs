//! Calendar projection.
//!
//! # Responsibility
//! - Compute the full-week grid for a visible month.
//! - Bucket posts by local calendar day under a client filter.
//! - Attach recurring special-day markers to grid days.
//!
//! # Invariants
//! - Grid length is always a multiple of 7 and covers the whole month.
//! - Projections are recomputed from the store snapshot on every call.

pub mod grid;
pub mod projection;
