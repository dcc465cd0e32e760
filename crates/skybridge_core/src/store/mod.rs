//! In-memory entity store.
//!
//! # Responsibility
//! - Hold the six dashboard collections for one signed-in session.
//! - Issue collision-free, timestamp-derived ids.
//! - Provide the mock data every session starts from.
//!
//! # Invariants
//! - Nothing here is persisted; a new session starts from the seed.
//! - Low-level writes are crate-private; callers go through `Dashboard`.

pub mod entity_store;
pub mod ids;
pub mod seed;
