//! Core use-case services.
//!
//! # Responsibility
//! - Route UI events into store mutations and their side-effect records.
//! - Own the explicit session/dashboard state handed to the UI layer.
//!
//! # Invariants
//! - Every mutation runs synchronously on `&mut self`; no ambient state.

pub mod dashboard;
pub mod session;
pub mod toast_queue;
