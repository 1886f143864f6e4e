//! Read-only domain records consumed by the calendar.
//!
//! # Responsibility
//! - Define the lesson shape shared by projection, lookup and feed mapping.
//!
//! # Invariants
//! - Records are immutable once fetched; core never mutates them.
//! - Timestamps keep the backend's raw text; parsing belongs to `calendar`.

pub mod lesson;
