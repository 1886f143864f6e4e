//! Wire-level mapping for the school backend's calendar endpoint.
//!
//! # Responsibility
//! - Decode backend lesson payloads into `Lesson` records.
//! - Describe the query filters the dashboard sends with the fetch.
//!
//! # Invariants
//! - No network I/O happens here; transport belongs to the caller.

pub mod lesson_feed;

/// Backend root used by the dashboard in development.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
/// Path of the calendar lesson listing.
pub const CALENDAR_ENDPOINT: &str = "/aulas/calendario/";
