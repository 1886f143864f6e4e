//! Core calendar logic for the tutoring-school dashboard.
//! Framework-free: every operation is callable from a plain unit test.

pub mod api;
pub mod calendar;
pub mod logging;
pub mod model;

pub use api::lesson_feed::{parse_lesson_feed, CalendarQuery, FeedError, LessonRecord};
pub use calendar::{
    days_in_month, first_weekday, shift_month, weeks, CalendarError, CalendarResult,
    CalendarState, Clock, DayCell, FixedClock, MonthCalendarProjector, SystemClock,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::lesson::{Lesson, LessonId, DEFAULT_SUBJECT_COLOR};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
