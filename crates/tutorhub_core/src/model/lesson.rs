//! Lesson domain model.
//!
//! # Responsibility
//! - Define one scheduled class occurrence as the calendar sees it.
//! - Resolve display defaults (subject color) in one place.
//!
//! # Invariants
//! - `start_timestamp` decides the calendar day of the lesson.
//! - A blank `subject_color` behaves the same as a missing one.

/// Backend identifier of a lesson.
pub type LessonId = i64;

/// Color used when a subject carries no color of its own.
pub const DEFAULT_SUBJECT_COLOR: &str = "#3B82F6";

/// One scheduled class occurrence.
///
/// Text fields are owned copies of the backend payload. Start and end are
/// kept unparsed so a malformed value only hides this lesson from the grid
/// instead of failing the whole feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub subject_name: String,
    /// Hex color of the subject, if the backend assigned one.
    pub subject_color: Option<String>,
    pub teacher_name: String,
    pub class_name: String,
    /// Start of the lesson as sent by the backend.
    pub start_timestamp: String,
    /// End of the lesson as sent by the backend.
    pub end_timestamp: String,
    pub room: Option<String>,
}

impl Lesson {
    /// Creates a lesson with only the fields the calendar needs.
    ///
    /// Descriptive fields start empty and optional fields start as `None`.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        start_timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            subject_name: String::new(),
            subject_color: None,
            teacher_name: String::new(),
            class_name: String::new(),
            start_timestamp: start_timestamp.into(),
            end_timestamp: String::new(),
            room: None,
        }
    }

    /// Returns the subject color, falling back to `DEFAULT_SUBJECT_COLOR`.
    pub fn display_color(&self) -> &str {
        self.subject_color
            .as_deref()
            .map(str::trim)
            .filter(|color| !color.is_empty())
            .unwrap_or(DEFAULT_SUBJECT_COLOR)
    }

    /// Returns the room when it is set and not blank.
    pub fn room(&self) -> Option<&str> {
        self.room
            .as_deref()
            .map(str::trim)
            .filter(|room| !room.is_empty())
    }
}
