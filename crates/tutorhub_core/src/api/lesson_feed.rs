//! Calendar lesson feed decoding and query filters.
//!
//! # Invariants
//! - Both the paginated envelope and a bare array are accepted.
//! - Null or missing text fields decode as empty, never as errors.
//! - Unset filters are omitted from query pairs.

use crate::calendar::{days_in_month, first_of_month, CalendarResult};
use crate::model::lesson::{Lesson, LessonId};
use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One lesson as serialized by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonRecord {
    pub id: LessonId,
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub materia_nome: Option<String>,
    #[serde(default)]
    pub materia_cor: Option<String>,
    #[serde(default)]
    pub professor_nome: Option<String>,
    #[serde(default)]
    pub turma_nome: Option<String>,
    #[serde(default)]
    pub data_hora_inicio: Option<String>,
    #[serde(default)]
    pub data_hora_fim: Option<String>,
    #[serde(default)]
    pub sala: Option<String>,
}

impl From<LessonRecord> for Lesson {
    fn from(value: LessonRecord) -> Self {
        Self {
            id: value.id,
            title: value.titulo.unwrap_or_default(),
            subject_name: value.materia_nome.unwrap_or_default(),
            subject_color: value.materia_cor,
            teacher_name: value.professor_nome.unwrap_or_default(),
            class_name: value.turma_nome.unwrap_or_default(),
            start_timestamp: value.data_hora_inicio.unwrap_or_default(),
            end_timestamp: value.data_hora_fim.unwrap_or_default(),
            room: value.sala,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LessonFeed {
    Paginated { results: Vec<LessonRecord> },
    Plain(Vec<LessonRecord>),
}

/// Failure to decode a lesson feed body.
#[derive(Debug)]
pub enum FeedError {
    Json(serde_json::Error),
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid lesson feed: {err}"),
        }
    }
}

impl Error for FeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Decodes a calendar response body into lessons, keeping backend order.
///
/// # Errors
/// - `Json` when the body is neither `{"results": [...]}` nor `[...]`.
pub fn parse_lesson_feed(body: &str) -> Result<Vec<Lesson>, FeedError> {
    let feed: LessonFeed = serde_json::from_str(body).map_err(|err| {
        warn!("event=lesson_feed_parse module=api status=error error={err}");
        FeedError::from(err)
    })?;
    let records = match feed {
        LessonFeed::Paginated { results } => results,
        LessonFeed::Plain(records) => records,
    };
    info!(
        "event=lesson_feed_parse module=api status=ok count={}",
        records.len()
    );
    Ok(records.into_iter().map(Lesson::from).collect())
}

/// Filters for the calendar lesson listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarQuery {
    /// Subject id (`materia`).
    pub subject: Option<String>,
    /// Class group id (`turma`).
    pub class_group: Option<String>,
    /// First day included (`data_inicio`).
    pub date_from: Option<NaiveDate>,
    /// Last day included (`data_fim`).
    pub date_to: Option<NaiveDate>,
}

impl CalendarQuery {
    /// Query spanning the whole 0-based `month` of `year`.
    pub fn for_month(year: i32, month: u32) -> CalendarResult<Self> {
        let first = first_of_month(year, month)?;
        let last = first.with_day(days_in_month(year, month)?);
        Ok(Self {
            date_from: Some(first),
            date_to: last,
            ..Self::default()
        })
    }

    /// Key/value pairs in the order the backend documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(subject) = &self.subject {
            pairs.push(("materia", subject.clone()));
        }
        if let Some(class_group) = &self.class_group {
            pairs.push(("turma", class_group.clone()));
        }
        if let Some(date_from) = self.date_from {
            pairs.push(("data_inicio", date_from.format("%Y-%m-%d").to_string()));
        }
        if let Some(date_to) = self.date_to {
            pairs.push(("data_fim", date_to.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}
