//! Month grid projection and per-day lesson lookup.
//!
//! # Responsibility
//! - Turn `(year, month, lessons)` into an ordered list of `DayCell`s.
//! - Answer "which lessons happen on day N" for detail views.
//!
//! # Invariants
//! - Leading padding equals the weekday of day 1 (Sunday = 0).
//! - No trailing padding is emitted.
//! - Each parseable lesson lands in exactly one cell, by local start date.
//! - Lessons within a day are ordered by start time with a stable sort.
//! - `is_today` is recomputed from the clock on every call.

use crate::calendar::clock::{Clock, SystemClock};
use crate::calendar::timestamp::parse_lesson_timestamp;
use crate::calendar::{days_in_month, first_of_month, CalendarResult, DAYS_PER_WEEK};
use crate::model::lesson::Lesson;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use log::debug;
use std::slice::Chunks;

/// One cell of a month grid.
///
/// Padding cells have no day number and no lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    /// Day of month, `None` for padding before day 1.
    pub day_number: Option<u32>,
    pub is_today: bool,
    /// Lessons starting on this day, earliest first.
    pub lessons: Vec<&'a Lesson>,
}

impl DayCell<'_> {
    fn padding() -> Self {
        Self {
            day_number: None,
            is_today: false,
            lessons: Vec::new(),
        }
    }

    pub fn is_padding(&self) -> bool {
        self.day_number.is_none()
    }

    pub fn has_lessons(&self) -> bool {
        !self.lessons.is_empty()
    }
}

/// Splits a projection into grid rows of seven cells.
///
/// Only the final row can be shorter than a full week.
pub fn weeks<'c, 'a>(cells: &'c [DayCell<'a>]) -> Chunks<'c, DayCell<'a>> {
    cells.chunks(DAYS_PER_WEEK)
}

/// Pure projector over a lesson list, parameterized by its clock.
#[derive(Debug, Clone, Default)]
pub struct MonthCalendarProjector<C = SystemClock> {
    clock: C,
}

impl MonthCalendarProjector<SystemClock> {
    /// Creates a projector that reads the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> MonthCalendarProjector<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Projects `lessons` onto the grid of the 0-based `month` of `year`.
    ///
    /// Returns `first_weekday` padding cells followed by one cell per day.
    ///
    /// # Errors
    /// - `InvalidMonth` when `month` is outside `0..=11`.
    /// - `YearOutOfRange` when the month cannot be represented.
    pub fn project<'a>(
        &self,
        year: i32,
        month: u32,
        lessons: &'a [Lesson],
    ) -> CalendarResult<Vec<DayCell<'a>>> {
        let first = first_of_month(year, month)?;
        let day_count = days_in_month(year, month)?;
        let leading = first.weekday().num_days_from_sunday() as usize;

        let mut buckets: Vec<Vec<(NaiveDateTime, &'a Lesson)>> =
            vec![Vec::new(); day_count as usize];
        for (start, lesson) in self.dated_lessons(lessons) {
            let date = start.date();
            if date.year() == first.year() && date.month() == first.month() {
                buckets[date.day0() as usize].push((start, lesson));
            }
        }

        let today = self.clock.today();
        let mut cells = Vec::with_capacity(leading + buckets.len());
        cells.extend((0..leading).map(|_| DayCell::padding()));
        for (day, bucket) in (1..=day_count).zip(buckets) {
            cells.push(DayCell {
                day_number: Some(day),
                is_today: first.with_day(day) == Some(today),
                lessons: sorted_by_start(bucket),
            });
        }

        debug!(
            "event=month_projected module=calendar year={} month={} cells={} lessons_in={}",
            year,
            month,
            cells.len(),
            lessons.len()
        );
        Ok(cells)
    }

    /// Returns the lessons that start on `day` of the 0-based `month`.
    ///
    /// A missing, zero or past-the-end `day` yields an empty list.
    ///
    /// # Errors
    /// - `InvalidMonth` when `month` is outside `0..=11`.
    /// - `YearOutOfRange` when the month cannot be represented.
    pub fn lessons_for_day<'a>(
        &self,
        year: i32,
        month: u32,
        day: Option<u32>,
        lessons: &'a [Lesson],
    ) -> CalendarResult<Vec<&'a Lesson>> {
        let first = first_of_month(year, month)?;
        let Some(date) = day.and_then(|day| first.with_day(day)) else {
            return Ok(Vec::new());
        };
        Ok(self.lessons_on(date, lessons))
    }

    /// Returns the lessons that start on `date`, earliest first.
    pub fn lessons_on<'a>(&self, date: NaiveDate, lessons: &'a [Lesson]) -> Vec<&'a Lesson> {
        let matches = self
            .dated_lessons(lessons)
            .filter(|(start, _)| start.date() == date)
            .collect();
        sorted_by_start(matches)
    }

    fn dated_lessons<'s, 'a>(
        &'s self,
        lessons: &'a [Lesson],
    ) -> impl Iterator<Item = (NaiveDateTime, &'a Lesson)> + 's
    where
        'a: 's,
    {
        lessons.iter().filter_map(move |lesson| {
            match parse_lesson_timestamp(&lesson.start_timestamp, &self.clock) {
                Ok(start) => Some((start, lesson)),
                Err(err) => {
                    debug!(
                        "event=lesson_skipped module=calendar lesson_id={} reason=\"{}\"",
                        lesson.id, err
                    );
                    None
                }
            }
        })
    }
}

fn sorted_by_start<'a>(mut dated: Vec<(NaiveDateTime, &'a Lesson)>) -> Vec<&'a Lesson> {
    // sort_by_key is stable, so equal starts keep input order.
    dated.sort_by_key(|(start, _)| *start);
    dated.into_iter().map(|(_, lesson)| lesson).collect()
}

#[cfg(test)]
mod tests {
    use super::{weeks, MonthCalendarProjector};
    use crate::calendar::clock::FixedClock;
    use crate::model::lesson::Lesson;
    use chrono::NaiveDate;

    fn projector_on(year: i32, month: u32, day: u32) -> MonthCalendarProjector<FixedClock> {
        MonthCalendarProjector::with_clock(FixedClock::utc(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        ))
    }

    #[test]
    fn weeks_leave_only_the_last_row_short() {
        let projector = projector_on(2025, 2, 10);
        let cells = projector.project(2025, 1, &[]).unwrap();

        let rows: Vec<_> = weeks(&cells).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[..4].iter().all(|row| row.len() == 7));
        assert_eq!(rows[4].len(), 6);
    }

    #[test]
    fn lessons_outside_the_month_are_ignored() {
        let lessons = vec![
            Lesson::new(1, "before", "2025-01-31T23:59:00"),
            Lesson::new(2, "inside", "2025-02-01T00:00:00"),
            Lesson::new(3, "after", "2025-03-01T00:00:00"),
            Lesson::new(4, "other year", "2024-02-01T08:00:00"),
        ];
        let cells = projector_on(2025, 2, 10).project(2025, 1, &lessons).unwrap();

        let placed: Vec<_> = cells
            .iter()
            .flat_map(|cell| cell.lessons.iter().map(|lesson| lesson.id))
            .collect();
        assert_eq!(placed, vec![2]);
    }

    #[test]
    fn padding_cells_are_never_today() {
        let cells = projector_on(2025, 2, 1).project(2025, 1, &[]).unwrap();
        assert!(cells[..6].iter().all(|cell| cell.is_padding() && !cell.is_today));
        assert!(cells[6].is_today);
    }
}
