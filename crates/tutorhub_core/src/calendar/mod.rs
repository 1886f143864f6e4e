//! Month calendar projection for the lesson dashboard.
//!
//! # Responsibility
//! - Map a flat lesson list onto a Sunday-first month grid.
//! - Provide per-day lesson lookup and month navigation arithmetic.
//!
//! # Invariants
//! - Months are 0-based (`0` = January) at every public boundary.
//! - Grids carry leading padding only; the last week may be short.
//! - Lessons with unparsable start timestamps are skipped, never raised.

use chrono::{Datelike, Months, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod clock;
pub mod projector;
pub mod state;
pub mod timestamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use projector::{weeks, DayCell, MonthCalendarProjector};
pub use state::CalendarState;
pub use timestamp::{parse_lesson_timestamp, TimestampError};

/// Number of months in a year.
pub const MONTHS_PER_YEAR: u32 = 12;
/// Number of columns in a rendered month grid.
pub const DAYS_PER_WEEK: usize = 7;

pub type CalendarResult<T> = Result<T, CalendarError>;

/// Invalid-argument failures raised by calendar operations.
///
/// Callers are expected to never produce these from user navigation; they
/// signal a programming error in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    /// Month index outside `0..=11`.
    InvalidMonth(u32),
    /// Year that cannot be represented as a calendar date.
    YearOutOfRange(i64),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => {
                write!(f, "invalid argument: month must be in 0..=11, got {month}")
            }
            Self::YearOutOfRange(year) => write!(
                f,
                "invalid argument: year {year} is outside the supported calendar range"
            ),
        }
    }
}

impl Error for CalendarError {}

/// Moves `(year, month)` by `delta` months, rolling years in both directions.
///
/// ```
/// use tutorhub_core::calendar::shift_month;
///
/// assert_eq!(shift_month(2025, 0, -1).unwrap(), (2024, 11));
/// assert_eq!(shift_month(2025, 5, 12).unwrap(), (2026, 5));
/// ```
///
/// # Errors
/// - `InvalidMonth` when `month` is outside `0..=11`.
/// - `YearOutOfRange` when the result does not fit in `i32`.
pub fn shift_month(year: i32, month: u32, delta: i32) -> CalendarResult<(i32, u32)> {
    ensure_month(month)?;
    let months_per_year = i64::from(MONTHS_PER_YEAR);
    let total = i64::from(year) * months_per_year + i64::from(month) + i64::from(delta);
    let shifted_year = total.div_euclid(months_per_year);
    // rem_euclid keeps the value in 0..12.
    let shifted_month = total.rem_euclid(months_per_year) as u32;
    let shifted_year =
        i32::try_from(shifted_year).map_err(|_| CalendarError::YearOutOfRange(shifted_year))?;
    Ok((shifted_year, shifted_month))
}

/// Returns the weekday of day 1, with `0` = Sunday through `6` = Saturday.
pub fn first_weekday(year: i32, month: u32) -> CalendarResult<u32> {
    Ok(first_of_month(year, month)?
        .weekday()
        .num_days_from_sunday())
}

/// Returns the number of days in the given 0-based month.
pub fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
    let first = first_of_month(year, month)?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or(CalendarError::YearOutOfRange(i64::from(year) + 1))?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

pub(crate) fn first_of_month(year: i32, month: u32) -> CalendarResult<NaiveDate> {
    ensure_month(month)?;
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .ok_or(CalendarError::YearOutOfRange(i64::from(year)))
}

pub(crate) fn ensure_month(month: u32) -> CalendarResult<()> {
    if month >= MONTHS_PER_YEAR {
        return Err(CalendarError::InvalidMonth(month));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, first_weekday, shift_month, CalendarError};

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2025, 1).unwrap(), 28);
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);
        assert_eq!(days_in_month(2000, 1).unwrap(), 29);
        assert_eq!(days_in_month(2025, 3).unwrap(), 30);
        assert_eq!(days_in_month(2025, 11).unwrap(), 31);
    }

    #[test]
    fn first_weekday_is_sunday_based() {
        // 2025-02-01 is a Saturday, 2025-06-01 a Sunday.
        assert_eq!(first_weekday(2025, 1).unwrap(), 6);
        assert_eq!(first_weekday(2025, 5).unwrap(), 0);
    }

    #[test]
    fn month_helpers_reject_out_of_range_month() {
        assert_eq!(days_in_month(2025, 12), Err(CalendarError::InvalidMonth(12)));
        assert_eq!(first_weekday(2025, 40), Err(CalendarError::InvalidMonth(40)));
        assert_eq!(shift_month(2025, 12, 1), Err(CalendarError::InvalidMonth(12)));
    }

    #[test]
    fn shift_month_reports_year_overflow() {
        let err = shift_month(i32::MAX, 11, 1).unwrap_err();
        assert_eq!(err, CalendarError::YearOutOfRange(i64::from(i32::MAX) + 1));
    }
}
