//! Wall-clock access for "today" and local-time conversion.
//!
//! The projector never reads the system clock directly; it asks a `Clock`
//! on every call so results follow day boundaries and tests can pin time.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, Utc};

/// Source of the current local date and of the local time zone.
pub trait Clock {
    /// Current calendar date in local time.
    fn today(&self) -> NaiveDate;

    /// Converts an instant carrying its own offset into local wall time.
    fn to_local(&self, instant: &DateTime<FixedOffset>) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }

    fn to_local(&self, instant: &DateTime<FixedOffset>) -> NaiveDateTime {
        (**self).to_local(instant)
    }
}

/// Clock backed by the process time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn to_local(&self, instant: &DateTime<FixedOffset>) -> NaiveDateTime {
        instant.with_timezone(&Local).naive_local()
    }
}

/// Clock pinned to one date and one UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(today: NaiveDate, offset: FixedOffset) -> Self {
        Self { today, offset }
    }

    /// Fixed clock whose local zone is UTC.
    pub fn utc(today: NaiveDate) -> Self {
        Self::new(today, Utc.fix())
    }

    /// Moves the pinned date, keeping the offset.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn to_local(&self, instant: &DateTime<FixedOffset>) -> NaiveDateTime {
        instant.with_timezone(&self.offset).naive_local()
    }
}
