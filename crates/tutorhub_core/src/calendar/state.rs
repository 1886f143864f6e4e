//! View state of the calendar screen.
//!
//! # Invariants
//! - `viewed_month` is always in `0..=11`.
//! - Navigation never clears `selected_day`; only `clear_selection` does.

use crate::calendar::clock::Clock;
use crate::calendar::{ensure_month, shift_month, CalendarResult};
use chrono::Datelike;
use log::debug;

/// Currently viewed month and optional selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    viewed_year: i32,
    viewed_month: u32,
    selected_day: Option<u32>,
}

impl CalendarState {
    /// Creates a state viewing the 0-based `month` of `year`, nothing selected.
    ///
    /// # Errors
    /// - `InvalidMonth` when `month` is outside `0..=11`.
    pub fn new(year: i32, month: u32) -> CalendarResult<Self> {
        ensure_month(month)?;
        Ok(Self {
            viewed_year: year,
            viewed_month: month,
            selected_day: None,
        })
    }

    /// Creates a state viewing the clock's current month.
    pub fn current<C: Clock + ?Sized>(clock: &C) -> Self {
        let today = clock.today();
        Self {
            viewed_year: today.year(),
            viewed_month: today.month0(),
            selected_day: None,
        }
    }

    pub fn viewed_year(&self) -> i32 {
        self.viewed_year
    }

    pub fn viewed_month(&self) -> u32 {
        self.viewed_month
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }

    pub fn previous_month(&mut self) -> CalendarResult<()> {
        self.shift(-1)
    }

    pub fn next_month(&mut self) -> CalendarResult<()> {
        self.shift(1)
    }

    /// Moves the viewed month by `delta`, keeping the current selection.
    pub fn shift(&mut self, delta: i32) -> CalendarResult<()> {
        let (year, month) = shift_month(self.viewed_year, self.viewed_month, delta)?;
        self.viewed_year = year;
        self.viewed_month = month;
        debug!(
            "event=calendar_navigate module=calendar year={} month={} selected_day={:?}",
            year, month, self.selected_day
        );
        Ok(())
    }

    pub fn select_day(&mut self, day: u32) {
        self.selected_day = Some(day);
    }

    pub fn clear_selection(&mut self) {
        self.selected_day = None;
    }
}
