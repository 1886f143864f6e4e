use chrono::NaiveDate;
use tutorhub_core::{shift_month, CalendarError, CalendarState, FixedClock};

#[test]
fn shift_month_rolls_year_boundaries() {
    assert_eq!(shift_month(2025, 0, -1).unwrap(), (2024, 11));
    assert_eq!(shift_month(2025, 11, 1).unwrap(), (2026, 0));
    assert_eq!(shift_month(2025, 5, 12).unwrap(), (2026, 5));
    assert_eq!(shift_month(2025, 5, 0).unwrap(), (2025, 5));
    assert_eq!(shift_month(2025, 0, -13).unwrap(), (2023, 11));
    assert_eq!(shift_month(2025, 3, -27).unwrap(), (2023, 0));
    assert_eq!(shift_month(0, 0, -1).unwrap(), (-1, 11));
}

#[test]
fn repeated_single_steps_match_one_large_shift() {
    let mut position = (2025, 7);
    for _ in 0..30 {
        position = shift_month(position.0, position.1, -1).unwrap();
    }
    assert_eq!(position, shift_month(2025, 7, -30).unwrap());

    for _ in 0..30 {
        position = shift_month(position.0, position.1, 1).unwrap();
    }
    assert_eq!(position, (2025, 7));
}

#[test]
fn state_navigation_keeps_selection_until_cleared() {
    let mut state = CalendarState::new(2025, 11).unwrap();
    state.select_day(31);

    state.next_month().unwrap();
    assert_eq!((state.viewed_year(), state.viewed_month()), (2026, 0));
    assert_eq!(state.selected_day(), Some(31));

    state.previous_month().unwrap();
    state.previous_month().unwrap();
    assert_eq!((state.viewed_year(), state.viewed_month()), (2025, 10));
    assert_eq!(state.selected_day(), Some(31));

    state.shift(-24).unwrap();
    assert_eq!((state.viewed_year(), state.viewed_month()), (2023, 10));

    state.clear_selection();
    assert_eq!(state.selected_day(), None);
}

#[test]
fn state_rejects_invalid_month_and_opens_on_clock_month() {
    assert_eq!(
        CalendarState::new(2025, 12),
        Err(CalendarError::InvalidMonth(12))
    );

    let clock = FixedClock::utc(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
    let state = CalendarState::current(&clock);
    assert_eq!((state.viewed_year(), state.viewed_month()), (2025, 1));
    assert_eq!(state.selected_day(), None);
}
