//! CLI probe for the calendar core.
//!
//! # Responsibility
//! - With no arguments, print core linkage info (ping/version).
//! - With a saved lesson feed, print the projected month grid.
//!
//! Usage: `tutorhub_cli [<feed.json> [YYYY-MM] [--day N]]`

use log::{info, warn};
use std::env;
use std::fs;
use std::process::ExitCode;
use tutorhub_core::{
    default_log_level, init_logging, parse_lesson_feed, weeks, CalendarState, Clock, DayCell,
    MonthCalendarProjector,
};

const LOG_DIR_ENV: &str = "TUTORHUB_LOG_DIR";
const LOG_LEVEL_ENV: &str = "TUTORHUB_LOG_LEVEL";
const WEEKDAY_HEADER: &str = " Dom Seg Ter Qua Qui Sex Sab";

struct Args {
    feed_path: String,
    month: Option<(i32, u32)>,
    day: Option<u32>,
}

fn main() -> ExitCode {
    init_logging_from_env();

    let raw: Vec<String> = env::args().skip(1).collect();
    if raw.is_empty() {
        println!("tutorhub_core ping={}", tutorhub_core::ping());
        println!("tutorhub_core version={}", tutorhub_core::core_version());
        return ExitCode::SUCCESS;
    }

    match parse_args(&raw).and_then(|args| run(&args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging_from_env() {
    let Ok(log_dir) = env::var(LOG_DIR_ENV) else {
        return;
    };
    let level = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut feed_path = None;
    let mut month = None;
    let mut day = None;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        if arg == "--day" {
            let value = iter.next().ok_or("--day needs a value")?;
            day = Some(
                value
                    .parse::<u32>()
                    .map_err(|err| format!("invalid day `{value}`: {err}"))?,
            );
        } else if feed_path.is_none() {
            feed_path = Some(arg.clone());
        } else if month.is_none() {
            month = Some(parse_year_month(arg)?);
        } else {
            return Err(format!("unexpected argument `{arg}`"));
        }
    }

    Ok(Args {
        feed_path: feed_path.ok_or("missing feed path")?,
        month,
        day,
    })
}

/// Parses human `YYYY-MM` into `(year, 0-based month)`.
fn parse_year_month(value: &str) -> Result<(i32, u32), String> {
    let (year, month) = value
        .split_once('-')
        .ok_or_else(|| format!("expected YYYY-MM, got `{value}`"))?;
    let year = year
        .parse::<i32>()
        .map_err(|err| format!("invalid year `{year}`: {err}"))?;
    let month = month
        .parse::<u32>()
        .map_err(|err| format!("invalid month `{month}`: {err}"))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month must be 01..12, got {month:02}"));
    }
    Ok((year, month - 1))
}

fn run(args: &Args) -> Result<(), String> {
    let body = fs::read_to_string(&args.feed_path)
        .map_err(|err| format!("cannot read `{}`: {err}", args.feed_path))?;
    let lessons = parse_lesson_feed(&body).map_err(|err| err.to_string())?;

    let projector = MonthCalendarProjector::new();
    let mut state = match args.month {
        Some((year, month)) => CalendarState::new(year, month).map_err(|err| err.to_string())?,
        None => CalendarState::current(projector.clock()),
    };
    if let Some(day) = args.day {
        state.select_day(day);
    }

    let (year, month) = (state.viewed_year(), state.viewed_month());
    let cells = projector
        .project(year, month, &lessons)
        .map_err(|err| err.to_string())?;

    println!("{year}-{:02} ({} lessons in feed)", month + 1, lessons.len());
    println!("{WEEKDAY_HEADER}");
    for week in weeks(&cells) {
        let row: String = week.iter().map(render_cell).collect();
        println!("{row}");
    }

    if let Some(day) = state.selected_day() {
        let found = projector
            .lessons_for_day(year, month, Some(day), &lessons)
            .map_err(|err| err.to_string())?;
        if found.is_empty() {
            warn!("event=cli_day_lookup module=cli status=empty day={day}");
        }
        println!();
        println!("{year}-{:02}-{day:02}: {} lesson(s)", month + 1, found.len());
        for lesson in found {
            println!(
                "  [{}] {} | {} | {} | {} | {}{}",
                lesson.display_color(),
                lesson.start_timestamp,
                lesson.title,
                lesson.subject_name,
                lesson.class_name,
                lesson.teacher_name,
                lesson
                    .room()
                    .map(|room| format!(" | {room}"))
                    .unwrap_or_default()
            );
        }
    }

    let today = projector.clock().today();
    info!("event=cli_render module=cli status=ok today={today}");
    Ok(())
}

/// Four columns per cell: day number plus `*` today / `+` has lessons.
fn render_cell(cell: &DayCell<'_>) -> String {
    match cell.day_number {
        None => "    ".to_string(),
        Some(day) => {
            let marker = if cell.is_today {
                '*'
            } else if cell.has_lessons() {
                '+'
            } else {
                ' '
            };
            format!(" {day:>2}{marker}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_args, parse_year_month};

    #[test]
    fn year_month_is_converted_to_zero_based() {
        assert_eq!(parse_year_month("2025-02").unwrap(), (2025, 1));
        assert_eq!(parse_year_month("2024-12").unwrap(), (2024, 11));
        assert!(parse_year_month("2025-13").is_err());
        assert!(parse_year_month("2025").is_err());
    }

    #[test]
    fn args_accept_day_flag_anywhere() {
        let raw: Vec<String> = ["--day", "3", "feed.json", "2025-02"]
            .iter()
            .map(|value| value.to_string())
            .collect();
        let args = parse_args(&raw).unwrap();
        assert_eq!(args.feed_path, "feed.json");
        assert_eq!(args.month, Some((2025, 1)));
        assert_eq!(args.day, Some(3));
    }
}
