//! Lenient parsing of lesson timestamps into local wall time.
//!
//! # Invariants
//! - Offset-carrying values are converted through the caller's `Clock`.
//! - Naive values are taken as already local.
//! - Date-only values resolve to local midnight.

use crate::calendar::clock::Clock;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A lesson timestamp that cannot be placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// Blank input.
    Empty,
    /// Input matched none of the accepted layouts.
    Malformed(String),
}

impl Display for TimestampError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "unparsable lesson date: empty timestamp"),
            Self::Malformed(raw) => write!(f, "unparsable lesson date: `{raw}`"),
        }
    }
}

impl Error for TimestampError {}

/// Parses one backend timestamp into local wall time.
///
/// Accepted layouts, first match wins:
/// - RFC 3339 (`2025-02-03T14:30:00-03:00`, `...Z`, fractional seconds);
/// - naive date-time with `T` or space, seconds and fraction optional;
/// - date only (`2025-02-03`).
///
/// # Errors
/// - `Empty` for blank input.
/// - `Malformed` for anything else that does not match.
pub fn parse_lesson_timestamp<C: Clock + ?Sized>(
    raw: &str,
    clock: &C,
) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TimestampError::Empty);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(clock.to_local(&instant));
    }
    for format in OFFSET_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(trimmed, format) {
            return Ok(clock.to_local(&instant));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(local);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(TimestampError::Malformed(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_lesson_timestamp, TimestampError};
    use crate::calendar::clock::FixedClock;
    use chrono::{FixedOffset, NaiveDate};

    fn brt_clock() -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            FixedOffset::west_opt(3 * 3600).unwrap(),
        )
    }

    #[test]
    fn accepts_naive_layouts_as_local_time() {
        let clock = brt_clock();
        for raw in [
            "2025-02-03T14:30:00",
            "2025-02-03 14:30:00",
            "2025-02-03T14:30:00.250",
            "2025-02-03T14:30",
            " 2025-02-03 14:30 ",
        ] {
            let parsed = parse_lesson_timestamp(raw, &clock)
                .unwrap_or_else(|err| panic!("`{raw}` should parse: {err}"));
            assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
            assert_eq!(parsed.format("%H:%M").to_string(), "14:30");
        }
    }

    #[test]
    fn offset_values_follow_the_clock_zone() {
        let clock = brt_clock();
        let parsed = parse_lesson_timestamp("2025-02-04T01:00:00Z", &clock).unwrap();
        assert_eq!(parsed.to_string(), "2025-02-03 22:00:00");

        let parsed = parse_lesson_timestamp("2025-02-04T01:00:00-03:00", &clock).unwrap();
        assert_eq!(parsed.to_string(), "2025-02-04 01:00:00");
    }

    #[test]
    fn date_only_is_local_midnight() {
        let parsed = parse_lesson_timestamp("2025-02-03", &brt_clock()).unwrap();
        assert_eq!(parsed.to_string(), "2025-02-03 00:00:00");
    }

    #[test]
    fn rejects_blank_and_garbage() {
        let clock = brt_clock();
        assert_eq!(parse_lesson_timestamp("", &clock), Err(TimestampError::Empty));
        assert_eq!(parse_lesson_timestamp("   ", &clock), Err(TimestampError::Empty));
        assert_eq!(
            parse_lesson_timestamp("amanha", &clock),
            Err(TimestampError::Malformed("amanha".to_string()))
        );
        assert!(parse_lesson_timestamp("2025-02-30T10:00:00", &clock).is_err());
    }
}
