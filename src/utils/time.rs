//! Time utilities: parsing HH:MM, full timestamps, minute truncation.

use crate::errors::{AppError, AppResult};
use crate::utils::date::MAX_YEAR;
use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};

/// Canonical on-disk and display format for event timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const TIME_FORMAT: &str = "%H:%M";

/// Input shapes accepted for a timestamp. Seconds, when present, are dropped.
const ACCEPTED_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), TIME_FORMAT).ok()
}

/// Parse an `HH:MM` argument, mapping failures to a validation error.
pub fn parse_time_arg(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::validation(format!("invalid time '{}' (expected HH:MM)", t)))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input.map(|s| parse_time_arg(s)).transpose()
}

/// Parse a user supplied timestamp and normalize it to minute precision.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let trimmed = s.trim();
    let parsed = ACCEPTED_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            AppError::validation(format!(
                "invalid timestamp '{}' (expected YYYY-MM-DD HH:MM)",
                s
            ))
        })?;

    normalize_timestamp(parsed)
}

/// Drop seconds and sub-seconds and reject years that do not sort
/// correctly as four-digit text.
pub fn normalize_timestamp(ts: NaiveDateTime) -> AppResult<NaiveDateTime> {
    if !(1..=MAX_YEAR).contains(&ts.year()) {
        return Err(AppError::validation(format!(
            "timestamp year {} out of range (1-{})",
            ts.year(),
            MAX_YEAR
        )));
    }
    Ok(truncate_to_minute(ts))
}

pub fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn accepts_space_and_t_separators() {
        assert_eq!(parse_timestamp("2024-05-01 09:00").unwrap(), at(2024, 5, 1, 9, 0));
        assert_eq!(parse_timestamp("2024-05-01T14:30").unwrap(), at(2024, 5, 1, 14, 30));
    }

    #[test]
    fn seconds_are_dropped() {
        assert_eq!(
            parse_timestamp("2024-05-01 09:00:59").unwrap(),
            at(2024, 5, 1, 9, 0)
        );
        assert_eq!(
            parse_timestamp("2024-05-01 09:00:00.123456").unwrap(),
            at(2024, 5, 1, 9, 0)
        );
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        for bad in [
            "",
            "tomorrow",
            "2024-02-30 10:00",
            "2024-13-01 10:00",
            "2024-05-01 24:00",
            "2024-05-01 09:60",
            "2024-05-01",
        ] {
            let err = parse_timestamp(bad).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{bad} -> {err:?}");
        }
    }

    #[test]
    fn time_argument_must_be_hh_mm() {
        assert!(parse_time_arg("7:05").is_ok());
        assert!(matches!(parse_time_arg("25:00"), Err(AppError::Validation(_))));
    }
}
