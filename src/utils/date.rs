use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Parse a `YYYY-MM-DD` argument, mapping failures to a validation error.
pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s)
        .ok_or_else(|| AppError::validation(format!("invalid date '{}' (expected YYYY-MM-DD)", s)))
}

/// Parse `YYYY-MM` into (year, month).
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), DATE_FORMAT)
        .map_err(|_| AppError::validation(format!("invalid month '{}' (expected YYYY-MM)", s)))?;
    Ok((first.year(), first.month()))
}

pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last year whose timestamps still sort correctly as `YYYY-...` text.
pub const MAX_YEAR: i32 = 9999;

/// The half-open interval `[midnight(date), midnight(date + 1 day))`.
///
/// The end is `None` for the last storable day: its successor would be
/// written as `+10000-...`, which sorts before every stored timestamp.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, Option<NaiveDateTime>) {
    let next = date.succ_opt().filter(|n| n.year() <= MAX_YEAR);
    (midnight(date), next.map(midnight))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_bounds_are_half_open() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let (start, end) = day_bounds(d);
        assert_eq!(start.to_string(), "2024-02-29 00:00:00");
        assert_eq!(end.unwrap().to_string(), "2024-03-01 00:00:00");
    }

    #[test]
    fn last_storable_day_is_open_ended() {
        let d = NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31).unwrap();
        let (start, end) = day_bounds(d);
        assert_eq!(start.to_string(), "9999-12-31 00:00:00");
        assert!(end.is_none());
    }

    #[test]
    fn month_parsing_and_expansion() {
        assert_eq!(parse_month("2024-02").unwrap(), (2024, 2));
        assert!(parse_month("2024-13").is_err());
        assert_eq!(all_days_of_month(2024, 2).len(), 29);
        assert_eq!(all_days_of_month(2023, 2).len(), 28);
    }
}
