use crate::errors::{AppError, AppResult};
use crate::utils::time::{TIME_FORMAT, format_timestamp};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// A single timestamped, described calendar entry.
///
/// Ordering is by `(timestamp, id)` so events sharing a minute still sort
/// deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    pub id: i64,                  // ⇔ events.id (INTEGER, AUTOINCREMENT)
    pub timestamp: NaiveDateTime, // ⇔ events.event_date (TEXT "YYYY-MM-DD HH:MM")
    pub description: String,      // ⇔ events.description (TEXT, non-empty)
}

impl Event {
    /// The calendar day this event belongs to.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format(TIME_FORMAT).to_string()
    }

    pub fn timestamp_str(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// `YYYY-MM-DD HH:MM | description`, used in audit-log rows and listings.
    pub fn long_form(&self) -> String {
        format!("{} | {}", self.timestamp_str(), self.description)
    }

    fn sort_key(&self) -> (NaiveDateTime, i64) {
        (self.timestamp, self.id)
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.description.cmp(&other.description))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.time_str(), self.description)
    }
}

/// Trim a description and reject it when nothing is left.
pub fn validate_description(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("description must not be empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(id: i64, ts: &str, desc: &str) -> Event {
        Event {
            id,
            timestamp: crate::utils::parse_timestamp(ts).unwrap(),
            description: desc.to_string(),
        }
    }

    #[test]
    fn display_matches_list_rendering() {
        assert_eq!(ev(1, "2024-05-01 09:00", "Standup").to_string(), "09:00 | Standup");
    }

    #[test]
    fn id_breaks_timestamp_ties() {
        let mut v = vec![
            ev(3, "2024-05-01 09:00", "c"),
            ev(1, "2024-05-01 10:00", "a"),
            ev(2, "2024-05-01 09:00", "b"),
        ];
        v.sort();
        let ids: Vec<i64> = v.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn blank_descriptions_are_rejected() {
        assert!(validate_description("   ").is_err());
        assert_eq!(validate_description("  Review ").unwrap(), "Review");
    }
}
