//! One-time import of the legacy date-keyed JSON planner file.
//!
//! The legacy file maps `"YYYY-MM-DD"` to a list of free-text entries. Times
//! were only kept as a leading `HH:MM` prefix on the text, so each entry is
//! split into an optional time and the remaining description.

use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// `H:MM`, `HH:MM`, `H.MM` or `HH.MM` at the start of an entry, followed by
/// whitespace, `-`, `|`, `:` or the end of the text.
static LEADING_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{1,2})[:.](\d{2})(?:\s*[-|:]\s*|\s+|$)").expect("valid leading-time regex")
});

/// An entry ready to be handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyEntry {
    pub timestamp: NaiveDateTime,
    pub description: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Split a leading time off `text`. Out-of-range times are left in the text.
pub fn split_leading_time(text: &str) -> (Option<NaiveTime>, &str) {
    if let Some(caps) = LEADING_TIME.captures(text) {
        let hour = caps[1].parse::<u32>().ok();
        let minute = caps[2].parse::<u32>().ok();
        if let (Some(h), Some(m)) = (hour, minute)
            && let Some(t) = NaiveTime::from_hms_opt(h, m, 0)
        {
            let rest = &text[caps[0].len()..];
            return (Some(t), rest.trim());
        }
    }
    (None, text.trim())
}

/// Parse the legacy JSON into entries. Bad date keys fail the whole parse;
/// entries with nothing left after the time prefix are counted as skipped.
pub fn parse_legacy(json: &str, default_time: NaiveTime) -> AppResult<(Vec<LegacyEntry>, usize)> {
    let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;

    let mut dated: Vec<(NaiveDate, Vec<String>)> = Vec::with_capacity(raw.len());
    for (key, items) in raw {
        let date = parse_date(&key).ok_or_else(|| {
            AppError::validation(format!("legacy key '{}' is not a YYYY-MM-DD date", key))
        })?;
        dated.push((date, items));
    }
    dated.sort_by_key(|(d, _)| *d);

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (date, items) in dated {
        for item in items {
            let (time, rest) = split_leading_time(&item);
            if rest.is_empty() {
                warn!("skipping empty legacy entry on {}: {:?}", date, item);
                skipped += 1;
                continue;
            }
            entries.push(LegacyEntry {
                timestamp: date.and_time(time.unwrap_or(default_time)),
                description: rest.to_string(),
            });
        }
    }

    Ok((entries, skipped))
}

/// Import legacy JSON text through `store.add_at`, so every subscriber sees
/// each addition.
pub fn import_str(store: &mut EventStore, json: &str, default_time: NaiveTime) -> AppResult<ImportReport> {
    let (entries, skipped) = parse_legacy(json, default_time)?;

    let mut report = ImportReport {
        imported: 0,
        skipped,
    };
    for entry in entries {
        store.add_at(entry.timestamp, &entry.description)?;
        report.imported += 1;
    }

    Ok(report)
}

pub fn import_file(store: &mut EventStore, path: &Path, default_time: NaiveTime) -> AppResult<ImportReport> {
    let content = fs::read_to_string(path)?;
    let report = import_str(store, &content, default_time)?;

    store.audit(
        "import",
        &path.to_string_lossy(),
        &format!(
            "Imported {} legacy entries ({} skipped)",
            report.imported, report.skipped
        ),
    )?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn leading_time_variants() {
        assert_eq!(split_leading_time("09:00 Standup"), (Some(t(9, 0)), "Standup"));
        assert_eq!(split_leading_time("9:30 - Gym"), (Some(t(9, 30)), "Gym"));
        assert_eq!(split_leading_time("14.15|Call mom"), (Some(t(14, 15)), "Call mom"));
        assert_eq!(split_leading_time("18:00: dinner"), (Some(t(18, 0)), "dinner"));
    }

    #[test]
    fn text_without_a_valid_time_is_kept_whole() {
        assert_eq!(split_leading_time("Buy milk"), (None, "Buy milk"));
        assert_eq!(split_leading_time("2024 plans"), (None, "2024 plans"));
        assert_eq!(split_leading_time("25:00 late"), (None, "25:00 late"));
        assert_eq!(split_leading_time("10:30am brunch"), (None, "10:30am brunch"));
    }

    #[test]
    fn bare_time_is_skipped() {
        let (entries, skipped) =
            parse_legacy(r#"{"2024-05-01": ["08:00", "  ", "Lunch"]}"#, t(9, 0)).unwrap();
        assert_eq!(skipped, 2);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp.to_string(), "2024-05-01 09:00:00");
    }

    #[test]
    fn bad_date_key_fails_the_whole_file() {
        let err = parse_legacy(r#"{"2024-05-01": ["a"], "May 2nd": ["b"]}"#, t(9, 0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
