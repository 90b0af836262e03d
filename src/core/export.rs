//! Export of every stored event as CSV or JSON.

use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::Event;
use crate::ui::messages::{info, success};
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat row written to CSV / JSON, with the canonical timestamp text.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub id: i64,
    pub timestamp: String,
    pub description: String,
}

impl From<&Event> for EventExport {
    fn from(e: &Event) -> Self {
        Self {
            id: e.id,
            timestamp: e.timestamp_str(),
            description: e.description.clone(),
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export every stored event. Existing files are only replaced with `force`.
    pub fn export(
        store: &EventStore,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        if path.exists() && !force {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("'{}' already exists (use --force to overwrite)", path.display()),
            )));
        }

        let rows: Vec<EventExport> = store.list_all()?.iter().map(EventExport::from).collect();

        info(format!(
            "Exporting {} events to {}: {}",
            rows.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        store.audit(
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} events as {}", rows.len(), format.as_str()),
        )?;

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(rows.len())
    }
}

fn export_json(rows: &[EventExport], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

/// CSV with an `id,timestamp,description` header (from serde).
fn export_csv(rows: &[EventExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    if rows.is_empty() {
        wtr.write_record(["id", "timestamp", "description"])?;
    }
    for item in rows {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}
