// src/export/mod.rs

mod csv;
mod json;

pub use self::csv::write_csv;
pub use self::json::write_json;

use crate::core::match_log::MatchState;
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::ui::messages::success;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Flat row shape shared by the export formats.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub time: String,
    pub kind: String,
    pub reason: String,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            time: e.time_str(),
            kind: e.outcome.label().to_string(),
            reason: e.reason.to_string(),
        }
    }
}

/// Messaggio comune di fine export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, PartialEq, Eq)]
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

    pub fn parse(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(AppError::InvalidExportFormat(s.to_string())),
        }
    }
}

/// Default export filename. An unset opponent falls back to the
/// literal `opponent`, so the file is always nameable.
pub fn default_filename(opponent: &str, format: &ExportFormat) -> String {
    let name = if opponent.is_empty() { "opponent" } else { opponent };
    format!("luna_match_vs_{}.{}", name, format.as_str())
}

/// Resolve the target path: an explicit file wins, otherwise the
/// default filename inside the export directory.
pub fn resolve_target(
    export_dir: &Path,
    opponent: &str,
    format: &ExportFormat,
    file: Option<&str>,
) -> PathBuf {
    match file {
        Some(f) => PathBuf::from(f),
        None => export_dir.join(default_filename(opponent, format)),
    }
}

/// Write the current match in the requested format.
pub fn export_match(state: &MatchState, format: &ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => write_csv(path, &state.opponent, state.entries())?,
        ExportFormat::Json => write_json(path, state)?,
    }
    notify_export_success(format.as_str().to_uppercase().as_str(), path);
    Ok(())
}
