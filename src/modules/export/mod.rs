//! Export Module
//!
//! `:export csv` writes the hazard list as currently filtered.
//! `:export json` writes a snapshot of the whole feed with the derived summary.
//! Files land in `<data dir>/exports/`.

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::App;
use crate::core::{Action, NotifyLevel};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown export format '{0}' (use csv or json)")]
    Format(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn parse(value: Option<&str>) -> Result<Self, ExportError> {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("csv") => Ok(ExportFormat::Csv),
            Some("json") => Ok(ExportFormat::Json),
            Some(other) => Err(ExportError::Format(other.to_string())),
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "hazards",
            ExportFormat::Json => "snapshot",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// Write the export into `dir`, creating it if needed. Returns the file and row count.
pub fn export_to(
    dir: &Path,
    format: ExportFormat,
    app: &App,
) -> Result<(PathBuf, usize), ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(generate_filename(format.prefix(), format.extension()));

    let count = match format {
        ExportFormat::Csv => csv_export::write_hazards(&path, &app.visible_hazards())?,
        ExportFormat::Json => json_export::write_snapshot(&path, app)?,
    };
    log::info!("exported {} rows to {}", count, path.display());
    Ok((path, count))
}

/// Run `:export` and turn the outcome into a notification
pub fn export(app: &App, format: Option<&str>) -> Action {
    let format = match ExportFormat::parse(format) {
        Ok(format) => format,
        Err(e) => return Action::Notify(e.to_string(), NotifyLevel::Warn),
    };
    if format == ExportFormat::Csv && app.visible_hazards().is_empty() {
        return Action::Notify("No hazards to export".to_string(), NotifyLevel::Warn);
    }

    match export_to(&app.export_dir, format, app) {
        Ok((path, count)) => Action::Notify(
            format!("Exported {} rows to {}", count, path.display()),
            NotifyLevel::Info,
        ),
        Err(e) => {
            log::error!("export failed: {e}");
            Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error)
        }
    }
}
