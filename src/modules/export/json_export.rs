//! JSON Export
//!
//! Writes a snapshot of the feed, with operator changes applied.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::ExportError;
use crate::app::App;
use crate::domain::feed::{Alert, Camera, Hazard, Site};
use crate::domain::Summary;

#[derive(Serialize)]
struct Snapshot<'a> {
    generated_at: String,
    site: &'a Site,
    api_url: &'a str,
    summary: Summary,
    hazards: &'a [Hazard],
    cameras: &'a [Camera],
    alerts: &'a [Alert],
}

/// Write the snapshot; returns the number of hazards written
pub fn write_snapshot(path: &Path, app: &App) -> Result<usize, ExportError> {
    let snapshot = Snapshot {
        generated_at: app.now.to_rfc3339(),
        site: &app.feed.site,
        api_url: &app.config.api_url,
        summary: Summary::from_feed(&app.feed),
        hazards: &app.feed.hazards,
        cameras: &app.feed.cameras,
        alerts: &app.feed.alerts,
    };

    let json = serde_json::to_string_pretty(&snapshot)?;

    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(json.as_bytes()).map_err(io_err)?;

    Ok(app.feed.hazards.len())
}
