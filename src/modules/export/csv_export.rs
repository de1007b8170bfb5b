//! CSV Export
//!
//! Writes hazard rows to a CSV file.

use std::path::Path;

use super::ExportError;
use crate::domain::feed::Hazard;

/// Write hazards to CSV file
pub fn write_hazards(path: &Path, hazards: &[&Hazard]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "type",
        "confidence",
        "location",
        "camera",
        "timestamp",
        "severity",
        "status",
    ])?;

    for hazard in hazards {
        let confidence = hazard.confidence.to_string();
        wtr.write_record([
            hazard.id.as_str(),
            hazard.kind.as_str(),
            confidence.as_str(),
            hazard.location.as_str(),
            hazard.camera.as_str(),
            hazard.timestamp.as_str(),
            hazard.severity.as_str(),
            hazard.status.as_str(),
        ])?;
    }

    wtr.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(hazards.len())
}
