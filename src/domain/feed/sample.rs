//! Built-in sample data set shown by the dashboard

use super::types::{
    Alert, Camera, CameraStatus, Hazard, HazardKind, HazardStatus, HistorySummary, HourlySample,
    RiskSample, RiskSnapshot, Severity, Site,
};
use super::Feed;

const CAMERAS: [(&str, &str, &str, CameraStatus, u32, &str); 6] = [
    ("CAM-001", "Runway 27L Threshold", "North Apron", CameraStatus::Online, 2, "2 min ago"),
    ("CAM-002", "Runway 09R Approach", "East Perimeter", CameraStatus::Online, 0, "1 min ago"),
    ("CAM-003", "Taxiway Alpha", "Taxiway A", CameraStatus::Online, 1, "5 min ago"),
    ("CAM-004", "Cargo Apron", "South Cargo", CameraStatus::Online, 3, "3 min ago"),
    ("CAM-005", "Runway 27R Threshold", "South Apron", CameraStatus::Maintenance, 0, "1 hour ago"),
    ("CAM-006", "Terminal Gate A1", "Terminal A", CameraStatus::Online, 1, "4 min ago"),
];

#[allow(clippy::type_complexity)]
const HAZARDS: [(&str, HazardKind, u8, &str, &str, &str, Severity, HazardStatus); 7] = [
    ("HZ-001", HazardKind::Bird, 94, "Runway 27L - 500ft AGL", "CAM-001", "10:23:45", Severity::High, HazardStatus::Tracking),
    ("HZ-002", HazardKind::Drone, 87, "North Apron - 200ft AGL", "CAM-001", "10:21:12", Severity::Critical, HazardStatus::Detected),
    ("HZ-003", HazardKind::Debris, 76, "Taxiway Alpha - Gate A3", "CAM-003", "10:18:33", Severity::Medium, HazardStatus::Tracking),
    ("HZ-004", HazardKind::Bird, 91, "Cargo Apron - Ground Level", "CAM-004", "10:15:22", Severity::Low, HazardStatus::Resolved),
    ("HZ-005", HazardKind::Vehicle, 98, "Terminal A - Gate A1", "CAM-006", "10:12:45", Severity::Medium, HazardStatus::Tracking),
    ("HZ-006", HazardKind::Bird, 88, "Cargo Apron - 300ft AGL", "CAM-004", "10:08:11", Severity::High, HazardStatus::Detected),
    ("HZ-007", HazardKind::Drone, 92, "North Apron - 150ft AGL", "CAM-001", "10:05:33", Severity::Critical, HazardStatus::Tracking),
];

const ALERTS: [(&str, &str, &str, Severity, &str, bool); 4] = [
    (
        "ALT-001",
        "Critical: Drone Detected",
        "Unauthorized drone detected in restricted airspace near Runway 27L",
        Severity::Critical,
        "10:23:45",
        false,
    ),
    (
        "ALT-002",
        "High: Bird Activity",
        "Flock of birds detected at 500ft approaching approach path",
        Severity::High,
        "10:21:12",
        false,
    ),
    (
        "ALT-003",
        "Medium: Foreign Object",
        "Possible debris detected on Taxiway Alpha",
        Severity::Medium,
        "10:18:33",
        true,
    ),
    (
        "ALT-004",
        "Low: Vehicle Movement",
        "Unidentified vehicle detected in terminal area",
        Severity::Low,
        "10:12:45",
        true,
    ),
];

const HOURLY: [(&str, u32, u32, u32); 12] = [
    ("06:00", 12, 2, 3),
    ("07:00", 18, 4, 5),
    ("08:00", 25, 3, 4),
    ("09:00", 22, 5, 6),
    ("10:00", 28, 7, 4),
    ("11:00", 19, 4, 3),
    ("12:00", 15, 2, 2),
    ("13:00", 21, 3, 4),
    ("14:00", 24, 6, 5),
    ("15:00", 20, 4, 3),
    ("16:00", 16, 3, 2),
    ("17:00", 14, 2, 1),
];

const RISK: [(&str, u8); 7] = [
    ("00:00", 25),
    ("04:00", 20),
    ("08:00", 65),
    ("12:00", 55),
    ("16:00", 70),
    ("20:00", 45),
    ("23:59", 30),
];

pub const DEFAULT_AIRPORT_CODE: &str = "KJFK";
pub const DEFAULT_AIRPORT_NAME: &str = "John F. Kennedy International";

pub fn cameras() -> Vec<Camera> {
    CAMERAS
        .iter()
        .map(|(id, name, location, status, hazards, last_update)| Camera {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            status: *status,
            hazards: *hazards,
            last_update: last_update.to_string(),
        })
        .collect()
}

pub fn hazards() -> Vec<Hazard> {
    HAZARDS
        .iter()
        .map(
            |(id, kind, confidence, location, camera, timestamp, severity, status)| Hazard {
                id: id.to_string(),
                kind: *kind,
                confidence: *confidence,
                location: location.to_string(),
                camera: camera.to_string(),
                timestamp: timestamp.to_string(),
                severity: *severity,
                status: *status,
            },
        )
        .collect()
}

pub fn alerts() -> Vec<Alert> {
    ALERTS
        .iter()
        .map(|(id, title, message, severity, timestamp, acknowledged)| Alert {
            id: id.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            severity: *severity,
            timestamp: timestamp.to_string(),
            acknowledged: *acknowledged,
        })
        .collect()
}

pub fn hourly() -> Vec<HourlySample> {
    HOURLY
        .iter()
        .map(|(hour, birds, drones, debris)| HourlySample {
            hour: hour.to_string(),
            birds: *birds,
            drones: *drones,
            debris: *debris,
        })
        .collect()
}

pub fn risk() -> Vec<RiskSample> {
    RISK.iter()
        .map(|(time, score)| RiskSample {
            time: time.to_string(),
            score: *score,
        })
        .collect()
}

pub fn feed() -> Feed {
    Feed {
        site: Site {
            code: DEFAULT_AIRPORT_CODE.to_string(),
            name: DEFAULT_AIRPORT_NAME.to_string(),
        },
        cameras: cameras(),
        hazards: hazards(),
        alerts: alerts(),
        hourly: hourly(),
        risk: risk(),
        risk_now: RiskSnapshot {
            score: 72,
            delta_from_avg: -5,
        },
        history: HistorySummary {
            range_start: "2026-02-15".to_string(),
            range_end: "2026-02-15".to_string(),
            total_detections: 247,
            avg_confidence: 89,
            critical_events: 12,
            avg_response_minutes: 4.2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_sample_sizes() {
        let feed = feed();
        assert_eq!(feed.cameras.len(), 6);
        assert_eq!(feed.hazards.len(), 7);
        assert_eq!(feed.alerts.len(), 4);
        assert_eq!(feed.hourly.len(), 12);
        assert_eq!(feed.risk.len(), 7);
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let feed = feed();
        let hazard_ids: BTreeSet<_> = feed.hazards.iter().map(|h| h.id.as_str()).collect();
        let camera_ids: BTreeSet<_> = feed.cameras.iter().map(|c| c.id.as_str()).collect();
        let alert_ids: BTreeSet<_> = feed.alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(hazard_ids.len(), feed.hazards.len());
        assert_eq!(camera_ids.len(), feed.cameras.len());
        assert_eq!(alert_ids.len(), feed.alerts.len());
    }

    #[test]
    fn test_sample_hazards_reference_known_cameras() {
        let feed = feed();
        for hazard in &feed.hazards {
            assert!(
                feed.camera(&hazard.camera).is_some(),
                "{} points at unknown camera {}",
                hazard.id,
                hazard.camera
            );
        }
    }

    #[test]
    fn test_sample_ranges() {
        let feed = feed();
        assert!(feed.hazards.iter().all(|h| h.confidence <= 100));
        assert!(feed.risk.iter().all(|r| r.score <= 100));
        let hours: Vec<_> = feed.hourly.iter().map(|h| h.hour.as_str()).collect();
        let mut sorted = hours.clone();
        sorted.sort();
        assert_eq!(hours, sorted, "hourly series must stay chronological");
    }
}
