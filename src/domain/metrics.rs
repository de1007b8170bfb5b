//! Derived aggregates. Always computed from the collections, never stored.

use serde::Serialize;

use super::feed::{
    Alert, Camera, CameraStatus, Feed, Hazard, HazardKind, HazardStatus, RiskSnapshot, Severity,
};

/// Hazards that are not resolved
pub fn active_hazard_count(hazards: &[Hazard]) -> usize {
    hazards.iter().filter(|h| h.is_active()).count()
}

/// Critical alerts nobody has acknowledged yet
pub fn critical_unacknowledged_count(alerts: &[Alert]) -> usize {
    alerts
        .iter()
        .filter(|a| a.severity == Severity::Critical && !a.acknowledged)
        .count()
}

pub fn online_camera_count(cameras: &[Camera]) -> usize {
    camera_status_count(cameras, CameraStatus::Online)
}

pub fn camera_status_count(cameras: &[Camera], status: CameraStatus) -> usize {
    cameras.iter().filter(|c| c.status == status).count()
}

pub fn hazard_kind_count(hazards: &[Hazard], kind: HazardKind) -> usize {
    hazards.iter().filter(|h| h.kind == kind).count()
}

pub fn hazard_severity_count(hazards: &[Hazard], severity: Severity) -> usize {
    hazards.iter().filter(|h| h.severity == severity).count()
}

pub fn hazard_status_count(hazards: &[Hazard], status: HazardStatus) -> usize {
    hazards.iter().filter(|h| h.status == status).count()
}

/// Active hazards in the feed that name this camera.
///
/// Independent of `Camera::hazards`, which is the count the camera reported.
pub fn linked_active_hazards(hazards: &[Hazard], camera_id: &str) -> usize {
    hazards
        .iter()
        .filter(|h| h.is_active() && h.camera.eq_ignore_ascii_case(camera_id))
        .count()
}

/// Snapshot of the headline figures, used by `summary` and JSON export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub active_hazards: usize,
    pub total_hazards: usize,
    pub critical_unacknowledged: usize,
    pub online_cameras: usize,
    pub total_cameras: usize,
    pub risk: RiskSnapshot,
}

impl Summary {
    pub fn from_feed(feed: &Feed) -> Self {
        Self {
            active_hazards: active_hazard_count(&feed.hazards),
            total_hazards: feed.hazards.len(),
            critical_unacknowledged: critical_unacknowledged_count(&feed.alerts),
            online_cameras: online_camera_count(&feed.cameras),
            total_cameras: feed.cameras.len(),
            risk: feed.risk_now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_headline_counts() {
        let feed = Feed::sample();
        assert_eq!(active_hazard_count(&feed.hazards), 6);
        assert_eq!(critical_unacknowledged_count(&feed.alerts), 1);
        assert_eq!(online_camera_count(&feed.cameras), 5);
    }

    #[test]
    fn test_counts_on_empty_collections() {
        assert_eq!(active_hazard_count(&[]), 0);
        assert_eq!(critical_unacknowledged_count(&[]), 0);
        assert_eq!(online_camera_count(&[]), 0);
    }

    #[test]
    fn test_bucket_counts_partition_the_feed() {
        let feed = Feed::sample();
        let by_kind: usize = HazardKind::ALL
            .iter()
            .map(|k| hazard_kind_count(&feed.hazards, *k))
            .sum();
        let by_severity: usize = Severity::ALL
            .iter()
            .map(|s| hazard_severity_count(&feed.hazards, *s))
            .sum();
        let by_status: usize = HazardStatus::ALL
            .iter()
            .map(|s| hazard_status_count(&feed.hazards, *s))
            .sum();
        let by_camera: usize = CameraStatus::ALL
            .iter()
            .map(|s| camera_status_count(&feed.cameras, *s))
            .sum();
        assert_eq!(by_kind, feed.hazards.len());
        assert_eq!(by_severity, feed.hazards.len());
        assert_eq!(by_status, feed.hazards.len());
        assert_eq!(by_camera, feed.cameras.len());
        assert_eq!(hazard_kind_count(&feed.hazards, HazardKind::Bird), 3);
        assert_eq!(camera_status_count(&feed.cameras, CameraStatus::Offline), 0);
        assert_eq!(camera_status_count(&feed.cameras, CameraStatus::Maintenance), 1);
    }

    #[test]
    fn test_linked_count_can_disagree_with_reported() {
        let feed = Feed::sample();
        // CAM-004 reports 3, but only HZ-006 is still active there
        let cam = feed.camera("CAM-004").unwrap();
        assert_eq!(cam.hazards, 3);
        assert_eq!(linked_active_hazards(&feed.hazards, "CAM-004"), 1);
    }

    #[test]
    fn test_summary_from_sample() {
        let summary = Summary::from_feed(&Feed::sample());
        assert_eq!(summary.active_hazards, 6);
        assert_eq!(summary.total_hazards, 7);
        assert_eq!(summary.critical_unacknowledged, 1);
        assert_eq!(summary.online_cameras, 5);
        assert_eq!(summary.total_cameras, 6);
        assert_eq!(summary.risk.score, 72);
    }
}
