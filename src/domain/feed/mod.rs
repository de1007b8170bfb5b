//! Hazard feed: cameras, detections, alerts and chart series

pub mod sample;
mod types;

pub use types::{
    Alert, Camera, CameraStatus, Hazard, HazardKind, HazardStatus, HistorySummary,
    HourlySample, RiskSample, RiskSnapshot, Severity, Site,
};

/// Everything the dashboard renders, owned by the app for the session
#[derive(Debug, Clone, PartialEq)]
pub struct Feed {
    pub site: Site,
    pub cameras: Vec<Camera>,
    pub hazards: Vec<Hazard>,
    pub alerts: Vec<Alert>,
    pub hourly: Vec<HourlySample>,
    pub risk: Vec<RiskSample>,
    pub risk_now: RiskSnapshot,
    pub history: HistorySummary,
}

impl Feed {
    pub fn sample() -> Self {
        sample::feed()
    }

    pub fn camera(&self, id: &str) -> Option<&Camera> {
        self.cameras.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }

    pub fn hazard(&self, id: &str) -> Option<&Hazard> {
        self.hazards.iter().find(|h| h.id.eq_ignore_ascii_case(id))
    }

    pub fn hazard_mut(&mut self, id: &str) -> Option<&mut Hazard> {
        self.hazards.iter_mut().find(|h| h.id.eq_ignore_ascii_case(id))
    }

    pub fn alert_mut(&mut self, id: &str) -> Option<&mut Alert> {
        self.alerts.iter_mut().find(|a| a.id.eq_ignore_ascii_case(id))
    }
}
