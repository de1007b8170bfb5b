//! Status reports shown in the command line

use crate::config::RuntimeConfig;
use crate::core::{Action, NotifyLevel};
use crate::domain::feed::{Feed, Severity};
use crate::domain::Summary;
use crate::ui::widgets::sparkline_text;

/// Result of a report
pub struct OpsResult {
    pub title: String,
    pub items: Vec<OpsItem>,
}

pub struct OpsItem {
    pub label: String,
    pub value: String,
    pub status: OpsStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpsStatus {
    Ok,
    Warning,
    Error,
    Unknown,
}

impl OpsResult {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn add(
        mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        status: OpsStatus,
    ) -> Self {
        self.items.push(OpsItem {
            label: label.into(),
            value: value.into(),
            status,
        });
        self
    }

    /// Worst item status decides the notification level
    fn level(&self) -> NotifyLevel {
        if self.items.iter().any(|i| i.status == OpsStatus::Error) {
            NotifyLevel::Error
        } else if self.items.iter().any(|i| i.status == OpsStatus::Warning) {
            NotifyLevel::Warn
        } else {
            NotifyLevel::Info
        }
    }

    pub fn into_action(self) -> Action {
        let level = self.level();
        let msg = self
            .items
            .iter()
            .map(|item| {
                let icon = match item.status {
                    OpsStatus::Ok => "●",
                    OpsStatus::Warning => "◐",
                    OpsStatus::Error => "○",
                    OpsStatus::Unknown => "?",
                };
                format!("{} {}: {}", icon, item.label, item.value)
            })
            .collect::<Vec<_>>()
            .join(" | ");
        Action::Notify(format!("{} - {}", self.title, msg), level)
    }
}

fn risk_status(score: u8) -> OpsStatus {
    match score {
        0..=39 => OpsStatus::Ok,
        40..=74 => OpsStatus::Warning,
        _ => OpsStatus::Error,
    }
}

/// One-line situation summary for `:summary`
pub fn summary(feed: &Feed) -> Action {
    let summary = Summary::from_feed(feed);

    let critical_status = if summary.critical_unacknowledged > 0 {
        OpsStatus::Error
    } else {
        OpsStatus::Ok
    };
    let camera_status = if summary.online_cameras == summary.total_cameras {
        OpsStatus::Ok
    } else {
        OpsStatus::Warning
    };
    let hazard_status = if summary.active_hazards == 0 {
        OpsStatus::Ok
    } else if feed
        .hazards
        .iter()
        .any(|h| h.is_active() && h.severity == Severity::Critical)
    {
        OpsStatus::Error
    } else {
        OpsStatus::Warning
    };

    let trend: Vec<u64> = feed.risk.iter().map(|s| u64::from(s.score)).collect();

    OpsResult::new("Summary")
        .add(
            "hazards",
            format!("{}/{} active", summary.active_hazards, summary.total_hazards),
            hazard_status,
        )
        .add(
            "critical",
            summary.critical_unacknowledged.to_string(),
            critical_status,
        )
        .add(
            "cameras",
            format!("{}/{} online", summary.online_cameras, summary.total_cameras),
            camera_status,
        )
        .add(
            "risk",
            format!(
                "{}/100 {}",
                summary.risk.score,
                sparkline_text(&trend, trend.len())
            ),
            risk_status(summary.risk.score),
        )
        .into_action()
}

/// Where the API url came from, for `:config`
pub fn config_report(config: &RuntimeConfig) -> Action {
    OpsResult::new("Config")
        .add("api", config.api_url.clone(), OpsStatus::Ok)
        .add("source", config.source.title(), OpsStatus::Unknown)
        .into_action()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_reports_critical_as_error() {
        let Action::Notify(msg, level) = summary(&Feed::sample()) else {
            panic!("expected notify");
        };
        assert_eq!(level, NotifyLevel::Error);
        assert!(msg.starts_with("Summary - "));
        assert!(msg.contains("hazards: 6/7 active"));
        assert!(msg.contains("critical: 1"));
        assert!(msg.contains("cameras: 5/6 online"));
        assert!(msg.contains("risk: 72/100"));
    }

    #[test]
    fn test_summary_all_clear() {
        let mut feed = Feed::sample();
        for alert in &mut feed.alerts {
            alert.acknowledged = true;
        }
        for hazard in &mut feed.hazards {
            hazard.status = crate::domain::feed::HazardStatus::Resolved;
        }
        let Action::Notify(msg, level) = summary(&feed) else {
            panic!("expected notify");
        };
        assert!(msg.contains("hazards: 0/7 active"));
        // the maintenance camera and the risk score still warn
        assert_eq!(level, NotifyLevel::Warn);
    }

    #[test]
    fn test_config_report() {
        let Action::Notify(msg, level) = config_report(&RuntimeConfig::default()) else {
            panic!("expected notify");
        };
        assert_eq!(level, NotifyLevel::Info);
        assert_eq!(
            msg,
            "Config - ● api: http://localhost:3000 | ? source: default"
        );
    }
}
