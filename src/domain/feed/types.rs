use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    Bird,
    Drone,
    Debris,
    Vehicle,
}

impl HazardKind {
    pub const ALL: [HazardKind; 4] = [
        HazardKind::Bird,
        HazardKind::Drone,
        HazardKind::Debris,
        HazardKind::Vehicle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HazardKind::Bird => "bird",
            HazardKind::Drone => "drone",
            HazardKind::Debris => "debris",
            HazardKind::Vehicle => "vehicle",
        }
    }

    /// Plural label used by the type select ("Birds", "Drones", ...)
    pub fn plural_title(&self) -> &'static str {
        match self {
            HazardKind::Bird => "Birds",
            HazardKind::Drone => "Drones",
            HazardKind::Debris => "Debris",
            HazardKind::Vehicle => "Vehicles",
        }
    }

    /// Single-cell glyph standing in for the type icon
    pub fn glyph(&self) -> char {
        match self {
            HazardKind::Bird => 'B',
            HazardKind::Drone => 'D',
            HazardKind::Debris => 'F',
            HazardKind::Vehicle => 'V',
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "bird" | "birds" => Some(HazardKind::Bird),
            "drone" | "drones" | "uav" => Some(HazardKind::Drone),
            "debris" | "fod" => Some(HazardKind::Debris),
            "vehicle" | "vehicles" => Some(HazardKind::Vehicle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Order used by the severity select: most severe first
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" | "med" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" | "crit" => Some(Severity::Critical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardStatus {
    Detected,
    Tracking,
    Resolved,
}

impl HazardStatus {
    pub const ALL: [HazardStatus; 3] = [
        HazardStatus::Detected,
        HazardStatus::Tracking,
        HazardStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HazardStatus::Detected => "detected",
            HazardStatus::Tracking => "tracking",
            HazardStatus::Resolved => "resolved",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            HazardStatus::Detected => "Detected",
            HazardStatus::Tracking => "Tracking",
            HazardStatus::Resolved => "Resolved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "detected" | "detect" | "new" => Some(HazardStatus::Detected),
            "tracking" | "track" => Some(HazardStatus::Tracking),
            "resolved" | "resolve" | "done" => Some(HazardStatus::Resolved),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Online,
    Offline,
    Maintenance,
}

impl CameraStatus {
    pub const ALL: [CameraStatus; 3] = [
        CameraStatus::Online,
        CameraStatus::Offline,
        CameraStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraStatus::Online => "online",
            CameraStatus::Offline => "offline",
            CameraStatus::Maintenance => "maintenance",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CameraStatus::Online => "Online",
            CameraStatus::Offline => "Offline",
            CameraStatus::Maintenance => "Maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "online" | "on" | "up" => Some(CameraStatus::Online),
            "offline" | "off" | "down" => Some(CameraStatus::Offline),
            "maintenance" | "maint" => Some(CameraStatus::Maintenance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HazardKind,
    /// Detector confidence in percent, 0..=100
    pub confidence: u8,
    pub location: String,
    /// Id of the camera that reported the detection
    pub camera: String,
    pub timestamp: String,
    pub severity: Severity,
    pub status: HazardStatus,
}

impl Hazard {
    pub fn is_active(&self) -> bool {
        self.status != HazardStatus::Resolved
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: CameraStatus,
    /// Hazard count as reported by the camera feed. Not derived from the hazard list.
    pub hazards: u32,
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: String,
    pub acknowledged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlySample {
    pub hour: String,
    pub birds: u32,
    pub drones: u32,
    pub debris: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSample {
    pub time: String,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSnapshot {
    pub score: u8,
    pub delta_from_avg: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub range_start: String,
    pub range_end: String,
    pub total_detections: u32,
    pub avg_confidence: u8,
    pub critical_events: u32,
    pub avg_response_minutes: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub code: String,
    pub name: String,
}

impl Site {
    pub fn display(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_parse_aliases() {
        assert_eq!(HazardKind::parse("Birds"), Some(HazardKind::Bird));
        assert_eq!(HazardKind::parse("uav"), Some(HazardKind::Drone));
        assert_eq!(Severity::parse("CRIT"), Some(Severity::Critical));
        assert_eq!(HazardStatus::parse("track"), Some(HazardStatus::Tracking));
        assert_eq!(CameraStatus::parse("maint"), Some(CameraStatus::Maintenance));
        assert_eq!(CameraStatus::parse("rebooting"), None);
    }

    #[test]
    fn test_hazard_serializes_with_wire_names() {
        let hazard = Hazard {
            id: "HZ-900".to_string(),
            kind: HazardKind::Debris,
            confidence: 70,
            location: "Taxiway B".to_string(),
            camera: "CAM-003".to_string(),
            timestamp: "11:00:00".to_string(),
            severity: Severity::Medium,
            status: HazardStatus::Detected,
        };
        let json = serde_json::to_value(&hazard).unwrap();
        assert_eq!(json["type"], "debris");
        assert_eq!(json["severity"], "medium");
        assert_eq!(json["status"], "detected");
    }
}
