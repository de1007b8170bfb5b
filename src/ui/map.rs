//! Airport Overview: a schematic of the airfield with camera and hazard markers
//!
//! The canvas uses a fixed 100x100 coordinate space with the origin at the
//! bottom left. Cameras are anchored by their location name and hazards are
//! drawn next to the camera that reported them.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker as Dots;
use ratatui::text::Span;
use ratatui::widgets::block::{Position, Title};
use ratatui::widgets::canvas::{Canvas, Rectangle};
use ratatui::Frame;

use super::tabs::{camera_status_color, panel_block, severity_style};
use crate::app::App;
use crate::domain::feed::{Camera, CameraStatus, Hazard, HazardStatus};

const SPAN: f64 = 100.0;
const HAZARD_STEP: f64 = 3.5;

pub const CAMERA_ONLINE: &str = "◉";
pub const CAMERA_DOWN: &str = "◌";
pub const HAZARD: &str = "◆";

#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

const RUNWAY: Color = Color::Gray;
const TAXIWAY: Color = Color::Yellow;
const APRON: Color = Color::DarkGray;
const TERMINAL: Color = Color::Blue;

pub const ZONES: [Zone; 9] = [
    zone("RWY 27L", 4.0, 84.0, 92.0, 8.0, RUNWAY),
    zone("TWY A", 10.0, 74.0, 80.0, 3.0, TAXIWAY),
    zone("North Apron", 6.0, 50.0, 24.0, 18.0, APRON),
    zone("Terminal A", 34.0, 44.0, 16.0, 22.0, TERMINAL),
    zone("Terminal B", 54.0, 44.0, 16.0, 22.0, TERMINAL),
    zone("Cargo Apron", 74.0, 28.0, 22.0, 40.0, APRON),
    zone("South Apron", 6.0, 28.0, 24.0, 18.0, APRON),
    zone("TWY B", 10.0, 20.0, 80.0, 3.0, TAXIWAY),
    zone("RWY 27R", 4.0, 4.0, 92.0, 8.0, RUNWAY),
];

const fn zone(label: &'static str, x: f64, y: f64, width: f64, height: f64, color: Color) -> Zone {
    Zone {
        label,
        x,
        y,
        width,
        height,
        color,
    }
}

impl Zone {
    /// Label sits just inside the top edge; thin strips are labelled on the left
    fn label_at(&self) -> (f64, f64) {
        if self.height < 5.0 {
            (0.5, self.y + self.height / 2.0)
        } else {
            (self.x + 2.0, self.y + self.height - 3.0)
        }
    }
}

/// Map position of a camera location, matched case-insensitively
pub fn anchor(location: &str) -> Option<(f64, f64)> {
    let anchor = match location.trim().to_ascii_lowercase().as_str() {
        "north apron" => (18.0, 55.0),
        "south apron" => (18.0, 33.0),
        "east perimeter" => (98.0, 48.0),
        "taxiway a" => (60.0, 75.5),
        "taxiway b" => (60.0, 21.5),
        "south cargo" | "cargo apron" => (85.0, 33.0),
        "terminal a" => (42.0, 50.0),
        "terminal b" => (62.0, 50.0),
        _ => return None,
    };
    Some(anchor)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub symbol: &'static str,
    pub style: Style,
}

pub fn camera_markers(cameras: &[Camera]) -> Vec<Marker> {
    cameras
        .iter()
        .filter_map(|camera| {
            let (x, y) = anchor(&camera.location)?;
            let symbol = match camera.status {
                CameraStatus::Online => CAMERA_ONLINE,
                CameraStatus::Offline | CameraStatus::Maintenance => CAMERA_DOWN,
            };
            Some(Marker {
                id: camera.id.clone(),
                x,
                y,
                symbol,
                style: Style::default().fg(camera_status_color(camera.status)),
            })
        })
        .collect()
}

/// Unresolved hazards, lined up to the right of their reporting camera
pub fn hazard_markers(hazards: &[Hazard], cameras: &[Camera]) -> Vec<Marker> {
    let mut per_camera: Vec<(&str, usize)> = Vec::new();
    let mut markers = Vec::new();

    for hazard in hazards.iter().filter(|h| h.status != HazardStatus::Resolved) {
        let Some((x, y)) = cameras
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(&hazard.camera))
            .and_then(|c| anchor(&c.location))
        else {
            continue;
        };

        let slot = match per_camera.iter_mut().find(|(id, _)| id.eq_ignore_ascii_case(&hazard.camera)) {
            Some((_, count)) => {
                *count += 1;
                *count
            }
            None => {
                per_camera.push((hazard.camera.as_str(), 1));
                1
            }
        };

        markers.push(Marker {
            id: hazard.id.clone(),
            x: (x + HAZARD_STEP * slot as f64).min(SPAN),
            y,
            symbol: HAZARD,
            style: severity_style(hazard.severity),
        });
    }
    markers
}

pub fn draw_map(f: &mut Frame, area: Rect, app: &App) {
    let cameras = camera_markers(&app.feed.cameras);
    let hazards = hazard_markers(&app.feed.hazards, &app.feed.cameras);

    let dim = Style::default().fg(Color::DarkGray);
    let legend = Title::from(vec![
        Span::styled(format!(" {CAMERA_ONLINE}"), Style::default().fg(Color::Green)),
        Span::styled(" camera ", dim),
        Span::styled(CAMERA_DOWN, Style::default().fg(Color::Yellow)),
        Span::styled(" down ", dim),
        Span::styled(HAZARD, Style::default().fg(Color::Red)),
        Span::styled(" hazard ", dim),
    ])
    .position(Position::Bottom);

    let canvas = Canvas::default()
        .block(panel_block("Airport Overview", false).title(legend))
        .marker(Dots::Braille)
        .x_bounds([0.0, SPAN])
        .y_bounds([0.0, SPAN])
        .paint(|ctx| {
            for zone in ZONES.iter() {
                ctx.draw(&Rectangle {
                    x: zone.x,
                    y: zone.y,
                    width: zone.width,
                    height: zone.height,
                    color: zone.color,
                });
            }
            ctx.layer();
            for zone in ZONES.iter() {
                let (x, y) = zone.label_at();
                ctx.print(x, y, Span::styled(zone.label, Style::default().fg(zone.color)));
            }
            for marker in cameras.iter().chain(hazards.iter()) {
                ctx.print(marker.x, marker.y, Span::styled(marker.symbol, marker.style));
            }
        });
    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feed::{Feed, Severity};

    #[test]
    fn test_every_sample_camera_has_a_place() {
        let feed = Feed::sample();
        let markers = camera_markers(&feed.cameras);
        assert_eq!(markers.len(), feed.cameras.len());
        for marker in &markers {
            assert!((0.0..=SPAN).contains(&marker.x) && (0.0..=SPAN).contains(&marker.y));
        }
    }

    #[test]
    fn test_camera_under_maintenance_is_drawn_as_down() {
        let feed = Feed::sample();
        let markers = camera_markers(&feed.cameras);
        let cam5 = markers.iter().find(|m| m.id == "CAM-005").unwrap();
        assert_eq!(cam5.symbol, CAMERA_DOWN);
        assert_eq!(cam5.style.fg, Some(Color::Yellow));
        let online = markers.iter().filter(|m| m.symbol == CAMERA_ONLINE).count();
        assert_eq!(online, 5);
    }

    #[test]
    fn test_resolved_hazards_are_not_marked() {
        let feed = Feed::sample();
        let markers = hazard_markers(&feed.hazards, &feed.cameras);
        let ids: Vec<&str> = markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
        assert!(!ids.contains(&"HZ-004"));
    }

    #[test]
    fn test_hazard_marker_follows_severity_and_camera() {
        let feed = Feed::sample();
        let markers = hazard_markers(&feed.hazards, &feed.cameras);
        for marker in &markers {
            let hazard = feed.hazard(&marker.id).unwrap();
            assert_eq!(marker.style, severity_style(hazard.severity));
        }

        // three hazards share CAM-001 and must not sit on top of each other
        let north: Vec<f64> = markers
            .iter()
            .filter(|m| ["HZ-001", "HZ-002", "HZ-007"].contains(&m.id.as_str()))
            .map(|m| m.x)
            .collect();
        assert_eq!(north.len(), 3);
        assert!(north[0] < north[1] && north[1] < north[2]);
        let (cam_x, _) = anchor("North Apron").unwrap();
        assert!(north[0] > cam_x);

        let critical = markers
            .iter()
            .filter(|m| m.style == severity_style(Severity::Critical))
            .count();
        assert!(critical >= 1);
    }

    #[test]
    fn test_unknown_location_is_skipped() {
        let mut feed = Feed::sample();
        feed.cameras[0].location = "Somewhere Else".to_string();
        assert_eq!(camera_markers(&feed.cameras).len(), feed.cameras.len() - 1);
        // hazards of an unplaced camera have nowhere to go
        let markers = hazard_markers(&feed.hazards, &feed.cameras);
        assert!(markers.iter().all(|m| m.id != "HZ-001"));
    }

    #[test]
    fn test_zones_cover_the_airfield() {
        let labels: Vec<&str> = ZONES.iter().map(|z| z.label).collect();
        for label in [
            "RWY 27L",
            "RWY 27R",
            "TWY A",
            "TWY B",
            "North Apron",
            "South Apron",
            "Cargo Apron",
            "Terminal A",
            "Terminal B",
        ] {
            assert!(labels.contains(&label), "{label} missing");
        }
        for zone in ZONES {
            assert!(zone.x + zone.width <= SPAN && zone.y + zone.height <= SPAN);
        }
    }
}
