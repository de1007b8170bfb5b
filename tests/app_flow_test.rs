//! Test keyboard flows and rendering against a TestBackend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Terminal;

use runway_watcher::app::{App, InputMode, StatusLevel, Tab};
use runway_watcher::config::RuntimeConfig;
use runway_watcher::domain::feed::HazardStatus;
use runway_watcher::domain::Feed;
use runway_watcher::ui::layout;
use runway_watcher::{input, ui};

const WIDTH: u16 = 140;
const HEIGHT: u16 = 48;

fn sample_app() -> App {
    App::new(RuntimeConfig::default(), Feed::sample())
}

fn press(app: &mut App, code: KeyCode) {
    input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_command(app: &mut App, line: &str) {
    press(app, KeyCode::Char(':'));
    for ch in line.chars() {
        press(app, KeyCode::Char(ch));
    }
    press(app, KeyCode::Enter);
}

fn draw(app: &mut App) -> Buffer {
    app.sync_context();
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, area: Rect, y: u16) -> String {
    (area.x..area.x + area.width)
        .map(|x| buffer.get(x, y).symbol())
        .collect()
}

fn render(app: &mut App) -> String {
    let buffer = draw(app);
    let mut out = String::new();
    for y in 0..buffer.area.height {
        out.push_str(&row_text(&buffer, buffer.area, y));
        out.push('\n');
    }
    out
}

fn dashboard() -> layout::DashboardAreas {
    layout::dashboard_areas(layout::areas(Rect::new(0, 0, WIDTH, HEIGHT)).main)
}

#[test]
fn test_dashboard_renders_headline_panels() {
    let mut app = sample_app();
    let screen = render(&mut app);
    assert!(screen.contains("RunwayWatcher"));
    assert!(screen.contains("Active Hazards"));
    assert!(screen.contains("Online Cameras"));
    assert!(screen.contains("Critical Alerts"));
    assert!(screen.contains("Risk Score"));
    assert!(screen.contains("Recent Alerts"));
    assert!(screen.contains("Runway 27L - 500ft AGL"));
    // only the first five hazards are listed on the dashboard
    assert!(!screen.contains("Cargo Apron - 300ft AGL"));
}

#[test]
fn test_only_the_current_view_is_drawn() {
    let mut app = sample_app();
    let titles = [
        (Tab::Dashboard, "Airport Overview"),
        (Tab::Cameras, "Camera Feeds"),
        (Tab::Hazards, "All Hazards"),
        (Tab::History, "Historical Data"),
    ];
    for (tab, _) in titles {
        app.set_tab(tab);
        let screen = render(&mut app);
        for (other, title) in titles {
            assert_eq!(
                screen.contains(title),
                other == tab,
                "{title} on {tab:?}"
            );
        }
    }
}

#[test]
fn test_dashboard_draws_airport_overview() {
    let mut app = sample_app();
    let screen = render(&mut app);
    for label in ["Airport Overview", "RWY 27L", "RWY 27R", "Cargo Apron"] {
        assert!(screen.contains(label), "{label} missing");
    }
    assert!(screen.contains("◌"), "camera under maintenance not drawn");
    assert!(screen.contains("◆"), "no hazard markers");
}

#[test]
fn test_selected_row_is_highlighted() {
    let mut app = sample_app();
    type_command(&mut app, "select HZ-003");
    let buffer = draw(&mut app);
    let table = dashboard().hazards;

    let rows: Vec<u16> = (table.y..table.y + table.height).collect();
    let selected = rows
        .iter()
        .copied()
        .find(|y| row_text(&buffer, table, *y).contains("Taxiway Alpha - Gate A3"))
        .expect("selected hazard row not drawn");
    let other = rows
        .iter()
        .copied()
        .find(|y| row_text(&buffer, table, *y).contains("North Apron - 200ft AGL"))
        .expect("unselected hazard row not drawn");

    let marker = buffer.get(table.x + 1, selected);
    assert_eq!(marker.symbol(), "▶");
    assert_eq!(marker.bg, Color::Rgb(30, 41, 59));
    assert_eq!(buffer.get(table.x + 20, selected).bg, Color::Rgb(30, 41, 59));

    assert_ne!(buffer.get(table.x + 1, other).symbol(), "▶");
    assert_ne!(buffer.get(table.x + 1, other).bg, Color::Rgb(30, 41, 59));
}

/// Symbols down the first bar column of the risk chart, top to bottom
fn risk_column(app: &mut App) -> Vec<String> {
    let buffer = draw(app);
    let risk = dashboard().risk;
    let x = risk.x + 1;
    // skip the border on top and the border plus label row at the bottom
    (risk.y + 1..risk.y + risk.height - 2)
        .map(|y| buffer.get(x, y).symbol().to_string())
        .collect()
}

#[test]
fn test_risk_chart_scale_is_fixed_to_100() {
    let mut app = sample_app();
    for sample in &mut app.feed.risk {
        sample.score = 50;
    }
    let half = risk_column(&mut app);
    assert_eq!(half.first().map(String::as_str), Some(" "));
    assert!(half.iter().any(|s| s == "█"));

    for sample in &mut app.feed.risk {
        sample.score = 100;
    }
    let full = risk_column(&mut app);
    assert!(full.iter().all(|s| s == "█"), "{full:?}");
}

#[test]
fn test_camera_tab_lists_every_camera() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('2'));
    let screen = render(&mut app);
    for id in ["CAM-001", "CAM-003", "CAM-005"] {
        assert!(screen.contains(id), "{id} missing");
    }
}

#[test]
fn test_hazard_tab_keys_track_and_resolve() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.cursor_hazard_id().as_deref(), Some("HZ-002"));

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(
        app.feed.hazard("HZ-002").map(|h| h.status),
        Some(HazardStatus::Tracking)
    );

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.active_hazard_count(), 5);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selected_hazard.as_deref(), Some("HZ-002"));
}

#[test]
fn test_view_feed_jumps_to_camera() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.current_tab, Tab::Cameras);
    assert_eq!(app.cursor_camera().map(|c| c.id.as_str()), Some("CAM-001"));
}

#[test]
fn test_view_feed_from_dashboard_table() {
    let mut app = sample_app();
    // hazards panel has focus by default; third row is HZ-003 on CAM-003
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.current_tab, Tab::Cameras);
    assert_eq!(app.cursor_camera().map(|c| c.id.as_str()), Some("CAM-003"));
}

#[test]
fn test_dashboard_acknowledge_from_alerts_panel() {
    let mut app = sample_app();
    // hazards panel first, Tab switches to the alerts feed
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.critical_unacknowledged_count(), 0);
}

#[test]
fn test_pause_shows_in_header() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char(' '));
    assert!(app.paused);
    assert!(render(&mut app).contains("PAUSED"));
    press(&mut app, KeyCode::Char(' '));
    assert!(render(&mut app).contains("LIVE"));
}

#[test]
fn test_search_narrows_hazard_table() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.input_mode, InputMode::Search);
    for ch in "cargo".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    press(&mut app, KeyCode::Enter);
    let ids: Vec<&str> = app.visible_hazards().iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["HZ-004", "HZ-006"]);
}

#[test]
fn test_copy_without_selection_warns() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('y'));
    assert!(app.take_copy_request().is_none());
    let (_, level) = app.status_text().unwrap();
    assert_eq!(level, StatusLevel::Warn);

    type_command(&mut app, "select hz-003");
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.take_copy_request().as_deref(), Some("HZ-003"));
    assert!(app.take_copy_request().is_none());
}

#[test]
fn test_export_command_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = sample_app();
    app.export_dir = dir.path().to_path_buf();

    type_command(&mut app, "filter type:bird");
    type_command(&mut app, "export csv");
    type_command(&mut app, "export json");

    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names.len(), 2);
    assert!(names[0].starts_with("hazards-") && names[0].ends_with(".csv"));
    assert!(names[1].starts_with("snapshot-") && names[1].ends_with(".json"));

    let csv_path = dir.path().join(&names[0]);
    let csv = std::fs::read_to_string(csv_path).unwrap();
    // header plus the three bird rows
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn test_settings_show_config_in_use() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ops.toml");
    let mut app = sample_app();
    app.config_path = Some(path.clone());

    press(&mut app, KeyCode::Char('s'));
    assert!(app.settings_open);
    let screen = render(&mut app);
    assert!(screen.contains("ops.toml"), "{}", path.display());
}

#[test]
fn test_quit_command() {
    let mut app = sample_app();
    type_command(&mut app, "quit");
    assert!(app.should_quit);
}
