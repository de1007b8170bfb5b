use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::config::{self, RuntimeConfig};
use crate::core::{Action, Command, Context, NavigateTarget, NotifyLevel, Selected};
use crate::domain::feed::{Alert, Camera, Feed, Hazard, HazardStatus};
use crate::domain::{metrics, FilterState};
use crate::modules::dashboard::Dashboard;

/// Rows shown in the dashboard's Active Hazards table
pub const DASHBOARD_HAZARD_ROWS: usize = 5;

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Cameras,
    Hazards,
    History,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Cameras, Tab::Hazards, Tab::History];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Cameras => "Cameras",
            Tab::Hazards => "Hazards",
            Tab::History => "History",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Dashboard => '1',
            Tab::Cameras => '2',
            Tab::Hazards => '3',
            Tab::History => '4',
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dashboard" | "dash" | "home" | "1" => Some(Tab::Dashboard),
            "cameras" | "cams" | "camera" | "2" => Some(Tab::Cameras),
            "hazards" | "hz" | "hazard" | "3" => Some(Tab::Hazards),
            "history" | "hist" | "4" => Some(Tab::History),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug)]
pub struct App {
    /// Shared context for modules
    pub ctx: Context,
    pub config: RuntimeConfig,
    pub feed: Feed,
    pub current_tab: Tab,
    pub dashboard: Dashboard,
    /// Id of the selected hazard; unset until the first selection
    pub selected_hazard: Option<String>,
    /// Display-only toggle, there is no live source to pause
    pub paused: bool,
    pub filters: FilterState,
    pub camera_cursor: usize,
    pub hazard_cursor: usize,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub export_dir: PathBuf,
    /// Config file in effect, shown in the settings popup
    pub config_path: Option<PathBuf>,
    pub pending_copy: Option<String>,
    pub now: DateTime<Local>,
    pub settings_open: bool,
    pub help_open: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: RuntimeConfig, feed: Feed) -> Self {
        let mut app = Self {
            ctx: Context::new(),
            config,
            feed,
            current_tab: Tab::Dashboard,
            dashboard: Dashboard::new(),
            selected_hazard: None,
            paused: false,
            filters: FilterState::default(),
            camera_cursor: 0,
            hazard_cursor: 0,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            export_dir: config::exports_dir(),
            config_path: config::config_path(),
            pending_copy: None,
            now: Local::now(),
            settings_open: false,
            help_open: false,
            should_quit: false,
        };
        app.sync_context();
        app
    }

    /// Sync context with app state
    pub fn sync_context(&mut self) {
        self.ctx.selected = match self.selected_hazard.as_ref() {
            Some(id) => Selected::Hazard(id.clone()),
            None => Selected::None,
        };
        self.ctx.alert_rows = self.feed.alerts.iter().map(|a| a.id.clone()).collect();
        self.ctx.hazard_rows = self
            .dashboard_hazards()
            .iter()
            .map(|h| h.id.clone())
            .collect();
        self.dashboard.clamp(&self.ctx);
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
        self.clamp_cursors();
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let index = Tab::ALL
            .iter()
            .position(|tab| *tab == self.current_tab)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % Tab::ALL.len()
        } else {
            (index + Tab::ALL.len() - 1) % Tab::ALL.len()
        };
        self.set_tab(Tab::ALL[next]);
    }

    /// Select a hazard by id. Returns false (and keeps the old selection) for unknown ids.
    pub fn select_hazard(&mut self, id: &str) -> bool {
        let Some(hazard) = self.feed.hazard(id) else {
            return false;
        };
        let id = hazard.id.clone();
        if let Some(pos) = self.visible_hazards().iter().position(|h| h.id == id) {
            self.hazard_cursor = pos;
        }
        self.selected_hazard = Some(id);
        self.sync_context();
        true
    }

    pub fn selected_hazard(&self) -> Option<&Hazard> {
        self.selected_hazard
            .as_deref()
            .and_then(|id| self.feed.hazard(id))
    }

    pub fn is_selected(&self, hazard: &Hazard) -> bool {
        self.selected_hazard.as_deref() == Some(hazard.id.as_str())
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            self.set_status("Paused live view", StatusLevel::Warn);
        } else {
            self.set_status("Resumed live view", StatusLevel::Info);
        }
    }

    pub fn acknowledge_alert(&mut self, id: &str) -> Action {
        let Some(alert) = self.feed.alert_mut(id) else {
            return Action::Notify(format!("Unknown alert: {id}"), NotifyLevel::Error);
        };
        if alert.acknowledged {
            return Action::Notify(
                format!("{} already acknowledged", alert.id),
                NotifyLevel::Warn,
            );
        }
        alert.acknowledged = true;
        log::info!("alert {} acknowledged", alert.id);
        Action::Notify(format!("Acknowledged {}", alert.id), NotifyLevel::Info)
    }

    pub fn set_hazard_status(&mut self, id: &str, status: HazardStatus) -> Action {
        let Some(hazard) = self.feed.hazard_mut(id) else {
            return Action::Notify(format!("Unknown hazard: {id}"), NotifyLevel::Error);
        };
        if hazard.status == status {
            return Action::Notify(
                format!("{} is already {}", hazard.id, status.as_str()),
                NotifyLevel::Warn,
            );
        }
        let previous = hazard.status;
        hazard.status = status;
        log::info!(
            "hazard {} {} -> {}",
            hazard.id,
            previous.as_str(),
            status.as_str()
        );
        let message = format!("{} is now {}", hazard.id, status.as_str());
        self.clamp_cursors();
        Action::Notify(message, NotifyLevel::Info)
    }

    /// Jump to the Cameras tab with the cursor on the camera that saw this hazard
    pub fn view_feed(&mut self, hazard_id: &str) -> Action {
        let Some(camera_id) = self.feed.hazard(hazard_id).map(|h| h.camera.clone()) else {
            return Action::Notify(format!("Unknown hazard: {hazard_id}"), NotifyLevel::Error);
        };
        self.set_tab(Tab::Cameras);
        let position = self
            .visible_cameras()
            .iter()
            .position(|c| c.id.eq_ignore_ascii_case(&camera_id));
        match position {
            Some(pos) => {
                self.camera_cursor = pos;
                Action::Notify(format!("Feed {camera_id}"), NotifyLevel::Info)
            }
            None => Action::Notify(
                format!("{camera_id} is hidden by the camera filter"),
                NotifyLevel::Warn,
            ),
        }
    }

    pub fn copy_selection(&self) -> Action {
        match self.selected_hazard.as_ref() {
            Some(id) => Action::Copy(id.clone()),
            None => Action::Notify("Nothing to copy".to_string(), NotifyLevel::Warn),
        }
    }

    pub fn active_hazard_count(&self) -> usize {
        metrics::active_hazard_count(&self.feed.hazards)
    }

    pub fn critical_unacknowledged_count(&self) -> usize {
        metrics::critical_unacknowledged_count(&self.feed.alerts)
    }

    pub fn online_camera_count(&self) -> usize {
        metrics::online_camera_count(&self.feed.cameras)
    }

    /// First rows of the feed, whatever their status
    pub fn dashboard_hazards(&self) -> &[Hazard] {
        let len = self.feed.hazards.len().min(DASHBOARD_HAZARD_ROWS);
        &self.feed.hazards[..len]
    }

    pub fn visible_cameras(&self) -> Vec<&Camera> {
        self.feed
            .cameras
            .iter()
            .filter(|c| self.filters.camera_matches(c))
            .collect()
    }

    pub fn visible_hazards(&self) -> Vec<&Hazard> {
        self.feed
            .hazards
            .iter()
            .filter(|h| self.filters.hazard_matches(h))
            .collect()
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.feed.alerts
    }

    /// Hazard under the cursor of the current view
    pub fn cursor_hazard_id(&self) -> Option<String> {
        match self.current_tab {
            Tab::Dashboard => self.dashboard.cursor_hazard(&self.ctx).map(str::to_string),
            Tab::Hazards => self
                .visible_hazards()
                .get(self.hazard_cursor)
                .map(|h| h.id.clone()),
            Tab::Cameras | Tab::History => None,
        }
    }

    pub fn cursor_camera(&self) -> Option<&Camera> {
        self.visible_cameras().get(self.camera_cursor).copied()
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let (cursor, len) = match self.current_tab {
            Tab::Cameras => (&mut self.camera_cursor, self.feed.cameras.len()),
            Tab::Hazards => (&mut self.hazard_cursor, self.feed.hazards.len()),
            Tab::Dashboard | Tab::History => return,
        };
        if forward {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        } else if *cursor > 0 {
            *cursor -= 1;
        }
        self.clamp_cursors();
    }

    pub fn set_cursor(&mut self, index: usize) {
        match self.current_tab {
            Tab::Cameras => self.camera_cursor = index,
            Tab::Hazards => self.hazard_cursor = index,
            Tab::Dashboard | Tab::History => {}
        }
        self.clamp_cursors();
    }

    pub fn clamp_cursors(&mut self) {
        let cameras = self.visible_cameras().len();
        let hazards = self.visible_hazards().len();
        self.camera_cursor = self.camera_cursor.min(cameras.saturating_sub(1));
        self.hazard_cursor = self.hazard_cursor.min(hazards.saturating_sub(1));
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
        self.now = Local::now();
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.command.input = self.filters.search.clone().unwrap_or_default();
    }

    pub fn exit_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_input();
            return;
        }
        let cmd = crate::core::parse_command(&input);
        self.exit_input();
        let action = self.execute_command(&cmd);
        self.apply_action(action);
        self.command.last = Some(input);
    }

    pub fn apply_search(&mut self) {
        let input = self.command.input.clone();
        self.exit_input();
        self.search(&input);
    }

    fn search(&mut self, text: &str) {
        self.filters.set_search(text);
        self.clamp_cursors();
        match self.filters.search.as_deref() {
            Some(needle) => {
                let cams = self.visible_cameras().len();
                let hazards = self.visible_hazards().len();
                self.set_status(
                    format!("Search \"{needle}\": {cams} cameras, {hazards} hazards"),
                    StatusLevel::Info,
                );
            }
            None => self.set_status("Search cleared", StatusLevel::Info),
        }
    }

    pub fn take_copy_request(&mut self) -> Option<String> {
        self.pending_copy.take()
    }
}

impl App {
    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Tab(name) => match Tab::parse(name) {
                Some(tab) => Action::Navigate(NavigateTarget::Tab(tab)),
                None => Action::Notify(format!("Unknown tab: {name}"), NotifyLevel::Warn),
            },
            Command::Select(id) => Action::Navigate(NavigateTarget::Hazard(id.clone())),

            Command::Ack(id) => Action::Acknowledge(id.clone()),
            Command::Track(id) => Action::SetHazardStatus(id.clone(), HazardStatus::Tracking),
            Command::Resolve(id) => Action::SetHazardStatus(id.clone(), HazardStatus::Resolved),
            Command::Detect(id) => Action::SetHazardStatus(id.clone(), HazardStatus::Detected),
            Command::Pause => {
                self.toggle_pause();
                Action::None
            }

            Command::Filter(text) => match self.filters.apply_tokens(text) {
                Ok(()) => {
                    self.clamp_cursors();
                    let shown = self.filters.describe().unwrap_or_else(|| "none".to_string());
                    Action::Notify(format!("Filter: {shown}"), NotifyLevel::Info)
                }
                Err(err) => Action::Notify(err.to_string(), NotifyLevel::Warn),
            },
            Command::ClearFilter => {
                self.filters.clear();
                self.clamp_cursors();
                Action::Notify("Filter cleared".to_string(), NotifyLevel::Info)
            }
            Command::Search(text) => {
                self.search(text.as_deref().unwrap_or(""));
                Action::None
            }

            Command::Export(format) => crate::modules::export::export(self, format.as_deref()),
            Command::Summary => crate::modules::ops::summary(&self.feed),
            Command::Config => crate::modules::ops::config_report(&self.config),
            Command::Help => {
                self.help_open = true;
                Action::None
            }

            Command::Quit => Action::Quit,

            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {s}"), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(NavigateTarget::Tab(tab)) => self.set_tab(tab),
            Action::Navigate(NavigateTarget::Hazard(id)) => {
                if self.select_hazard(&id) {
                    self.set_status(format!("Selected {}", id.to_uppercase()), StatusLevel::Info);
                } else {
                    self.set_status(format!("Unknown hazard: {id}"), StatusLevel::Error);
                }
            }
            Action::Acknowledge(id) => {
                let result = self.acknowledge_alert(&id);
                self.apply_action(result);
            }
            Action::SetHazardStatus(id, status) => {
                let result = self.set_hazard_status(&id, status);
                self.apply_action(result);
            }
            Action::ViewFeed(id) => {
                let result = self.view_feed(&id);
                self.apply_action(result);
            }
            Action::Copy(text) => self.pending_copy = Some(text),
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::Quit => self.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(RuntimeConfig::default(), Feed::sample())
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.current_tab, Tab::Dashboard);
        assert!(app.selected_hazard.is_none());
        assert!(!app.paused);
        assert_eq!(app.config.api_url, "http://localhost:3000");
        assert_eq!(app.ctx.hazard_rows.len(), DASHBOARD_HAZARD_ROWS);
    }

    #[test]
    fn test_tab_parse_aliases() {
        assert_eq!(Tab::parse("HIST"), Some(Tab::History));
        assert_eq!(Tab::parse("cams"), Some(Tab::Cameras));
        assert_eq!(Tab::parse("3"), Some(Tab::Hazards));
        assert_eq!(Tab::parse("map"), None);
    }

    #[test]
    fn test_cycle_tab_wraps() {
        let mut app = app();
        app.cycle_tab(false);
        assert_eq!(app.current_tab, Tab::History);
        app.cycle_tab(true);
        assert_eq!(app.current_tab, Tab::Dashboard);
    }

    #[test]
    fn test_dashboard_table_includes_resolved_rows() {
        let app = app();
        let ids: Vec<_> = app.dashboard_hazards().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["HZ-001", "HZ-002", "HZ-003", "HZ-004", "HZ-005"]);
    }

    #[test]
    fn test_select_unknown_keeps_previous() {
        let mut app = app();
        assert!(app.select_hazard("HZ-002"));
        assert!(!app.select_hazard("HZ-404"));
        assert_eq!(app.selected_hazard.as_deref(), Some("HZ-002"));
        assert_eq!(app.ctx.selected, Selected::Hazard("HZ-002".to_string()));
    }

    #[test]
    fn test_select_normalizes_case() {
        let mut app = app();
        assert!(app.select_hazard("hz-006"));
        assert_eq!(app.selected_hazard.as_deref(), Some("HZ-006"));
        assert_eq!(app.hazard_cursor, 5);
    }

    #[test]
    fn test_cursor_stays_in_filtered_bounds() {
        let mut app = app();
        app.set_tab(Tab::Hazards);
        for _ in 0..10 {
            app.move_cursor(true);
        }
        assert_eq!(app.hazard_cursor, 6);
        app.execute_command(&Command::Filter("type:vehicle".to_string()));
        assert_eq!(app.hazard_cursor, 0);
        assert_eq!(app.cursor_hazard_id().as_deref(), Some("HZ-005"));
    }

    #[test]
    fn test_view_feed_moves_to_camera() {
        let mut app = app();
        let action = app.view_feed("HZ-005");
        assert_eq!(app.current_tab, Tab::Cameras);
        assert_eq!(app.cursor_camera().map(|c| c.id.as_str()), Some("CAM-006"));
        assert_eq!(
            action,
            Action::Notify("Feed CAM-006".to_string(), NotifyLevel::Info)
        );
    }

    #[test]
    fn test_view_feed_action_reports_status() {
        let mut app = app();
        app.apply_action(Action::ViewFeed("HZ-006".to_string()));
        assert_eq!(app.cursor_camera().map(|c| c.id.as_str()), Some("CAM-004"));
        assert_eq!(app.status_text().map(|(text, _)| text), Some("Feed CAM-004"));

        app.apply_action(Action::ViewFeed("HZ-404".to_string()));
        assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Error));
    }

    #[test]
    fn test_copy_needs_selection() {
        let mut app = app();
        assert!(matches!(app.copy_selection(), Action::Notify(_, NotifyLevel::Warn)));
        app.select_hazard("HZ-003");
        let action = app.copy_selection();
        app.apply_action(action);
        assert_eq!(app.take_copy_request().as_deref(), Some("HZ-003"));
        assert!(app.take_copy_request().is_none());
    }

    #[test]
    fn test_status_level_from_notify() {
        assert_eq!(StatusLevel::from(NotifyLevel::Warn), StatusLevel::Warn);
    }
}
