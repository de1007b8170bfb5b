//! Dashboard module - alert feed and Active Hazards table

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, NavigateTarget};
use crate::domain::feed::HazardStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPanel {
    Alerts,
    Hazards,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    active_panel: DashboardPanel,
    alert_cursor: usize,
    hazard_cursor: usize,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            active_panel: DashboardPanel::Hazards,
            alert_cursor: 0,
            hazard_cursor: 0,
        }
    }

    pub fn active_panel(&self) -> DashboardPanel {
        self.active_panel
    }

    pub fn set_panel(&mut self, panel: DashboardPanel) {
        self.active_panel = panel;
    }

    pub fn next_panel(&mut self) {
        self.active_panel = match self.active_panel {
            DashboardPanel::Alerts => DashboardPanel::Hazards,
            DashboardPanel::Hazards => DashboardPanel::Alerts,
        };
    }

    pub fn alert_cursor(&self) -> usize {
        self.alert_cursor
    }

    pub fn hazard_cursor(&self) -> usize {
        self.hazard_cursor
    }

    /// Hazard id under the cursor when the hazards panel is focused
    pub fn cursor_hazard<'a>(&self, ctx: &'a Context) -> Option<&'a str> {
        match self.active_panel {
            DashboardPanel::Hazards => ctx.hazard_rows.get(self.hazard_cursor).map(String::as_str),
            DashboardPanel::Alerts => None,
        }
    }

    pub fn cursor_alert<'a>(&self, ctx: &'a Context) -> Option<&'a str> {
        match self.active_panel {
            DashboardPanel::Alerts => ctx.alert_rows.get(self.alert_cursor).map(String::as_str),
            DashboardPanel::Hazards => None,
        }
    }

    pub fn clamp(&mut self, ctx: &Context) {
        self.alert_cursor = self.alert_cursor.min(ctx.alert_rows.len().saturating_sub(1));
        self.hazard_cursor = self.hazard_cursor.min(ctx.hazard_rows.len().saturating_sub(1));
    }

    /// Mouse click on a table row: focus the hazards panel and select the row
    pub fn click_hazard_row(&mut self, row: usize, ctx: &Context) -> Action {
        let Some(id) = ctx.hazard_rows.get(row) else {
            return Action::None;
        };
        self.active_panel = DashboardPanel::Hazards;
        self.hazard_cursor = row;
        Action::Navigate(NavigateTarget::Hazard(id.clone()))
    }

    pub fn click_alert_row(&mut self, row: usize, ctx: &Context) {
        if row < ctx.alert_rows.len() {
            self.active_panel = DashboardPanel::Alerts;
            self.alert_cursor = row;
        }
    }

    fn move_cursor(&mut self, forward: bool, ctx: &Context) {
        let (cursor, len) = match self.active_panel {
            DashboardPanel::Alerts => (&mut self.alert_cursor, ctx.alert_rows.len()),
            DashboardPanel::Hazards => (&mut self.hazard_cursor, ctx.hazard_rows.len()),
        };
        if forward {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        } else {
            *cursor = cursor.saturating_sub(1);
        }
    }
}

impl Module for Dashboard {
    fn id(&self) -> &'static str {
        "dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.next_panel();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(true, ctx);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(false, ctx);
                Action::None
            }
            KeyCode::Enter => match self.cursor_hazard(ctx) {
                Some(id) => Action::Navigate(NavigateTarget::Hazard(id.to_string())),
                None => Action::None,
            },
            KeyCode::Char('a') => match self.cursor_alert(ctx) {
                Some(id) => Action::Acknowledge(id.to_string()),
                None => Action::None,
            },
            KeyCode::Char('t') => self.hazard_action(ctx, HazardStatus::Tracking),
            KeyCode::Char('x') => self.hazard_action(ctx, HazardStatus::Resolved),
            KeyCode::Char('v') => match self.cursor_hazard(ctx) {
                Some(id) => Action::ViewFeed(id.to_string()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }
}

impl Dashboard {
    fn hazard_action(&self, ctx: &Context, status: HazardStatus) -> Action {
        match self.cursor_hazard(ctx) {
            Some(id) => Action::SetHazardStatus(id.to_string(), status),
            None => Action::None,
        }
    }
}
