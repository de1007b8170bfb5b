//! Keyboard and mouse dispatch

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, InputMode, Tab};
use crate::core::{Action, Module, NavigateTarget};
use crate::domain::feed::{CameraStatus, HazardStatus};
use crate::ui::layout::{self, rect_contains, row_at};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    if app.settings_open {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('s')) {
            app.settings_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_text_input(app, key, App::apply_command),
        InputMode::Search => handle_text_input(app, key, App::apply_search),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        (KeyCode::Char('q'), _) => app.should_quit = true,
        (KeyCode::Char('?'), _) => app.help_open = true,
        (KeyCode::Char('s'), _) => app.settings_open = true,
        (KeyCode::Char(':'), _) => app.enter_command(),
        (KeyCode::Char('/'), _) => app.enter_search(),
        (KeyCode::Char(' '), _) => app.toggle_pause(),
        (KeyCode::Char('['), _) => app.cycle_tab(false),
        (KeyCode::Char(']'), _) => app.cycle_tab(true),
        (KeyCode::Char(c), _) if Tab::ALL.iter().any(|t| t.shortcut() == c) => {
            if let Some(tab) = Tab::ALL.iter().find(|t| t.shortcut() == c) {
                app.set_tab(*tab);
            }
        }
        (KeyCode::Char('y'), _) => {
            let action = app.copy_selection();
            app.apply_action(action);
        }
        _ => handle_view_key(app, key),
    }
}

fn handle_view_key(app: &mut App, key: KeyEvent) {
    match app.current_tab {
        Tab::Dashboard => {
            log::trace!("{} key {:?}", app.dashboard.id(), key.code);
            let action = app.dashboard.handle_key(key, &mut app.ctx);
            app.apply_action(action);
        }
        Tab::Cameras => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.move_cursor(true),
            KeyCode::Up | KeyCode::Char('k') => app.move_cursor(false),
            KeyCode::Char('S') => {
                app.filters.cycle_camera_status();
                app.clamp_cursors();
            }
            _ => {}
        },
        Tab::Hazards => {
            let action = match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    app.move_cursor(true);
                    Action::None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    app.move_cursor(false);
                    Action::None
                }
                KeyCode::Char('T') => {
                    app.filters.cycle_kind();
                    app.clamp_cursors();
                    Action::None
                }
                KeyCode::Char('L') => {
                    app.filters.cycle_severity();
                    app.clamp_cursors();
                    Action::None
                }
                KeyCode::Char('S') => {
                    app.filters.cycle_status();
                    app.clamp_cursors();
                    Action::None
                }
                KeyCode::Enter => cursor_action(app, |id| {
                    Action::Navigate(NavigateTarget::Hazard(id))
                }),
                KeyCode::Char('t') => cursor_action(app, |id| {
                    Action::SetHazardStatus(id, HazardStatus::Tracking)
                }),
                KeyCode::Char('x') => cursor_action(app, |id| {
                    Action::SetHazardStatus(id, HazardStatus::Resolved)
                }),
                KeyCode::Char('v') => cursor_action(app, Action::ViewFeed),
                _ => Action::None,
            };
            app.apply_action(action);
        }
        Tab::History => {}
    }
}

fn cursor_action(app: &App, make: impl FnOnce(String) -> Action) -> Action {
    app.cursor_hazard_id().map(make).unwrap_or(Action::None)
}

fn handle_text_input(app: &mut App, key: KeyEvent, apply: fn(&mut App)) {
    match key.code {
        KeyCode::Esc => app.exit_input(),
        KeyCode::Enter => apply(app),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

/// `size` is the full terminal area the frame was drawn into
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.settings_open || app.input_mode != InputMode::Normal {
        return;
    }
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, size, col, row),
        MouseEventKind::ScrollUp => handle_scroll(app, size, col, row, false),
        MouseEventKind::ScrollDown => handle_scroll(app, size, col, row, true),
        _ => {}
    }
}

fn handle_scroll(app: &mut App, size: Rect, col: u16, row: u16, forward: bool) {
    let areas = layout::areas(size);
    if rect_contains(areas.sidebar_nav, col, row) {
        app.cycle_tab(forward);
        return;
    }
    if !rect_contains(areas.main, col, row) {
        return;
    }
    if app.current_tab == Tab::Dashboard {
        let code = if forward { KeyCode::Down } else { KeyCode::Up };
        let action = app
            .dashboard
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut app.ctx);
        app.apply_action(action);
    } else {
        app.move_cursor(forward);
    }
}

fn handle_click(app: &mut App, size: Rect, col: u16, row: u16) {
    let areas = layout::areas(size);

    if rect_contains(areas.sidebar_nav, col, row) {
        let tab = row_at(areas.sidebar_nav, col, row, 0).and_then(|i| Tab::ALL.get(i).copied());
        if let Some(tab) = tab {
            app.set_tab(tab);
        }
        return;
    }
    if !rect_contains(areas.main, col, row) {
        return;
    }

    match app.current_tab {
        Tab::Dashboard => click_dashboard(app, areas.main, col, row),
        Tab::Cameras => click_cameras(app, areas.main, col, row),
        Tab::Hazards => click_hazards(app, areas.main, col, row),
        Tab::History => {}
    }
}

fn click_dashboard(app: &mut App, main: Rect, col: u16, row: u16) {
    let areas = layout::dashboard_areas(main);
    if let Some(idx) = row_at(areas.hazards, col, row, 1) {
        let action = app.dashboard.click_hazard_row(idx, &app.ctx);
        app.apply_action(action);
    } else if let Some(idx) = row_at(areas.alerts, col, row, 0) {
        app.dashboard.click_alert_row(idx, &app.ctx);
    }
}

fn click_cameras(app: &mut App, main: Rect, col: u16, row: u16) {
    let areas = layout::camera_areas(main);

    let chips = [
        None,
        Some(CameraStatus::Online),
        Some(CameraStatus::Offline),
        Some(CameraStatus::Maintenance),
    ];
    let slots = layout::filter_slots(areas.chips, chips.len() as u32);
    if let Some(idx) = slots.iter().position(|slot| rect_contains(*slot, col, row)) {
        app.filters.camera_status = chips[idx];
        app.clamp_cursors();
        return;
    }

    let cards = layout::camera_grid(areas.grid, app.visible_cameras().len());
    if let Some(idx) = cards.iter().position(|card| rect_contains(*card, col, row)) {
        app.set_cursor(idx);
    }
}

fn click_hazards(app: &mut App, main: Rect, col: u16, row: u16) {
    let areas = layout::list_areas(main);

    let slots = layout::filter_slots(areas.filters, 3);
    if let Some(idx) = slots.iter().position(|slot| rect_contains(*slot, col, row)) {
        match idx {
            0 => app.filters.cycle_kind(),
            1 => app.filters.cycle_severity(),
            _ => app.filters.cycle_status(),
        }
        app.clamp_cursors();
        return;
    }

    let Some(row_idx) = row_at(areas.list, col, row, 1) else {
        return;
    };
    // rows below the header; the table scrolls to keep the cursor visible
    let visible_height = usize::from(layout::rect_inner(areas.list).height.saturating_sub(1)).max(1);
    let offset = if app.hazard_cursor >= visible_height {
        app.hazard_cursor + 1 - visible_height
    } else {
        0
    };
    let clicked = offset + row_idx;
    let id = app.visible_hazards().get(clicked).map(|h| h.id.clone());
    if let Some(id) = id {
        app.set_cursor(clicked);
        app.apply_action(Action::Navigate(NavigateTarget::Hazard(id)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeConfig;
    use crate::domain::feed::Feed;

    fn app() -> App {
        App::new(RuntimeConfig::default(), Feed::sample())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, col: u16, row: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(app, mouse, Rect::new(0, 0, 140, 48));
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.current_tab, Tab::History);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.current_tab, Tab::Dashboard);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.current_tab, Tab::Dashboard);
        press(&mut app, KeyCode::Esc);
        assert!(!app.help_open);
    }

    #[test]
    fn test_typed_command_runs_on_enter() {
        let mut app = app();
        press(&mut app, KeyCode::Char(':'));
        for ch in "tab hist".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_tab, Tab::History);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.command.last.as_deref(), Some("tab hist"));
    }

    #[test]
    fn test_escape_cancels_search() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert!(app.filters.search.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_click_sidebar_nav_switches_tab() {
        let mut app = app();
        // logo on rows 0-2, nav border on row 3, entries from row 4
        click(&mut app, 4, 5);
        assert_eq!(app.current_tab, Tab::Cameras);
    }

    #[test]
    fn test_click_dashboard_row_selects_hazard() {
        let mut app = app();
        let size = Rect::new(0, 0, 140, 48);
        let table = layout::dashboard_areas(layout::areas(size).main).hazards;
        // border + header, then the third row
        click(&mut app, table.x + 4, table.y + 4);
        assert_eq!(app.selected_hazard.as_deref(), Some("HZ-003"));
    }
}
