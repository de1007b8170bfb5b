use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod map;
pub mod tabs;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel, Tab};
use crate::config;

pub const TITLE: &str = "Airport Hazard Detection System";
pub const SEARCH_PLACEHOLDER: &str = "Search cameras, hazards...";

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_sidebar(f, &areas, app);
    draw_header(f, areas.header, app);

    match app.current_tab {
        Tab::Dashboard => tabs::draw_dashboard(f, areas.main, app),
        Tab::Cameras => tabs::draw_cameras(f, areas.main, app),
        Tab::Hazards => tabs::draw_hazards(f, areas.main, app),
        Tab::History => tabs::draw_history(f, areas.main, app),
    }

    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
    if app.settings_open {
        draw_settings_popup(f, areas.size, app);
    }
}

fn draw_sidebar(f: &mut Frame, areas: &layout::UiAreas, app: &App) {
    let logo = Paragraph::new(Line::from(vec![
        Span::styled("◆ ", Style::default().fg(Color::LightBlue)),
        Span::styled(
            "RunwayWatcher",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(logo, areas.sidebar_logo);

    let items: Vec<ListItem> = Tab::ALL
        .iter()
        .map(|tab| {
            let is_active = *tab == app.current_tab;
            let style = if is_active {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", tab.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(tab.title()),
                Span::raw(if is_active { " *" } else { "" }),
            ]))
            .style(style)
        })
        .collect();

    let nav = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Views")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(nav, areas.sidebar_nav);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Green)),
        Span::raw("System Online"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, areas.sidebar_footer);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Min(10),
            Constraint::Length(32),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(app.feed.site.display(), Style::default().fg(Color::DarkGray)),
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let search = match app.filters.search.as_deref() {
        Some(text) => Span::styled(format!("/ {text}"), Style::default().fg(Color::White)),
        None => Span::styled(
            format!("/ {SEARCH_PLACEHOLDER}"),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let middle = Paragraph::new(Line::from(search)).block(Block::default().borders(Borders::ALL));

    let live = if app.paused {
        Span::styled("❚❚ PAUSED", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            "● LIVE",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )
    };
    let critical = app.critical_unacknowledged_count();
    let bell_style = if critical > 0 {
        Style::default().fg(Color::LightRed)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let right = Paragraph::new(Line::from(vec![
        live,
        Span::raw("  "),
        Span::styled(format!("Bell {critical}"), bell_style),
        Span::raw("  "),
        Span::styled(
            app.now.format("%H:%M:%S").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Right);

    f.render_widget(left, chunks[0]);
    f.render_widget(middle, chunks[1]);
    f.render_widget(right, chunks[2]);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("View ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.current_tab.title())),
        Span::styled("Active ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.active_hazard_count())),
        Span::styled("Selected ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(
            "{}  ",
            app.selected_hazard.as_deref().unwrap_or("--")
        )),
        Span::styled("API ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.config.api_url.clone()),
    ];
    if let Some(filter) = app.filters.describe() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Filter ",
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(filter));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("tab", "Switch view: dashboard, cameras, hazards, history"),
        ("select", "Select hazard by id"),
        ("ack", "Acknowledge alert by id"),
        ("track", "Mark hazard as tracking"),
        ("resolve", "Mark hazard as resolved"),
        ("detect", "Reopen hazard as detected"),
        ("filter", "Filter: type: severity: status: camera: | clear"),
        ("search", "Search cameras and hazards"),
        ("export", "Export csv | json"),
        ("summary", "Situation summary"),
        ("config", "Show API url and its source"),
        ("pause", "Pause/resume live view"),
        ("quit", "Quit"),
    ];

    let word = input.split_whitespace().next().unwrap_or("");
    commands
        .iter()
        .find(|(cmd, _)| cmd.starts_with(word))
        .map(|(_, desc)| *desc)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            let hint_text = hint.unwrap_or("tab | select | ack | track | resolve | filter | export");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(&app.command.input),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Search => Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::LightCyan)),
            Span::raw(&app.command.input),
            Span::styled(
                "  (Enter=apply, empty=clear, Esc=cancel)",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();
    let mut hint = |k: &'static str, label: &'static str| {
        spans.push(Span::styled(k, key));
        spans.push(Span::styled(format!(" {label}  "), text));
    };

    match app.current_tab {
        Tab::Dashboard => {
            hint("Tab", "panel");
            hint("j/k", "move");
            hint("Enter", "select");
            hint("a", "ack");
            hint("t/x", "track/resolve");
            hint("v", "feed");
        }
        Tab::Cameras => {
            hint("j/k", "move");
            hint("S", "status chip");
        }
        Tab::Hazards => {
            hint("j/k", "move");
            hint("Enter", "select");
            hint("t/x", "track/resolve");
            hint("v", "feed");
            hint("T/L/S", "type/severity/status");
        }
        Tab::History => {}
    }
    hint("/", "search");
    hint(":", "command");
    hint("?", "help");
    hint("q", "quit");
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(72, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-4        Jump to view"),
        Line::from("  [ / ]      Prev/Next view"),
        Line::from("  j / k      Move cursor"),
        Line::from("  Tab        Switch dashboard panel"),
        Line::from("  Enter      Select hazard"),
        Line::from("  Esc        Close / cancel"),
        Line::from("  Mouse      Click nav, rows, chips, cards"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  a          Acknowledge alert"),
        Line::from("  t          Track hazard"),
        Line::from("  x          Resolve hazard"),
        Line::from("  v          View camera feed"),
        Line::from("  y          Copy selected hazard id"),
        Line::from("  T / L / S  Cycle type / severity / status filter"),
        Line::from("  /          Search"),
        Line::from("  Space      Pause/Resume"),
        Line::from("  s          Settings"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :tab hazards   :select HZ-002   :ack ALT-001"),
        Line::from("  :track HZ-003  :resolve HZ-002  :export csv|json"),
        Line::from("  :filter type:bird severity:high status:tracking camera:CAM-001"),
        Line::from("  :filter clear  :search apron    :summary  :config"),
        Line::from(""),
        Line::from(format!("Active view: {}", app.current_tab.title())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn draw_settings_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(72, 50, area);
    f.render_widget(Clear, popup_area);

    let display = |path: Option<&std::path::Path>| {
        path.map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unknown)".to_string())
    };
    let label = |text: &'static str| Span::styled(format!("{text:<12}"), Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(vec![label("API url"), Span::raw(app.config.api_url.clone())]),
        Line::from(vec![label("Source"), Span::raw(app.config.source.title())]),
        Line::from(vec![label("Airport"), Span::raw(app.feed.site.display())]),
        Line::from(""),
        Line::from(vec![label("Config"), Span::raw(display(app.config_path.as_deref()))]),
        Line::from(vec![label("Log file"), Span::raw(display(config::log_path().as_deref()))]),
        Line::from(vec![
            label("Exports"),
            Span::raw(app.export_dir.display().to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Precedence: --api-url, RUNWAY_API_URL, --runtime-script, config api_url, default",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Esc / s to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Settings").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
