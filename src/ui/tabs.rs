//! Tab views: Dashboard, Cameras, Hazards, History

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, BarChart, Block, Borders, Cell, Chart, Dataset, GraphType, List, ListItem, ListState,
    Paragraph, Row, Table, TableState, Wrap,
};
use ratatui::Frame;

use super::layout;
use super::map;
use super::widgets::{MiniSparkline, StackedBar, StackedBars};
use crate::app::App;
use crate::domain::feed::{
    Camera, CameraStatus, Hazard, HazardKind, HazardStatus, Severity,
};
use crate::domain::metrics;
use crate::modules::dashboard::DashboardPanel;

pub const BIRDS: Color = Color::Green;
pub const DRONES: Color = Color::Red;
pub const DEBRIS: Color = Color::Yellow;
const RISK_BAR: Color = Color::Blue;

pub fn kind_color(kind: HazardKind) -> Color {
    match kind {
        HazardKind::Bird => BIRDS,
        HazardKind::Drone => DRONES,
        HazardKind::Debris => DEBRIS,
        HazardKind::Vehicle => Color::LightBlue,
    }
}

pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Critical => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
        Severity::High => Style::default().fg(Color::Red),
        Severity::Medium => Style::default().fg(Color::Yellow),
        Severity::Low => Style::default().fg(Color::Blue),
    }
}

pub fn hazard_status_color(status: HazardStatus) -> Color {
    match status {
        HazardStatus::Detected => Color::LightYellow,
        HazardStatus::Tracking => Color::Cyan,
        HazardStatus::Resolved => Color::Green,
    }
}

pub fn camera_status_color(status: CameraStatus) -> Color {
    match status {
        CameraStatus::Online => Color::Green,
        CameraStatus::Offline => Color::Red,
        CameraStatus::Maintenance => Color::Yellow,
    }
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub(super) fn panel_block<'a>(title: impl Into<Line<'a>>, active: bool) -> Block<'a> {
    let border_style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title.into())
        .border_style(border_style)
}

fn kind_cell(kind: HazardKind) -> Cell<'static> {
    Cell::from(Span::styled(
        format!("{} {}", kind.glyph(), kind.as_str()),
        Style::default().fg(kind_color(kind)),
    ))
}

fn severity_cell(severity: Severity) -> Cell<'static> {
    Cell::from(Span::styled(severity.as_str(), severity_style(severity)))
}

fn status_cell(status: HazardStatus) -> Cell<'static> {
    Cell::from(Span::styled(
        status.as_str(),
        Style::default().fg(hazard_status_color(status)),
    ))
}

/// Marker and row style for the selected hazard
fn selection(selected: bool) -> (&'static str, Style) {
    if selected {
        (
            "▶ ",
            Style::default()
                .bg(Color::Rgb(30, 41, 59))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default())
    }
}

fn stat_card(f: &mut Frame, area: Rect, label: &str, value: String, trend: Option<(&str, bool)>) {
    let mut lines = vec![Line::from(Span::styled(
        value,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some((text, up)) = trend {
        let (arrow, color) = if up {
            ("▲ ", Color::Green)
        } else {
            ("▼ ", Color::Red)
        };
        lines.push(Line::from(Span::styled(
            format!("{arrow}{text}"),
            Style::default().fg(color),
        )));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(dim())
        .title(Span::styled(label.to_string(), dim()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ----------------------------------------------------------------------------
// Dashboard
// ----------------------------------------------------------------------------

pub fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let areas = layout::dashboard_areas(area);

    stat_card(
        f,
        areas.stats[0],
        "Active Hazards",
        app.active_hazard_count().to_string(),
        Some(("+3 today", true)),
    );
    stat_card(
        f,
        areas.stats[1],
        "Online Cameras",
        format!("{}/{}", app.online_camera_count(), app.feed.cameras.len()),
        None,
    );
    stat_card(
        f,
        areas.stats[2],
        "Critical Alerts",
        app.critical_unacknowledged_count().to_string(),
        Some(("2 unresolved", false)),
    );
    draw_risk_card(f, areas.stats[3], app);

    map::draw_map(f, areas.map, app);
    draw_alerts(f, areas.alerts, app);
    draw_activity_chart(f, areas.activity, app);
    draw_active_hazards(f, areas.hazards, app);
    draw_risk_trend(f, areas.risk, app);
}

fn draw_risk_card(f: &mut Frame, area: Rect, app: &App) {
    let risk = app.feed.risk_now;
    let delta = format!("{:+} from avg", risk.delta_from_avg);
    stat_card(
        f,
        area,
        "Risk Score",
        format!("{}/100", risk.score),
        Some((delta.as_str(), risk.delta_from_avg > 0)),
    );

    let inner = layout::rect_inner(area);
    if inner.height < 3 {
        return;
    }
    let trend: Vec<u64> = app.feed.risk.iter().map(|s| u64::from(s.score)).collect();
    let spark = Rect {
        x: inner.x,
        y: inner.y + 2,
        width: inner.width.min(trend.len() as u16),
        height: 1,
    };
    f.render_widget(
        MiniSparkline::new(&trend)
            .max(100)
            .style(Style::default().fg(RISK_BAR)),
        spark,
    );
}

fn draw_alerts(f: &mut Frame, area: Rect, app: &App) {
    let active = app.dashboard.active_panel() == DashboardPanel::Alerts;

    let items: Vec<ListItem> = app
        .alerts()
        .iter()
        .map(|alert| {
            let (mark, text_style) = if alert.acknowledged {
                ("✓ ", dim())
            } else {
                ("● ", Style::default().fg(Color::White))
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, severity_style(alert.severity)),
                Span::styled(alert.title.clone(), text_style),
                Span::styled(format!("  {}", alert.timestamp), dim()),
                Span::styled(format!("  {}", alert.message), dim()),
            ]))
        })
        .collect();

    let pending = app.alerts().iter().filter(|a| !a.acknowledged).count();
    let list = List::new(items)
        .block(panel_block(format!("Recent Alerts ({pending} new)"), active))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if active {
        state.select(Some(app.dashboard.alert_cursor()));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_activity_chart(f: &mut Frame, area: Rect, app: &App) {
    let hourly = &app.feed.hourly;
    let series = |pick: fn(&crate::domain::feed::HourlySample) -> u32| -> Vec<(f64, f64)> {
        hourly
            .iter()
            .enumerate()
            .map(|(i, sample)| (i as f64, f64::from(pick(sample))))
            .collect()
    };
    let birds = series(|s| s.birds);
    let drones = series(|s| s.drones);
    let debris = series(|s| s.debris);

    let y_max = hourly
        .iter()
        .map(|s| s.birds.max(s.drones).max(s.debris))
        .max()
        .unwrap_or(1)
        .max(1);
    let x_max = hourly.len().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<Span> = match (hourly.first(), hourly.get(hourly.len() / 2), hourly.last()) {
        (Some(first), Some(mid), Some(last)) => vec![
            Span::raw(first.hour.clone()),
            Span::raw(mid.hour.clone()),
            Span::raw(last.hour.clone()),
        ],
        _ => Vec::new(),
    };

    let datasets = vec![
        line_dataset("Birds", BIRDS, &birds),
        line_dataset("Drones", DRONES, &drones),
        line_dataset("Debris", DEBRIS, &debris),
    ];

    let chart = Chart::new(datasets)
        .block(panel_block("Hazard Activity (24h)", false))
        .x_axis(
            Axis::default()
                .style(dim())
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(dim())
                .bounds([0.0, f64::from(y_max)])
                .labels(vec![Span::raw("0"), Span::raw(y_max.to_string())]),
        );
    f.render_widget(chart, area);
}

fn line_dataset<'a>(name: &'static str, color: Color, data: &'a [(f64, f64)]) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

fn draw_risk_trend(f: &mut Frame, area: Rect, app: &App) {
    let data: Vec<(&str, u64)> = app
        .feed
        .risk
        .iter()
        .map(|s| (s.time.as_str(), u64::from(s.score.min(100))))
        .collect();

    let slots = data.len().max(1) as u16;
    let bar_width = (area.width.saturating_sub(2) / slots).saturating_sub(1).max(1);

    let chart = BarChart::default()
        .block(panel_block("Risk Score Trend", false))
        .data(data.as_slice())
        .bar_width(bar_width)
        .bar_gap(1)
        .max(100)
        .bar_style(Style::default().fg(RISK_BAR))
        .value_style(Style::default().fg(Color::White).bg(RISK_BAR))
        .label_style(dim());
    f.render_widget(chart, area);
}

fn draw_active_hazards(f: &mut Frame, area: Rect, app: &App) {
    let active = app.dashboard.active_panel() == DashboardPanel::Hazards;

    let rows: Vec<Row> = app
        .dashboard_hazards()
        .iter()
        .map(|hazard| {
            let (marker, style) = selection(app.is_selected(hazard));
            Row::new(vec![
                Cell::from(marker),
                kind_cell(hazard.kind),
                Cell::from(hazard.location.clone()),
                Cell::from(format!("{}%", hazard.confidence)),
                severity_cell(hazard.severity),
                status_cell(hazard.status),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec!["", "Type", "Location", "Confidence", "Severity", "Status"])
        .style(dim().add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Length(2),
        Constraint::Length(10),
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel_block(
            format!("Active Hazards ({} active)", app.active_hazard_count()),
            active,
        ))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if active {
        state.select(Some(app.dashboard.hazard_cursor()));
    }
    f.render_stateful_widget(table, area, &mut state);
}

// ----------------------------------------------------------------------------
// Cameras
// ----------------------------------------------------------------------------

fn chip(label: String, active: bool) -> Paragraph<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Paragraph::new(Line::from(Span::styled(format!(" {label} "), style)))
}

pub fn draw_cameras(f: &mut Frame, area: Rect, app: &App) {
    let areas = layout::camera_areas(area);
    let bar = areas.chips;
    let grid_area = areas.grid;

    f.render_widget(panel_block("Camera Feeds", false), bar);
    let cameras = &app.feed.cameras;
    let mut chips = vec![chip(
        format!("All ({})", cameras.len()),
        app.filters.camera_status.is_none(),
    )];
    for status in CameraStatus::ALL {
        chips.push(chip(
            format!(
                "{} ({})",
                status.title(),
                metrics::camera_status_count(cameras, status)
            ),
            app.filters.camera_status == Some(status),
        ));
    }
    let slots = layout::filter_slots(bar, chips.len() as u32);
    for (widget, slot) in chips.into_iter().zip(slots) {
        f.render_widget(widget, slot);
    }

    let visible = app.visible_cameras();
    if visible.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No cameras match the filter", dim()))
                .block(panel_block("Cameras", false)),
            grid_area,
        );
        return;
    }
    let cards = layout::camera_grid(grid_area, visible.len());
    for (i, (camera, card)) in visible.iter().zip(cards).enumerate() {
        draw_camera_card(f, card, camera, app, i == app.camera_cursor);
    }
}

fn draw_camera_card(f: &mut Frame, area: Rect, camera: &Camera, app: &App, focused: bool) {
    let status_color = camera_status_color(camera.status);
    let linked = metrics::linked_active_hazards(&app.feed.hazards, &camera.id);

    let mut hazards = vec![
        Span::styled("Hazards ", dim()),
        Span::styled(
            camera.hazards.to_string(),
            if camera.hazards > 0 {
                Style::default().fg(Color::LightRed)
            } else {
                Style::default().fg(Color::White)
            },
        ),
    ];
    if linked as u32 != camera.hazards {
        hazards.push(Span::styled(format!("  ({linked} linked)"), dim()));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(camera.id.clone(), Style::default().fg(Color::White)),
            Span::styled(format!(" • {}", camera.location), dim()),
        ]),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(status_color)),
            Span::styled(camera.status.as_str(), Style::default().fg(status_color)),
        ]),
        Line::from(hazards),
        Line::from(Span::styled(format!("Updated {}", camera.last_update), dim())),
    ];

    let title = Span::styled(
        camera.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    );
    f.render_widget(
        Paragraph::new(lines)
            .block(panel_block(title, focused))
            .wrap(Wrap { trim: true }),
        area,
    );
}

// ----------------------------------------------------------------------------
// Hazards
// ----------------------------------------------------------------------------

fn select_label<T: Copy>(
    all: &str,
    current: Option<T>,
    title: impl Fn(T) -> &'static str,
    count: impl Fn(T) -> usize,
    total: usize,
) -> String {
    match current {
        Some(value) => format!("{} ({}) ▾", title(value), count(value)),
        None => format!("{all} ({total}) ▾"),
    }
}

pub fn draw_hazards(f: &mut Frame, area: Rect, app: &App) {
    let areas = layout::list_areas(area);
    let hazards = &app.feed.hazards;
    let filter = &app.filters.hazard;

    let bar = areas.filters;
    f.render_widget(panel_block("All Hazards", false), bar);
    let selects = [
        select_label(
            "All Types",
            filter.kind,
            |k: HazardKind| k.plural_title(),
            |k| metrics::hazard_kind_count(hazards, k),
            hazards.len(),
        ),
        select_label(
            "All Severities",
            filter.severity,
            |s: Severity| s.title(),
            |s| metrics::hazard_severity_count(hazards, s),
            hazards.len(),
        ),
        select_label(
            "All Statuses",
            filter.status,
            |s: HazardStatus| s.title(),
            |s| metrics::hazard_status_count(hazards, s),
            hazards.len(),
        ),
    ];
    let slots = layout::filter_slots(bar, selects.len() as u32);
    for (label, slot) in selects.into_iter().zip(slots) {
        f.render_widget(Paragraph::new(Span::raw(label)), slot);
    }

    draw_hazard_list(f, areas.list, app);
    draw_hazard_detail(f, areas.details, app);
}

fn draw_hazard_list(f: &mut Frame, area: Rect, app: &App) {
    let visible = app.visible_hazards();
    let rows: Vec<Row> = visible
        .iter()
        .map(|hazard| {
            let (marker, style) = selection(app.is_selected(hazard));
            Row::new(vec![
                Cell::from(marker),
                Cell::from(hazard.id.clone()),
                kind_cell(hazard.kind),
                Cell::from(hazard.location.clone()),
                Cell::from(hazard.camera.clone()),
                Cell::from(hazard.timestamp.clone()),
                severity_cell(hazard.severity),
                status_cell(hazard.status),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec![
        "", "Id", "Type", "Location", "Camera", "Time", "Severity", "Status",
    ])
    .style(dim().add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Length(2),
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Min(14),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(9),
    ];

    let title = format!("Hazards {}/{}", visible.len(), app.feed.hazards.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel_block(title, true))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if !visible.is_empty() {
        state.select(Some(app.hazard_cursor));
    }
    f.render_stateful_widget(table, area, &mut state);
}

fn detail_row(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![Span::styled(format!("{label:<12}"), dim()), value])
}

fn draw_hazard_detail(f: &mut Frame, area: Rect, app: &App) {
    let visible = app.visible_hazards();
    let Some(hazard) = visible.get(app.hazard_cursor).copied() else {
        f.render_widget(
            Paragraph::new(Span::styled("No hazards match the filter", dim()))
                .block(panel_block("Detail", false)),
            area,
        );
        return;
    };
    f.render_widget(
        Paragraph::new(hazard_detail_lines(hazard))
            .block(panel_block(hazard.id.clone(), false))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn hazard_detail_lines(hazard: &Hazard) -> Vec<Line<'static>> {
    let key = Style::default().fg(Color::Yellow);
    vec![
        Line::from(vec![
            Span::styled(
                format!("{} {}", hazard.kind.glyph(), hazard.kind.as_str()),
                Style::default()
                    .fg(kind_color(hazard.kind))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                hazard.severity.as_str().to_uppercase(),
                severity_style(hazard.severity),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} • {}", hazard.camera, hazard.timestamp),
            dim(),
        )),
        Line::from(""),
        detail_row("Location", Span::raw(hazard.location.clone())),
        detail_row("Confidence", Span::raw(format!("{}%", hazard.confidence))),
        detail_row(
            "Status",
            Span::styled(
                hazard.status.as_str(),
                Style::default().fg(hazard_status_color(hazard.status)),
            ),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("t", key),
            Span::raw(" Track  "),
            Span::styled("v", key),
            Span::raw(" View Feed  "),
            Span::styled("x", key),
            Span::raw(" Resolve"),
        ]),
        Line::from(vec![
            Span::styled("Enter", key),
            Span::raw(" Select  "),
            Span::styled("y", key),
            Span::raw(" Copy id"),
        ]),
    ]
}

// ----------------------------------------------------------------------------
// History
// ----------------------------------------------------------------------------

pub fn draw_history(f: &mut Frame, area: Rect, app: &App) {
    let areas = layout::history_areas(area);
    let history = &app.feed.history;

    stat_card(
        f,
        areas.stats[0],
        "Total Detections",
        history.total_detections.to_string(),
        None,
    );
    stat_card(
        f,
        areas.stats[1],
        "Avg Confidence",
        format!("{}%", history.avg_confidence),
        None,
    );
    stat_card(
        f,
        areas.stats[2],
        "Critical Events",
        history.critical_events.to_string(),
        None,
    );
    stat_card(
        f,
        areas.stats[3],
        "Avg Response Time",
        format!("{:.1} min", history.avg_response_minutes),
        None,
    );

    let bars: Vec<StackedBar> = app
        .feed
        .hourly
        .iter()
        .map(|s| StackedBar {
            label: s.hour.as_str(),
            segments: [u64::from(s.birds), u64::from(s.drones), u64::from(s.debris)],
        })
        .collect();

    let slots = bars.len().max(1) as u16;
    let step = (areas.chart.width.saturating_sub(2) / slots).max(1);

    let title = Line::from(vec![
        Span::raw(format!(
            "Historical Data {} to {}  ",
            history.range_start, history.range_end
        )),
        Span::styled("■ Birds ", Style::default().fg(BIRDS)),
        Span::styled("■ Drones ", Style::default().fg(DRONES)),
        Span::styled("■ Debris", Style::default().fg(DEBRIS)),
    ]);

    f.render_widget(
        StackedBars::new(bars)
            .colors([BIRDS, DRONES, DEBRIS])
            .bar_width(step.saturating_sub(1).max(1))
            .gap(u16::from(step > 1))
            .block(panel_block(title, false)),
        areas.chart,
    );
}
