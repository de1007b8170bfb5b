use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 22;
const CAMERA_COLUMNS: usize = 3;
const CAMERA_CARD_HEIGHT: u16 = 7;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub sidebar: Rect,
    pub sidebar_logo: Rect,
    pub sidebar_nav: Rect,
    pub sidebar_footer: Rect,
    pub header: Rect,
    pub main: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(size);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(columns[0]);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(columns[1]);

    UiAreas {
        size,
        sidebar: columns[0],
        sidebar_logo: sidebar_chunks[0],
        sidebar_nav: sidebar_chunks[1],
        sidebar_footer: sidebar_chunks[2],
        header: vertical[0],
        main: vertical[1],
        status_line: vertical[2],
        command_line: vertical[3],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardAreas {
    pub stats: [Rect; 4],
    pub map: Rect,
    pub alerts: Rect,
    pub activity: Rect,
    pub hazards: Rect,
    pub risk: Rect,
}

/// Stat cards, then map beside alerts, the two charts, and the hazard table
pub fn dashboard_areas(main: Rect) -> DashboardAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Min(8),
        ])
        .split(main);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    let overview = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[2]);

    DashboardAreas {
        stats: [stats[0], stats[1], stats[2], stats[3]],
        map: overview[0],
        alerts: overview[1],
        activity: charts[0],
        risk: charts[1],
        hazards: rows[3],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListAreas {
    pub filters: Rect,
    pub list: Rect,
    pub details: Rect,
}

/// Filter bar on top, list on the left, detail card on the right
pub fn list_areas(main: Rect) -> ListAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(main);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    ListAreas {
        filters: rows[0],
        list: columns[0],
        details: columns[1],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CameraAreas {
    pub chips: Rect,
    pub grid: Rect,
}

pub fn camera_areas(main: Rect) -> CameraAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(main);

    CameraAreas {
        chips: rows[0],
        grid: rows[1],
    }
}

/// Card rects for the camera grid, row-major. Cards that do not fit are dropped.
pub fn camera_grid(area: Rect, count: usize) -> Vec<Rect> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let card_width = area.width / CAMERA_COLUMNS as u16;
    (0..count)
        .map(|i| {
            let col = (i % CAMERA_COLUMNS) as u16;
            let row = (i / CAMERA_COLUMNS) as u16;
            Rect {
                x: area.x + col * card_width,
                y: area.y + row * CAMERA_CARD_HEIGHT,
                width: card_width,
                height: CAMERA_CARD_HEIGHT,
            }
        })
        .take_while(|rect| rect.y + rect.height <= area.y + area.height)
        .collect()
}

/// Equal-width slots inside a bordered filter bar (chips or selects)
pub fn filter_slots(area: Rect, count: u32) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count); count as usize];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rect_inner(area))
        .to_vec()
}

#[derive(Debug, Clone, Copy)]
pub struct HistoryAreas {
    pub stats: [Rect; 4],
    pub chart: Rect,
}

pub fn history_areas(main: Rect) -> HistoryAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(main);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    HistoryAreas {
        stats: [stats[0], stats[1], stats[2], stats[3]],
        chart: rows[1],
    }
}

pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

/// Row index under `y` for a bordered list, skipping `header` lines inside the border
pub fn row_at(rect: Rect, x: u16, y: u16, header: u16) -> Option<usize> {
    let inner = rect_inner(rect);
    if !rect_contains(inner, x, y) {
        return None;
    }
    let offset = y - inner.y;
    offset.checked_sub(header).map(usize::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas_tile_the_screen() {
        let size = Rect::new(0, 0, 120, 40);
        let areas = areas(size);
        assert_eq!(areas.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.header.x, SIDEBAR_WIDTH);
        assert_eq!(areas.command_line.y, 39);
        assert_eq!(areas.status_line.y, 38);
    }

    #[test]
    fn test_row_at_skips_border_and_header() {
        let table = Rect::new(10, 10, 30, 10);
        assert_eq!(row_at(table, 12, 10, 1), None);
        assert_eq!(row_at(table, 12, 11, 1), None);
        assert_eq!(row_at(table, 12, 12, 1), Some(0));
        assert_eq!(row_at(table, 12, 14, 1), Some(2));
        assert_eq!(row_at(table, 9, 14, 1), None);
    }

    #[test]
    fn test_filter_slots_split_inner_width() {
        let slots = filter_slots(Rect::new(0, 0, 62, 3), 3);
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0], Rect::new(1, 1, 20, 1));
        assert_eq!(slots[2].x, 41);
    }

    #[test]
    fn test_camera_grid_drops_cards_that_do_not_fit() {
        let grid = camera_grid(Rect::new(0, 0, 90, 14), 6);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[4], Rect::new(30, 7, 30, 7));
        assert_eq!(camera_grid(Rect::new(0, 0, 90, 10), 6).len(), 3);
    }
}
