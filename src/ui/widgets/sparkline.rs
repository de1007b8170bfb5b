//! Mini sparkline widget for inline metrics

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const BAR_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A compact inline sparkline (single line)
pub struct MiniSparkline<'a> {
    data: &'a [u64],
    max: Option<u64>,
    style: Style,
}

impl<'a> MiniSparkline<'a> {
    pub fn new(data: &'a [u64]) -> Self {
        Self {
            data,
            max: None,
            style: Style::default().fg(Color::Cyan),
        }
    }

    pub fn max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Scale `value` against `max` onto one of the eight bar glyphs
fn bar_char(value: u64, max: u64) -> char {
    let max = max.max(1);
    let scaled = ((value.min(max) as f64 / max as f64) * 7.0).round() as usize;
    BAR_CHARS[scaled.min(7)]
}

/// Trailing window of `data` that fits in `width` cells
fn window(data: &[u64], width: usize) -> &[u64] {
    let len = data.len().min(width);
    &data[data.len() - len..]
}

impl<'a> Widget for MiniSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.data.is_empty() {
            return;
        }

        let max = self
            .max
            .unwrap_or_else(|| self.data.iter().copied().max().unwrap_or(1));

        for (i, &value) in window(self.data, area.width as usize).iter().enumerate() {
            let x = area.x + i as u16;
            buf.get_mut(x, area.y)
                .set_char(bar_char(value, max))
                .set_style(self.style);
        }
    }
}

/// Format sparkline data as inline text (for status messages)
pub fn sparkline_text(data: &[u64], width: usize) -> String {
    let max = data.iter().copied().max().unwrap_or(1);
    window(data, width)
        .iter()
        .map(|&value| bar_char(value, max))
        .collect()
}
