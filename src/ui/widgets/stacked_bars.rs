//! Vertical bars with up to three stacked segments per column

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Widget},
};

const FILL: &str = "█";

pub struct StackedBar<'a> {
    pub label: &'a str,
    pub segments: [u64; 3],
}

impl StackedBar<'_> {
    fn total(&self) -> u64 {
        self.segments.iter().sum()
    }
}

pub struct StackedBars<'a> {
    bars: Vec<StackedBar<'a>>,
    colors: [Color; 3],
    bar_width: u16,
    gap: u16,
    block: Option<Block<'a>>,
}

impl<'a> StackedBars<'a> {
    pub fn new(bars: Vec<StackedBar<'a>>) -> Self {
        Self {
            bars,
            colors: [Color::Green, Color::Red, Color::Yellow],
            bar_width: 3,
            gap: 1,
            block: None,
        }
    }

    pub fn colors(mut self, colors: [Color; 3]) -> Self {
        self.colors = colors;
        self
    }

    pub fn bar_width(mut self, width: u16) -> Self {
        self.bar_width = width.max(1);
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

/// Cumulative segment heights, scaled so the tallest bar fills `height`
fn stack_heights(segments: [u64; 3], max: u64, height: u16) -> [u16; 3] {
    let max = max.max(1);
    let mut cumulative = 0;
    let mut out = [0; 3];
    for (slot, value) in out.iter_mut().zip(segments) {
        cumulative += value;
        *slot = ((cumulative as f64 / max as f64) * f64::from(height)).round() as u16;
    }
    out
}

impl Widget for StackedBars<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block.take() {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.height < 2 || inner.width == 0 || self.bars.is_empty() {
            return;
        }

        let chart_height = inner.height - 1;
        let label_y = inner.y + chart_height;
        let max = self.bars.iter().map(StackedBar::total).max().unwrap_or(1);
        let step = self.bar_width + self.gap;

        for (i, bar) in self.bars.iter().enumerate() {
            let x = inner.x + i as u16 * step;
            if x + self.bar_width > inner.x + inner.width {
                break;
            }

            let heights = stack_heights(bar.segments, max, chart_height);
            for level in 0..heights[2] {
                let segment = heights.iter().position(|h| level < *h).unwrap_or(2);
                let y = label_y - 1 - level;
                for dx in 0..self.bar_width {
                    buf.get_mut(x + dx, y)
                        .set_symbol(FILL)
                        .set_style(Style::default().fg(self.colors[segment]));
                }
            }

            let label: String = bar.label.chars().take(usize::from(step)).collect();
            buf.set_string(x, label_y, label, Style::default().fg(Color::DarkGray));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_heights_are_cumulative() {
        assert_eq!(stack_heights([28, 7, 4], 39, 39), [28, 35, 39]);
        assert_eq!(stack_heights([0, 0, 0], 0, 10), [0, 0, 0]);
    }

    #[test]
    fn test_render_colors_segments_bottom_up() {
        let area = Rect::new(0, 0, 2, 5);
        let mut buf = Buffer::empty(area);
        StackedBars::new(vec![StackedBar {
            label: "06",
            segments: [2, 1, 1],
        }])
        .bar_width(1)
        .gap(0)
        .render(area, &mut buf);

        assert_eq!(buf.get(0, 4).symbol(), "0");
        assert_eq!(buf.get(0, 3).fg, Color::Green);
        assert_eq!(buf.get(0, 2).fg, Color::Green);
        assert_eq!(buf.get(0, 1).fg, Color::Red);
        assert_eq!(buf.get(0, 0).fg, Color::Yellow);
    }
}
