//! Custom widgets

mod sparkline;
mod stacked_bars;

pub use sparkline::{sparkline_text, MiniSparkline};
pub use stacked_bars::{StackedBar, StackedBars};
