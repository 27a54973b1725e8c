//! Charts module - bar layout and static rendering

mod layout;
mod renderer;

pub use layout::{Bar, BarLayout, TickAxis};
pub use renderer::StaticChartRenderer;
