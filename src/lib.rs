//! Scheduling Chart - renders average waiting and turnaround times of
//! FCFS, non-preemptive SJF and Round Robin as a grouped bar chart.

pub mod charts;
pub mod config;
pub mod data;
pub mod display;
pub mod error;

pub use charts::{BarLayout, StaticChartRenderer};
pub use config::ChartConfig;
pub use data::{PerformanceData, Series};
pub use error::ChartError;

use std::path::PathBuf;

/// Render the built-in chart, save it, and show it if `config.show` is set.
pub fn run(config: &ChartConfig) -> Result<PathBuf, ChartError> {
    let data = PerformanceData::scheduling_algorithms();
    let path = StaticChartRenderer::render_to_file(&data, config)?;
    if config.show {
        display::show(&path);
    }
    Ok(path)
}
