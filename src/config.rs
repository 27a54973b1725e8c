//! Render settings. Defaults reproduce the fixed chart; nothing reads these
//! from the environment or the command line.

use std::path::PathBuf;

pub const OUTPUT_FILE: &str = "scheduling_algorithms_performance.png";

/// matplotlib's default figure: 6.4 x 4.8 inches at 100 DPI.
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

pub const BAR_WIDTH: f64 = 0.35;

pub const TITLE: &str = "Average Waiting Time and Turnaround Time for Scheduling Algorithms";
pub const X_DESC: &str = "Algorithms";
pub const Y_DESC: &str = "Time (in units)";

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bar_width: f64,
    /// Hand the saved file to the system image viewer.
    pub show: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_FILE),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bar_width: BAR_WIDTH,
            show: true,
        }
    }
}

impl ChartConfig {
    /// Same chart, written elsewhere and never shown.
    pub fn headless(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            show: false,
            ..Default::default()
        }
    }
}
