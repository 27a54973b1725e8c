//! Scheduling Performance Data
//! The fixed figures plotted by the chart: three algorithms, two metrics.

use crate::error::ChartError;

/// Algorithm names, in plotting order.
pub const ALGORITHMS: [&str; 3] = ["FCFS", "SJF (Non-Preemptive)", "Round Robin"];

pub const AVERAGE_WAITING_TIME: [f64; 3] = [8.6, 4.0, 12.6];
pub const AVERAGE_TURNAROUND_TIME: [f64; 3] = [12.8, 8.2, 16.8];

/// matplotlib 'b'
pub const WAITING_COLOR: [u8; 3] = [0, 0, 255];
/// matplotlib 'g'
pub const TURNAROUND_COLOR: [u8; 3] = [0, 128, 0];

/// One bar series: a legend label, a fill colour and one value per category.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub color: [u8; 3],
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: &str, color: [u8; 3], values: &[f64]) -> Self {
        Self {
            label: label.to_string(),
            color,
            values: values.to_vec(),
        }
    }
}

/// Categories plus the series plotted against them, aligned by index.
#[derive(Debug, Clone)]
pub struct PerformanceData {
    categories: Vec<String>,
    series: Vec<Series>,
}

impl Default for PerformanceData {
    fn default() -> Self {
        Self::scheduling_algorithms()
    }
}

impl PerformanceData {
    /// Build a dataset, rejecting any series whose length differs from the
    /// number of categories.
    pub fn new(categories: Vec<String>, series: Vec<Series>) -> Result<Self, ChartError> {
        let expected = categories.len();
        if let Some(bad) = series.iter().find(|s| s.values.len() != expected) {
            return Err(ChartError::SeriesLengthMismatch {
                series: bad.label.clone(),
                expected,
                actual: bad.values.len(),
            });
        }
        Ok(Self { categories, series })
    }

    /// The built-in comparison of FCFS, non-preemptive SJF and Round Robin.
    pub fn scheduling_algorithms() -> Self {
        Self {
            categories: ALGORITHMS.iter().map(|s| s.to_string()).collect(),
            series: vec![
                Series::new("Average Waiting Time", WAITING_COLOR, &AVERAGE_WAITING_TIME),
                Series::new(
                    "Average Turnaround Time",
                    TURNAROUND_COLOR,
                    &AVERAGE_TURNAROUND_TIME,
                ),
            ],
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Legend entries in drawing order.
    pub fn legend_labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }

    /// Largest value across all series, or 0.0 when there is none.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| !v.is_nan())
            .fold(0.0, f64::max)
    }
}
