//! Bar Layout
//! Maps categories and series to x-coordinates for a grouped bar chart.
//!
//! Series `s` of category `i` is centred at `i + s * bar_width`, so the bars
//! of one group sit edge to edge. Tick labels mark the middle of each group.

use crate::data::PerformanceData;
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;
use std::ops::Range;

/// Fraction of the y range left empty above the tallest bar.
const Y_MARGIN: f64 = 0.05;
/// Tolerance when matching an axis value back to a tick.
const TICK_EPS: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct BarLayout {
    bar_width: f64,
    n_categories: usize,
    n_series: usize,
}

/// One bar ready to draw, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub series: usize,
    pub category: usize,
    /// Centre of the bar.
    pub x: f64,
    pub left: f64,
    pub right: f64,
    pub height: f64,
}

impl BarLayout {
    pub fn new(data: &PerformanceData, bar_width: f64) -> Self {
        Self {
            bar_width,
            n_categories: data.categories().len(),
            n_series: data.series().len(),
        }
    }

    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    /// Bar centres for one series: `r1 = [0, 1, ..]`, `r2 = r1 + width`, ...
    pub fn positions(&self, series: usize) -> Vec<f64> {
        (0..self.n_categories)
            .map(|i| i as f64 + series as f64 * self.bar_width)
            .collect()
    }

    /// Tick positions, one per category, at the middle of its group.
    pub fn tick_centers(&self) -> Vec<f64> {
        let offset = self.n_series.saturating_sub(1) as f64 * self.bar_width / 2.0;
        (0..self.n_categories).map(|i| i as f64 + offset).collect()
    }

    /// Every bar of every series, series-major.
    pub fn bars(&self, data: &PerformanceData) -> Vec<Bar> {
        let half = self.bar_width / 2.0;
        data.series()
            .iter()
            .enumerate()
            .flat_map(|(s, series)| {
                self.positions(s)
                    .into_iter()
                    .zip(series.values.iter().copied())
                    .enumerate()
                    .map(move |(i, (x, height))| Bar {
                        series: s,
                        category: i,
                        x,
                        left: x - half,
                        right: x + half,
                        height,
                    })
            })
            .collect()
    }

    /// One category slot per group, each group centred in its slot.
    pub fn x_range(&self) -> Range<f64> {
        let offset = self.n_series.saturating_sub(1) as f64 * self.bar_width / 2.0;
        (offset - 0.5)..(self.n_categories as f64 - 0.5 + offset)
    }

    pub fn y_range(&self, data: &PerformanceData) -> Range<f64> {
        let max = data.max_value();
        let top = if max > 0.0 { max * (1.0 + Y_MARGIN) } else { 1.0 };
        0.0..top
    }

    /// X coordinate for plotters: the same range, labelled only at tick centres.
    pub fn x_axis(&self) -> TickAxis {
        TickAxis {
            inner: self.x_range().into(),
            ticks: self.tick_centers(),
        }
    }

    /// Index of the tick at `x`, if `x` is one of the tick centres.
    pub fn tick_index(&self, x: f64) -> Option<usize> {
        self.tick_centers()
            .iter()
            .position(|&t| (t - x).abs() < TICK_EPS)
    }
}

/// Linear f64 axis whose key points are the group centres and nothing else.
pub struct TickAxis {
    inner: RangedCoordf64,
    ticks: Vec<f64>,
}

impl Ranged for TickAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            Vec::new()
        } else {
            self.ticks.clone()
        }
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BAR_WIDTH;

    fn layout() -> (PerformanceData, BarLayout) {
        let data = PerformanceData::scheduling_algorithms();
        let layout = BarLayout::new(&data, BAR_WIDTH);
        (data, layout)
    }

    #[test]
    fn test_waiting_bars_at_category_index() {
        let (_, layout) = layout();
        assert_eq!(layout.positions(0), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_turnaround_bars_offset_by_width() {
        let (_, layout) = layout();
        let r2 = layout.positions(1);
        for (i, x) in r2.iter().enumerate() {
            assert_eq!(*x, i as f64 + 0.35);
        }
    }

    #[test]
    fn test_tick_centers_between_pair() {
        let (_, layout) = layout();
        let ticks = layout.tick_centers();
        assert_eq!(ticks.len(), 3);
        for (i, t) in ticks.iter().enumerate() {
            assert!((t - (i as f64 + 0.175)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_bar_heights_match_series() {
        let (data, layout) = layout();
        let bars = layout.bars(&data);
        assert_eq!(bars.len(), 6);
        let waiting: Vec<f64> = bars.iter().filter(|b| b.series == 0).map(|b| b.height).collect();
        let turnaround: Vec<f64> = bars.iter().filter(|b| b.series == 1).map(|b| b.height).collect();
        assert_eq!(waiting, vec![8.6, 4.0, 12.6]);
        assert_eq!(turnaround, vec![12.8, 8.2, 16.8]);
    }

    #[test]
    fn test_pairs_touch_and_groups_are_separated() {
        let (data, layout) = layout();
        let bars = layout.bars(&data);
        for i in 0..3 {
            let w = bars.iter().find(|b| b.series == 0 && b.category == i).unwrap();
            let t = bars.iter().find(|b| b.series == 1 && b.category == i).unwrap();
            assert!((w.right - t.left).abs() < 1e-12);
            assert!(w.right <= t.left + 1e-12);
        }
        for i in 0..2 {
            let last = bars.iter().find(|b| b.series == 1 && b.category == i).unwrap();
            let next = bars.iter().find(|b| b.series == 0 && b.category == i + 1).unwrap();
            assert!((next.left - last.right - (1.0 - 2.0 * 0.35)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ranges_contain_every_bar() {
        let (data, layout) = layout();
        let x = layout.x_range();
        let y = layout.y_range(&data);
        for bar in layout.bars(&data) {
            assert!(bar.left > x.start && bar.right < x.end);
            assert!(bar.height < y.end);
        }
        assert_eq!(y.start, 0.0);
        assert!((y.end - 16.8 * 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_x_axis_key_points_are_tick_centers() {
        let (_, layout) = layout();
        let axis = layout.x_axis();
        assert_eq!(axis.key_points(10usize), layout.tick_centers());
        assert_eq!(axis.range(), layout.x_range());
    }

    #[test]
    fn test_x_axis_maps_range_onto_pixels() {
        let (_, layout) = layout();
        let axis = layout.x_axis();
        let x = layout.x_range();
        assert_eq!(axis.map(&x.start, (0, 600)), 0);
        assert_eq!(axis.map(&x.end, (0, 600)), 600);
    }

    #[test]
    fn test_tick_index_lookup() {
        let (_, layout) = layout();
        assert_eq!(layout.tick_index(0.175), Some(0));
        assert_eq!(layout.tick_index(2.175), Some(2));
        assert_eq!(layout.tick_index(0.5), None);
    }
}
