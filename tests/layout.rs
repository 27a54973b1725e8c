//! Chart geometry for the built-in dataset, checked without rasterising.

use plotters::coord::ranged1d::Ranged;
use sched_chart::config::BAR_WIDTH;
use sched_chart::{BarLayout, ChartConfig, PerformanceData};

#[test]
fn test_x_axis_ticks_only_at_group_centres() {
    let data = PerformanceData::scheduling_algorithms();
    let layout = BarLayout::new(&data, BAR_WIDTH);

    let ticks = layout.x_axis().key_points(data.categories().len());

    assert_eq!(ticks.len(), 3);
    for (i, x) in ticks.iter().enumerate() {
        assert!((x - (i as f64 + 0.175)).abs() < 1e-12);
        assert_eq!(layout.tick_index(*x), Some(i));
    }
}

#[test]
fn test_bar_positions_and_heights() {
    let data = PerformanceData::scheduling_algorithms();
    let layout = BarLayout::new(&data, ChartConfig::default().bar_width);
    let bars = layout.bars(&data);

    let expected = [
        (0, 0, 0.0, 8.6),
        (0, 1, 1.0, 4.0),
        (0, 2, 2.0, 12.6),
        (1, 0, 0.35, 12.8),
        (1, 1, 1.35, 8.2),
        (1, 2, 2.35, 16.8),
    ];
    assert_eq!(bars.len(), expected.len());
    for (bar, (series, category, x, height)) in bars.iter().zip(expected) {
        assert_eq!(bar.series, series);
        assert_eq!(bar.category, category);
        assert!((bar.x - x).abs() < 1e-12, "bar {bar:?} not at {x}");
        assert_eq!(bar.height, height);
    }
}

#[test]
fn test_legend_entries() {
    let data = PerformanceData::scheduling_algorithms();
    assert_eq!(
        data.legend_labels(),
        vec!["Average Waiting Time", "Average Turnaround Time"]
    );
}
