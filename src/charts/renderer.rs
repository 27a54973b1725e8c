//! Static Chart Renderer
//! Draws the grouped bar chart into an in-memory RGB buffer and encodes it
//! as PNG.
//!
//! Layout:
//! 1. Title centred above the plot
//! 2. One group of bars per category, one bar per series
//! 3. Category names under each group, axis descriptions on both axes
//! 4. Horizontal grid lines and a legend in the upper-left corner

use crate::charts::BarLayout;
use crate::config::{ChartConfig, TITLE, X_DESC, Y_DESC};
use crate::data::PerformanceData;
use crate::error::ChartError;
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tracing::{debug, info};

const FONT: &str = "sans-serif";
const EDGE: RGBColor = RGBColor(128, 128, 128);
const GRID: RGBColor = RGBColor(176, 176, 176);

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart and return the encoded PNG bytes.
    pub fn render_png(
        data: &PerformanceData,
        config: &ChartConfig,
    ) -> Result<Vec<u8>, ChartError> {
        let (width, height) = (config.width, config.height);
        let mut buffer = vec![0u8; width as usize * height as usize * 3];

        Self::draw(data, config, &mut buffer)?;

        let img = RgbImage::from_raw(width, height, buffer)
            .ok_or(ChartError::BufferSize { width, height })?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart and write it to `config.output_path`, replacing any
    /// existing file. Nothing is written unless encoding succeeded.
    pub fn render_to_file(
        data: &PerformanceData,
        config: &ChartConfig,
    ) -> Result<PathBuf, ChartError> {
        let bytes = Self::render_png(data, config)?;
        let path = config.output_path.clone();
        fs::write(&path, &bytes).map_err(|source| ChartError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = bytes.len(), "chart saved");
        Ok(path)
    }

    fn draw(
        data: &PerformanceData,
        config: &ChartConfig,
        buffer: &mut [u8],
    ) -> Result<(), ChartError> {
        let layout = BarLayout::new(data, config.bar_width);
        let categories = data.categories();
        let ticks = layout.tick_centers();

        let root = BitMapBackend::with_buffer(buffer, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(ChartError::drawing)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, (FONT, 16))
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(layout.x_axis(), layout.y_range(data))
            .map_err(ChartError::drawing)?;

        let x_label = |x: &f64| tick_label(&layout, categories, *x);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(ticks.len())
            .x_label_formatter(&x_label)
            .bold_line_style(GRID.stroke_width(1))
            .light_line_style(WHITE)
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .axis_desc_style((FONT, 14))
            .label_style((FONT, 12))
            .draw()
            .map_err(ChartError::drawing)?;

        let bars = layout.bars(data);
        for (s, series) in data.series().iter().enumerate() {
            debug!(series = %series.label, values = ?series.values, "drawing series");
            let [r, g, b] = series.color;
            let fill = RGBColor(r, g, b);

            let rects = bars.iter().filter(|bar| bar.series == s).map(|bar| {
                Rectangle::new([(bar.left, 0.0), (bar.right, bar.height)], fill.filled())
            });
            chart
                .draw_series(rects)
                .map_err(ChartError::drawing)?
                .label(series.label.as_str())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 14, y + 5)], fill.filled())
                });

            let edges = bars.iter().filter(|bar| bar.series == s).map(|bar| {
                Rectangle::new(
                    [(bar.left, 0.0), (bar.right, bar.height)],
                    EDGE.stroke_width(1),
                )
            });
            chart.draw_series(edges).map_err(ChartError::drawing)?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(EDGE)
            .label_font((FONT, 12))
            .draw()
            .map_err(ChartError::drawing)?;

        root.present().map_err(ChartError::drawing)?;
        Ok(())
    }
}

/// Category name shown under the axis at `x`; empty away from tick centres.
pub(crate) fn tick_label(layout: &BarLayout, categories: &[String], x: f64) -> String {
    layout
        .tick_index(x)
        .and_then(|i| categories.get(i))
        .cloned()
        .unwrap_or_default()
}
