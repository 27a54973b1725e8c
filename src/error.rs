//! Error types for chart rendering.

use plotters::drawing::DrawingAreaErrorKind;
use plotters_backend::DrawingErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Drawing failed: {0}")]
    Drawing(String),
    #[error("No usable font: {0}")]
    Font(String),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Pixel buffer does not match a {width}x{height} image")]
    BufferSize { width: u32, height: u32 },
    #[error("Series '{series}' has {actual} values, expected {expected}")]
    SeriesLengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },
}

impl ChartError {
    /// Wrap a plotters drawing-area error, keeping font failures apart.
    pub(crate) fn drawing<E>(err: DrawingAreaErrorKind<E>) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        match err {
            DrawingAreaErrorKind::BackendError(DrawingErrorKind::FontError(e)) => {
                ChartError::Font(e.to_string())
            }
            other => ChartError::Drawing(other.to_string()),
        }
    }
}
