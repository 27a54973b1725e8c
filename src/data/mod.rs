//! Data module - fixed scheduling performance figures

mod performance;

pub use performance::{PerformanceData, Series};
