//! Scheduling Chart - saves `scheduling_algorithms_performance.png` in the
//! current directory and opens it.

use anyhow::{Context, Result};
use sched_chart::ChartConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ChartConfig::default();
    sched_chart::run(&config).context("failed to render scheduling performance chart")?;
    Ok(())
}
