pub mod config;
pub mod export;
pub mod links;
pub mod print;

use anyhow::{Context, Result};
use revelcal_core::trip::load_trips;
use revelcal_core::{ExportConfig, Trip};

fn trips(config: &ExportConfig) -> Result<Vec<Trip>> {
    load_trips(&config.trips_file)
        .with_context(|| format!("Failed to load trips from {}", config.trips_file.display()))
}
