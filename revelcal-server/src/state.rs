use std::sync::Arc;

use anyhow::{Context, Result};
use revelcal_core::trip::load_trips;
use revelcal_core::{ExportConfig, Trip};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ExportConfig>,
    // Trips are a read-only snapshot loaded at startup
    pub trips: Arc<Vec<Trip>>,
}

impl AppState {
    pub fn new(config: ExportConfig) -> Result<Self> {
        let trips = load_trips(&config.trips_file)
            .with_context(|| format!("Failed to load trips from {}", config.trips_file.display()))?;
        Ok(AppState::with_trips(config, trips))
    }

    pub fn with_trips(config: ExportConfig, trips: Vec<Trip>) -> Self {
        AppState {
            config: Arc::new(config),
            trips: Arc::new(trips),
        }
    }
}
