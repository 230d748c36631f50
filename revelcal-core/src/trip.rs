//! Trip and venue input types.
//!
//! These are read-only snapshots handed over by whatever owns trip storage.
//! The engine never validates them; missing fields deserialize to empty
//! values and flow through to the output unchanged.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{CalExportError, CalExportResult};

/// A place a trip visits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    /// Canonical location for the trip this venue is attached to.
    pub is_primary: bool,
}

/// A scheduled trip with its venues already loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trip {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub blurb: String,
    /// Wall-clock start, not necessarily UTC.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub venues: Vec<Venue>,
}

/// Read a JSON array of trips.
pub fn load_trips(path: &Path) -> CalExportResult<Vec<Trip>> {
    let content = std::fs::read_to_string(path)?;
    let trips: Vec<Trip> = serde_json::from_str(&content).map_err(|e| {
        CalExportError::TripData(format!("{}: {e}", path.display()))
    })?;

    tracing::debug!(path = %path.display(), count = trips.len(), "loaded trips");
    Ok(trips)
}

pub fn find_trip(trips: &[Trip], id: i64) -> CalExportResult<&Trip> {
    trips
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| CalExportError::TripNotFound(id.to_string()))
}
