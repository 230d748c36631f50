//! Per-trip link and export endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use revelcal_core::export::export_trip;
use revelcal_core::trip::find_trip;
use revelcal_core::{CalendarLinks, LinkBuilder};
use serde::Serialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips/{id}/links", get(links))
        .route("/trips/{id}/export", post(export))
}

/// GET /trips/:id/links - Google, Yahoo and ICS links for a trip
async fn links(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CalendarLinks>, AppError> {
    let trip = find_trip(&state.trips, id)?;
    Ok(Json(LinkBuilder::new(&state.config).build(trip)))
}

#[derive(Serialize)]
pub struct ExportResult {
    pub path: String,
    pub link: String,
}

/// POST /trips/:id/export - Regenerate the trip's static .ics file
async fn export(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ExportResult>, AppError> {
    let trip = find_trip(&state.trips, id)?.clone();
    let link = LinkBuilder::new(&state.config).ics_path(&trip);
    let config = state.config.clone();

    let path = tokio::task::spawn_blocking(move || export_trip(&config, &trip)).await??;
    tracing::info!(trip = id, path = %path.display(), "exported trip calendar");

    Ok(Json(ExportResult {
        path: path.to_string_lossy().to_string(),
        link,
    }))
}
