//! Calendar file endpoints

use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use revelcal_core::{CalExportError, ExportConfig};
use revelcal_core::export::{FEED_FILE_NAME, feed_calendar, trip_calendar};
use revelcal_core::trip::find_trip;

use crate::routes::AppError;
use crate::state::AppState;

const ICS_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// Downloads are served under the same prefix calendar links point at.
pub fn router(config: &ExportConfig) -> Router<AppState> {
    let route = format!("{}/{{file}}", config.ics_url_prefix());
    Router::new().route(&route, get(download))
}

/// GET /<ics_dir>/:file - `<trip-id>.ics` for one trip, `trips.ics` for all of them
async fn download(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response, AppError> {
    let calendar = if file == FEED_FILE_NAME {
        feed_calendar(&state.config, &state.trips)
    } else {
        let id = file
            .strip_suffix(".ics")
            .and_then(|stem| stem.parse::<i64>().ok())
            .ok_or_else(|| CalExportError::TripNotFound(file.clone()))?;
        trip_calendar(&state.config, find_trip(&state.trips, id)?)
    };

    tracing::debug!(%file, events = calendar.events.len(), "streaming calendar");

    let headers = [
        (header::CONTENT_TYPE, ICS_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file}\""),
        ),
    ];
    Ok((headers, calendar.to_ics_string()).into_response())
}
