pub mod ical;
pub mod trips;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use revelcal_core::CalExportError;
use serde::Serialize;

use crate::state::AppState;

/// All routes, with state attached.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(ical::router(&state.config))
        .merge(trips::router())
        .with_state(state)
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert anyhow errors to HTTP responses
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0.downcast_ref::<CalExportError>() {
            Some(CalExportError::TripNotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use revelcal_core::{ExportConfig, Trip, Venue};

    use crate::state::AppState;

    pub fn state_with(config: ExportConfig) -> AppState {
        let day = NaiveDate::from_ymd_opt(2024, 10, 5).unwrap();
        let trip = Trip {
            id: 42,
            slug: "fall-foliage".into(),
            title: "Fall Foliage Tour".into(),
            start: day.and_hms_opt(8, 0, 0).unwrap(),
            end: day.and_hms_opt(20, 0, 0).unwrap(),
            venues: vec![Venue {
                name: "Town Hall".into(),
                address: "1 Main St".into(),
                city: "Springfield".into(),
                state: "NY".into(),
                zip: "12345".into(),
                is_primary: true,
                ..Venue::default()
            }],
            ..Trip::default()
        };
        let other = Trip {
            id: 7,
            slug: "spring-gardens".into(),
            title: "Spring Gardens".into(),
            ..trip.clone()
        };
        AppState::with_trips(config, vec![trip, other])
    }

    pub fn state() -> AppState {
        state_with(ExportConfig::default())
    }
}
