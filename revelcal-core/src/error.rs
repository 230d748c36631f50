//! Error types for the calendar export engine.

use thiserror::Error;

/// Errors that can occur while exporting trips to calendars.
///
/// Encoding and link building are pure; only configuration, trip data
/// loading and the output sinks can fail.
#[derive(Error, Debug)]
pub enum CalExportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error("Invalid trip data: {0}")]
    TripData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calendar export operations.
pub type CalExportResult<T> = Result<T, CalExportError>;
