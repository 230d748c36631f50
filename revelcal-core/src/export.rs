//! Build trip calendars and write them to static storage.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::ExportConfig;
use crate::error::CalExportResult;
use crate::event::EventBuilder;
use crate::ics::{Calendar, CalendarMeta};
use crate::trip::Trip;

/// File name of the combined calendar of all trips.
pub const FEED_FILE_NAME: &str = "trips.ics";

/// `<trip-id>.ics`
pub fn ics_file_name(trip: &Trip) -> String {
    format!("{}.ics", trip.id)
}

/// Calendar holding a single trip.
pub fn trip_calendar(config: &ExportConfig, trip: &Trip) -> Calendar {
    feed_calendar(config, std::slice::from_ref(trip))
}

/// Calendar holding every trip, in the given order.
pub fn feed_calendar(config: &ExportConfig, trips: &[Trip]) -> Calendar {
    let builder = EventBuilder::new(config);
    let mut cal = Calendar::new(CalendarMeta::from_config(config));
    for trip in trips {
        cal.push(builder.build(trip));
    }
    cal
}

/// Write `<ics_path>/<trip-id>.ics` and return its path.
pub fn export_trip(config: &ExportConfig, trip: &Trip) -> CalExportResult<PathBuf> {
    let path = config.ics_path().join(ics_file_name(trip));
    write_atomic(&path, &trip_calendar(config, trip))?;

    tracing::debug!(trip = trip.id, path = %path.display(), "exported trip calendar");
    Ok(path)
}

/// Write `<ics_path>/trips.ics` and return its path.
pub fn export_feed(config: &ExportConfig, trips: &[Trip]) -> CalExportResult<PathBuf> {
    let path = config.ics_path().join(FEED_FILE_NAME);
    write_atomic(&path, &feed_calendar(config, trips))?;

    tracing::debug!(trips = trips.len(), path = %path.display(), "exported trip feed");
    Ok(path)
}

/// Readers see either the previous file or the complete new one. Each
/// writer fills its own temp file, so concurrent exports of the same trip
/// never share partial output.
fn write_atomic(path: &Path, cal: &Calendar) -> CalExportResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    cal.encode(BufWriter::new(&mut temp))?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
