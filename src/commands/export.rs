use anyhow::Result;
use owo_colors::OwoColorize;
use revelcal_core::ExportConfig;
use revelcal_core::export::{export_feed, export_trip};
use revelcal_core::trip::find_trip;

pub fn run(config: &ExportConfig, id: Option<i64>) -> Result<()> {
    let trips = super::trips(config)?;

    if let Some(id) = id {
        let trip = find_trip(&trips, id)?;
        let path = export_trip(config, trip)?;
        tracing::debug!(trip = trip.id, path = %path.display(), "exported single trip");
        println!("{}", format!("  Exported: {} → {}", trip.title, path.display()).green());
        return Ok(());
    }

    tracing::debug!(count = trips.len(), dir = %config.ics_path().display(), "exporting all trips");

    if trips.is_empty() {
        println!("{}", "No trips to export".dimmed());
        return Ok(());
    }

    for trip in &trips {
        let path = export_trip(config, trip)?;
        println!("{}", format!("  Exported: {} → {}", trip.title, path.display()).green());
    }

    let feed = export_feed(config, &trips)?;
    println!("{}", format!("  Feed:     {} trips → {}", trips.len(), feed.display()).green());

    Ok(())
}
