use std::io::Write;

use anyhow::Result;
use revelcal_core::ExportConfig;
use revelcal_core::export::trip_calendar;
use revelcal_core::trip::find_trip;

pub fn run(config: &ExportConfig, id: i64) -> Result<()> {
    let trips = super::trips(config)?;
    let trip = find_trip(&trips, id)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    trip_calendar(config, trip).encode(&mut out)?;
    out.flush()?;

    Ok(())
}
