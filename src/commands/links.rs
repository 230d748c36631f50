use anyhow::Result;
use revelcal_core::trip::find_trip;
use revelcal_core::{ExportConfig, LinkBuilder};

pub fn run(config: &ExportConfig, id: i64) -> Result<()> {
    let trips = super::trips(config)?;
    let trip = find_trip(&trips, id)?;

    let links = LinkBuilder::new(config).build(trip);
    println!("{}", serde_json::to_string_pretty(&links.into_map())?);

    Ok(())
}
