use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use revelcal_core::ExportConfig;

pub fn run(config: &ExportConfig, explicit_path: Option<&Path>) -> Result<()> {
    let config_path = match explicit_path {
        Some(p) => p.to_path_buf(),
        None => ExportConfig::config_path()?,
    };

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Trips:      {}", config.trips_file.display());
    println!("  ICS files:  {}", config.ics_path().display());

    println!("{}", "Calendar".bold());
    println!("  Name:       {}", config.calendar_name);
    println!("  URL:        {}", config.calendar_url());
    println!(
        "  Timezone:   {}",
        if config.timezone.is_empty() { "UTC" } else { config.timezone.as_str() }
    );
    println!("  Link times: {:?}", config.link_times);

    Ok(())
}
