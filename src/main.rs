mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use revelcal_core::ExportConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "revelcal")]
#[command(about = "Export trips as .ics calendars and add-to-calendar links")]
struct Cli {
    /// Path to configuration file (default: ~/.config/revelcal/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Trip data file (JSON array), overrides the configured one
    #[arg(long, global = true)]
    trips: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write .ics files into the static directory
    Export {
        /// Only export this trip; otherwise every trip plus the combined feed
        #[arg(long)]
        id: Option<i64>,
    },
    /// Print a trip's calendar to stdout
    Print {
        #[arg(long)]
        id: i64,
    },
    /// Print a trip's Google, Yahoo and ICS links as JSON
    Links {
        #[arg(long)]
        id: i64,
    },
    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ExportConfig::load(cli.config.as_deref())?;
    if let Some(trips) = cli.trips {
        config.trips_file = trips;
    }

    match cli.command {
        Commands::Export { id } => commands::export::run(&config, id),
        Commands::Print { id } => commands::print::run(&config, id),
        Commands::Links { id } => commands::links::run(&config, id),
        Commands::Config => commands::config::run(&config, cli.config.as_deref()),
    }
}
