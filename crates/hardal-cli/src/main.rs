mod check;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hardal-cli")]
#[command(about = "Hardal delivery check command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Geocode an address and quote delivery for it
    CheckDelivery {
        /// Street and house number, e.g. "Möllner Landstraße 3"
        #[arg(long)]
        address: String,
        #[arg(long, default_value = "Hamburg")]
        city: String,
        #[arg(long)]
        postal_code: String,
    },
    /// Print the service area in effect
    Zone {
        /// YAML override for the built-in Hamburg area
        #[arg(long, env = "HARDAL_ZONE_PATH")]
        zone_path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::CheckDelivery {
            address,
            city,
            postal_code,
        }) => check::run_check_delivery(&address, &city, &postal_code).await?,
        Some(Commands::Zone { zone_path }) => check::run_zone(zone_path.as_deref())?,
        None => println!("hardal-cli: use --help to list commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
