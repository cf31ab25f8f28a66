//! RouteRide console: register riders, request rides and inspect driver availability.
//!
//! Run with: cargo run -p dispatch_cli -- --output-dir exports

mod menu;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dispatch_core::scenario::{build_ride_manager, DispatchConfig, SeedCatalog};
use log::info;

use crate::menu::Menu;

#[derive(Parser)]
#[command(
    name = "routeride",
    about = "RouteRide: a ride sharing dispatcher with distance based fares"
)]
struct Cli {
    /// JSON seed catalog with drivers and locations (built-in catalog when omitted)
    #[arg(long, env = "ROUTERIDE_CATALOG")]
    catalog: Option<PathBuf>,
    /// Directory that receives driver_<id>_history.txt files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Log filter, e.g. "debug" or "dispatch_core=info" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
    /// Reject rides whose source and destination are the same location
    #[arg(long)]
    reject_same_location: bool,
}

fn init_logging(filter: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let catalog = match &cli.catalog {
        Some(path) => SeedCatalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => SeedCatalog::default(),
    };
    let config = DispatchConfig::default().with_same_location_allowed(!cli.reject_same_location);
    let manager = build_ride_manager(&catalog, config);
    info!("Driver histories will be written to {}", cli.output_dir.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), manager, cli.output_dir);
    menu.run().context("console session failed")?;
    Ok(())
}
