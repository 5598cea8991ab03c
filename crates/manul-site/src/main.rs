//! Main entry point for the Manul site tooling.

use anyhow::{Context, Result};
use clap::Parser;
use manul_common::init_logging;
use manul_site::{load_site_config, Cli, Site};
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) =
        load_site_config(cli.config.as_deref()).context("Failed to load configuration")?;

    if cli.verbose {
        config.logging.level = "debug".to_string();
    }

    init_logging(config.logging_config()).context("Failed to initialize logging")?;
    info!("Using {}", source);
    debug!("Configuration: {:?}", config);

    let site = Site::from_config(&config).context("Failed to build message catalog")?;
    info!(
        "Catalog ready with locales {:?}, default {}",
        site.catalog().locales(),
        site.catalog().default_locale()
    );

    let output = site.run(&cli.command)?;
    println!("{output}");

    Ok(())
}
