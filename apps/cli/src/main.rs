mod cli;
mod commands;

use crate::cli::Cli;
use alm_logger::Logger;
use almight::domain::config::AppConfig;
use almight::kernel::config::load_config;
use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: AppConfig =
        load_config(Some(&cli.config)).context("Critical: Configuration is malformed")?;

    if let Some(network) = &cli.network {
        config.network = network.clone();
    }
    if cli.verbose {
        config.logging.level = "debug".to_owned();
    }

    let _log = Logger::from_config(env!("CARGO_BIN_NAME"), &config.logging)?;
    tracing::debug!(config = %cli.config.display(), network = %config.network, "Configuration loaded");

    commands::run(&cli, &config)
}
