use crate::cli::{Cli, Command};
use almight::address::{AddressBook, AddressRegistry};
use almight::domain::config::AppConfig;
use almight::pool_linear::PoolLinear;
use anyhow::{Context, anyhow};
use serde_json::json;
use std::io::{self, Write};

pub(crate) fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();

    match &cli.command {
        Command::Constants => constants(&mut out, config, cli.json),
        Command::Resolve { name } => resolve(&mut out, config, name, cli.json),
        Command::Networks => networks(&mut out, config, cli.json),
    }
}

fn constants(out: &mut impl Write, config: &AppConfig, as_json: bool) -> anyhow::Result<()> {
    let platform = almight::init(config)
        .map_err(anyhow::Error::from_boxed)
        .with_context(|| format!("Failed to initialize network '{}'", config.network))?;

    let constants = platform
        .slice::<PoolLinear>()
        .map(|pool| pool.constants)
        .ok_or_else(|| anyhow!("Linear pool slice is not enabled"))?;

    if as_json {
        serde_json::to_writer_pretty(&mut *out, constants)?;
        writeln!(out)?;
    } else {
        writeln!(out, "network            {}", constants.network())?;
        writeln!(out, "factory_address    {}", constants.factory_address().to_checksum(None))?;
        writeln!(out, "minimum_liquidity  {}", constants.minimum_liquidity())?;
    }
    Ok(())
}

fn resolve(
    out: &mut impl Write,
    config: &AppConfig,
    name: &str,
    as_json: bool,
) -> anyhow::Result<()> {
    let book = load_book(config)?;
    let address = book.resolve_key(&config.network, name)?;
    let address = address.to_checksum(None);

    if as_json {
        let value = json!({
            "network": config.network,
            "name": name.trim().to_ascii_uppercase(),
            "address": address,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(out, "{address}")?;
    }
    Ok(())
}

fn networks(out: &mut impl Write, config: &AppConfig, as_json: bool) -> anyhow::Result<()> {
    let book = load_book(config)?;

    if as_json {
        let listing: Vec<_> = book
            .networks()
            .iter()
            .map(|network| {
                json!({
                    "network": network,
                    "chain_id": book.chain_id(network),
                    "entries": book.entries(network).len(),
                    "active": *network == config.network,
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        return Ok(());
    }

    for network in book.networks() {
        let marker = if network == config.network { '*' } else { ' ' };
        let chain_id = book.chain_id(&network).map_or_else(|| "-".to_owned(), |id| id.to_string());
        writeln!(
            out,
            "{marker} {network:<16} chain_id={chain_id:<10} entries={}",
            book.entries(&network).len()
        )?;
    }
    Ok(())
}

fn load_book(config: &AppConfig) -> anyhow::Result<AddressBook> {
    AddressBook::from_config(&config.registry).context("Address registry is malformed")
}
