//! # CLI Argument Definitions
//!
//! Global flags apply to every subcommand and are layered over the loaded config.

use almight::domain::network::Network;
use almight::kernel::config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "almight")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect the Almight linear pool constants and address registry")]
pub(crate) struct Cli {
    /// Configuration file; the extension may be omitted.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub(crate) config: PathBuf,

    /// Network to resolve against, overriding the configured one.
    #[arg(long, global = true)]
    pub(crate) network: Option<Network>,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub(crate) json: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the linear pool factory address and minimum liquidity.
    Constants,
    /// Resolve a registry name (e.g. `POOL_LINEAR_FACTORY`) on the active network.
    Resolve {
        /// Symbolic contract name, case-insensitive.
        name: String,
    },
    /// List configured networks.
    Networks,
}
