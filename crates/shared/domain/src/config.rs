use crate::network::Network;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the SDK crates and the command line.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    /// Network whose registry entries are resolved.
    pub network: Network,
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Deployed contract addresses, grouped per network.
///
/// ```toml
/// [registry.networks.local]
/// chain_id = 31337
///
/// [registry.networks.local.addresses]
/// POOL_LINEAR_FACTORY = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
/// ```
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub networks: BTreeMap<String, NetworkRecord>,
}

/// Registry entries of a single network. Addresses stay raw strings here;
/// validation belongs to the address crate.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkRecord {
    pub chain_id: Option<u64>,
    pub addresses: BTreeMap<String, String>,
}

/// Logging output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files; file logging is off when unset.
    pub directory: Option<PathBuf>,
    /// JSON lines for file output.
    pub json: bool,
    /// Extra filter directives, e.g. `alm_address=debug`.
    pub env_filter: Option<String>,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            directory: None,
            json: false,
            env_filter: None,
        }
    }
}
