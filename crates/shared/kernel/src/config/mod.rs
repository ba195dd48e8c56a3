use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "almight";

/// Prefix of environment variables overriding file values.
pub const ENV_PREFIX: &str = "ALMIGHT";

/// Custom error type for config loading.
#[alm_derive::alm_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file with environment overrides on top.
///
/// 1. **Base File**: `path` (or [`DEFAULT_CONFIG_FILE`]). The extension may be omitted,
///    in which case any supported format (`toml`, `json`, `yaml`, ...) is picked up.
/// 2. **Environment Overrides**: variables prefixed with `ALMIGHT__`, nested with `__`
///    (e.g. `ALMIGHT__NETWORK=sepolia` maps to `network`,
///    `ALMIGHT__LOGGING__LEVEL=debug` to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, a value is malformed, or the
/// merged result does not match `T`.
///
/// # Example
/// ```rust,no_run
/// use alm_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     network: String,
/// }
///
/// let cfg: Settings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), "Loading config");

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"))
        .build()
        .context(format!("Failed to build config from {}", effective_path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
