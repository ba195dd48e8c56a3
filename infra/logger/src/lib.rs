//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for the workspace binaries:
//! a compact console layer on stderr and, optionally, daily rolling log files
//! (plain or JSON lines) written through a non-blocking worker.
//!
//! Binaries normally go through [`Logger::from_config`], which maps the
//! `[logging]` section of the application config onto [`LoggerBuilder`]:
//!
//! ```rust
//! use alm_domain::config::LoggingConfig;
//! use alm_logger::Logger;
//!
//! let config = LoggingConfig { level: "debug".to_owned(), ..LoggingConfig::default() };
//! let _logger = Logger::from_config("almight", &config)?;
//! # Ok::<(), alm_logger::LoggerError>(())
//! ```
//!
//! `RUST_LOG` directives are honoured unless an explicit filter is configured.

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use alm_domain::config::LoggingConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Builder state before a name is given.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state once the logger has a name (used as the log file prefix).
#[derive(Debug)]
pub struct Named(String);

#[derive(Debug)]
struct Settings {
    level: LevelFilter,
    console: bool,
    directory: Option<PathBuf>,
    json: bool,
    max_files: usize,
    env_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            console: true,
            directory: None,
            json: false,
            max_files: DEFAULT_MAX_FILES,
            env_filter: None,
        }
    }
}

/// Configures the global subscriber. [`LoggerBuilder::init`] is only available after
/// [`LoggerBuilder::name`].
#[derive(Debug)]
#[must_use = "The builder does nothing until `init` is called."]
pub struct LoggerBuilder<N = Unnamed> {
    name: N,
    settings: Settings,
}

impl LoggerBuilder<Unnamed> {
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { name: Named(name.into()), settings: self.settings }
    }
}

impl<N> LoggerBuilder<N> {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Extra filter directives (e.g. `alm_address=debug`), replacing `RUST_LOG`.
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.env_filter = Some(directives.into());
        self
    }

    /// Enables daily rolling files under `directory`.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.settings.directory = Some(directory.into());
        self
    }

    /// Writes file output as JSON lines. Has no effect without a directory.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    /// Number of rotated files to keep.
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown; dropping it flushes and stops
    /// the file writer.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`, a bad
    /// filter or no enabled output; [`LoggerError::Appender`] when the log directory cannot
    /// be used; [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { name: Named(name), settings } = self;
        validate(&name, &settings)?;

        let filter = env_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if settings.console {
            layers.push(fmt::layer().compact().with_writer(std::io::stderr).boxed());
        }

        let guard = match &settings.directory {
            Some(directory) => {
                let (layer, guard) = file_layer(&name, directory, &settings)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "console and file output are both disabled".into(),
                context: Some(name.into()),
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle to the installed subscriber; owns the file writer guard.
#[derive(Debug)]
#[must_use = "Dropping this handle stops file logging."]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { name: Unnamed, settings: Settings::default() }
    }

    /// Installs logging from the `[logging]` section of the application config.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an unknown level, plus everything
    /// [`LoggerBuilder::init`] returns.
    pub fn from_config(
        name: impl Into<String>,
        config: &LoggingConfig,
    ) -> Result<Self, LoggerError> {
        let mut builder = Self::builder()
            .name(name)
            .level(parse_level(&config.level)?)
            .console(config.console)
            .json(config.json);

        if let Some(directives) = &config.env_filter {
            builder = builder.env_filter(directives.as_str());
        }
        if let Some(directory) = &config.directory {
            builder = builder.directory(directory);
        }

        builder.init()
    }

    /// Whether log lines are also written to rolling files.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

/// Parses a level name such as `info` or `DEBUG`.
///
/// # Errors
/// [`LoggerError::InvalidConfiguration`] if the string is not a level.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("unknown log level '{level}': {e}").into(),
        context: None,
    })
}

fn validate(name: &str, settings: &Settings) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "logger name is empty".into(),
            context: None,
        });
    }
    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be at least 1".into(),
            context: Some(name.to_owned().into()),
        });
    }
    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());

    match &settings.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("bad filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}

fn file_layer(
    name: &str,
    directory: &Path,
    settings: &Settings,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("creating {}", directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(directory)
        .context(format!("log directory {}", directory.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);

    let layer = if settings.json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}
