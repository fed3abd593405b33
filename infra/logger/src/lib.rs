//! # Logger
//!
//! Installs the global `tracing` subscriber for the `vls` binaries.
//!
//! * Console output uses the compact formatter and goes to stderr, so rendered
//!   pages written to stdout stay clean.
//! * File output is optional: daily rolling files behind a non-blocking writer,
//!   plain text or JSON.
//! * `RUST_LOG` always wins over the programmatic level; use
//!   [`LoggerBuilder::env_filter`] for per-module defaults.
//!
//! ## Example
//!
//! ```rust
//! # use vls_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("vls")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Builder for the global subscriber. A name is required before [`LoggerBuilder::init`]
/// becomes available; file-only knobs unlock after [`LoggerBuilder::directory`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { config: self.config, name: WithName(name.into()), file: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// How many rotated files to keep on disk.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Writes file logs as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Minimum level emitted when `RUST_LOG` is not set.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Parses a level name (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for unknown level names.
    pub fn level_name(self, level: &str) -> Result<Self, LoggerError> {
        let parsed = LevelFilter::from_str(level.trim()).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Unknown log level '{level}': {e}").into(),
                context: None,
            }
        })?;
        Ok(self.level(parsed))
    }

    /// Adds module directives such as `vls_landing=debug`.
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Enables rolling file output into `directory`.
    pub fn directory(self, directory: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.directory = Some(directory.into());
        LoggerBuilder { config, name: self.name, file: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown; it owns the worker guard
    /// that flushes the non-blocking file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   a bad env filter, or when no output is enabled.
    /// * [`LoggerError::Appender`] when the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate(&self.config, &self.name.0)?;
        let filter = env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
        }

        let guard = match self.config.directory {
            Some(directory) => {
                fs::create_dir_all(&directory).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create {}", directory.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(self.config.rotation)
                    .filename_prefix(&self.name.0)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.config.max_files)
                    .build(&directory)
                    .context("Building rolling file appender")?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.config.json {
                    file_layer.json().boxed()
                } else {
                    file_layer.boxed()
                });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable the console or a log directory.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle to the installed subscriber.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, file: PhantomData }
    }

    /// True when a file writer is attached.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log files");
        }
    }
}

fn validate(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |directives| {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("vls-test").env_filter("vls_landing=debug");
        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("vls_landing=debug"));
        assert!(builder.config.directory.is_none());
        assert!(!builder.config.json);
    }

    #[test]
    fn file_options_are_recorded() {
        let builder = Logger::builder()
            .name("vls-test")
            .console(false)
            .directory("logs")
            .max_files(3)
            .json(true)
            .level(LevelFilter::WARN);

        assert!(!builder.config.console);
        assert!(builder.config.json);
        assert_eq!(builder.config.max_files, 3);
        assert_eq!(builder.config.level, LevelFilter::WARN);
        assert_eq!(builder.config.directory.as_deref(), Some(std::path::Path::new("logs")));
    }

    #[test]
    fn level_names_parse() {
        let builder = Logger::builder().name("vls-test").level_name("debug").unwrap();
        assert_eq!(builder.config.level, LevelFilter::DEBUG);

        let err = Logger::builder().name("vls-test").level_name("loud").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn no_output_is_rejected() {
        let err = Logger::builder().name("vls-test").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn bad_env_filter_is_rejected() {
        let err = Logger::builder().name("vls-test").env_filter("vls=[").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn file_logging_writes_into_directory() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("logs");

        let logger = Logger::builder()
            .name("vls-test")
            .console(false)
            .directory(&dir)
            .init()
            .unwrap();
        assert!(logger.has_file_output());

        tracing::info!("page rendered");
        std::thread::sleep(Duration::from_millis(20));
        drop(logger);

        let has_log = fs::read_dir(&dir)
            .unwrap()
            .flatten()
            .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));
        assert!(has_log, "a log file should exist after init");
    }
}
