//! # Logger
//!
//! Installs the global `tracing` subscriber for the build tools.
//!
//! Events go to stderr in a compact, timeless format. With [`LoggerBuilder::file`]
//! they are also appended to `<dir>/<name>.log`, as plain text or JSON lines.
//! Filtering takes the directives of [`LoggerBuilder::filter`], or else `RUST_LOG`.
//! The level set with [`LoggerBuilder::level`] applies when neither gives any.
//!
//! ```rust
//! # use rescs_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("xtask")
//!     .level(LevelFilter::DEBUG)
//!     .filter("debug,oxigraph=warn")
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

/// Where file output goes and how it is formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FileOutput {
    dir: PathBuf,
    json: bool,
}

#[derive(Debug)]
struct Settings {
    level: LevelFilter,
    filter: Option<String>,
    console: bool,
    file: Option<FileOutput>,
}

/// Builder state before [`LoggerBuilder::name`] is called.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state once the logger has a name.
#[derive(Debug)]
pub struct Named(String);

mod private {
    pub trait Sealed {}
    impl Sealed for super::Unnamed {}
    impl Sealed for super::Named {}
}

/// Configures the global subscriber. A name is required before [`LoggerBuilder::init`].
#[derive(Debug)]
pub struct LoggerBuilder<S: private::Sealed = Unnamed> {
    settings: Settings,
    name: S,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger. The name is also the log file stem.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()) }
    }
}

impl LoggerBuilder<Named> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Directives such as `info,rescs_views=trace`, used instead of `RUST_LOG`.
    #[must_use]
    pub fn filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.filter = Some(directives.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Also writes to `<dir>/<name>.log`, as JSON lines when `json` is set.
    #[must_use]
    pub fn file(mut self, dir: impl Into<PathBuf>, json: bool) -> Self {
        self.settings.file = Some(FileOutput { dir: dir.into(), json });
        self
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an empty name, a malformed filter or
    /// no output at all; [`LoggerError::Subscriber`] when a global subscriber is
    /// already set; [`LoggerError::Appender`] when the log file cannot be opened.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Named(name) = self.name;
        let settings = self.settings;
        if name.trim().is_empty() {
            return Err(invalid("Logger name cannot be empty".into()));
        }
        if !settings.console && settings.file.is_none() {
            return Err(invalid("Neither console nor file output is enabled".into()));
        }

        let env_filter = env_filter(settings.level, settings.filter.as_deref())?;
        let mut layers = Vec::new();

        if settings.console {
            layers.push(
                layer()
                    .compact()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr)
                    .boxed(),
            );
        }

        let guard = match settings.file {
            Some(FileOutput { dir, json }) => {
                fs::create_dir_all(&dir).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create {}", dir.display()).into()),
                })?;
                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::NEVER)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .build(dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Keeps the file writer running. Pending lines are flushed when it is dropped.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder<Unnamed> {
        LoggerBuilder {
            settings: Settings {
                level: LevelFilter::INFO,
                filter: None,
                console: true,
                file: None,
            },
            name: Unnamed,
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log file");
        }
    }
}

fn invalid(message: String) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

/// `directives`, else `RUST_LOG`, else `level`.
fn env_filter(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        Some(directives) => builder
            .parse(directives)
            .map_err(|e| invalid(format!("Invalid log filter '{directives}': {e}"))),
        None => Ok(builder.from_env_lossy()),
    }
}
