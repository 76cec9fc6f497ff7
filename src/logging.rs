//! `tracing` subscriber setup for the binary.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Where log lines go for a given run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
    Off,
}

/// Pick the log target. The terminal UI owns stdout/stderr, so it only logs
/// to a file.
pub fn target(config: &LoggingConfig, interactive: bool) -> LogTarget {
    match (&config.file, interactive) {
        (Some(_), _) => LogTarget::File,
        (None, false) => LogTarget::Stderr,
        (None, true) => LogTarget::Off,
    }
}

/// Build the filter from `RUST_LOG`, falling back to the configured directives.
pub fn filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.filter)?),
    }
}

/// Install the global subscriber.
pub fn init(config: &LoggingConfig, interactive: bool) -> Result<(), LoggingError> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(config)?);

    let installed = match (target(config, interactive), &config.file) {
        (LogTarget::File, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LoggingError::FileOpen {
                    path: path.clone(),
                    source: e,
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (LogTarget::Stderr, _) => builder.with_writer(std::io::stderr).try_init(),
        _ => return Ok(()),
    };

    installed.map_err(|e| LoggingError::Install(e.to_string()))
}
