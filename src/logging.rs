//! Process-wide `tracing` setup for the `fileops` binary.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_log::log::SetLoggerError;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "FILEOPS_LOG";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("log file path has no file name: {}", .0.display())]
    InvalidLogFile(PathBuf),
    #[error("failed to bridge `log` records: {0}")]
    LogBridge(#[from] SetLoggerError),
    #[error("failed to install subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Install the global subscriber.
///
/// Logs go to stderr, or to `settings.log_file` through a non-blocking
/// writer; keep the returned guard alive until exit so buffered lines are
/// flushed. `log` crate records are forwarded into `tracing`.
pub fn init(settings: &Settings) -> Result<Option<WorkerGuard>, LoggingError> {
    LogTracer::init()?;
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    match &settings.log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| LoggingError::InvalidLogFile(path.clone()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(Some(guard))
        }
        None => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(None)
        }
    }
}
