use crate::consts;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Send log messages to the file at `path`, appending to it if it already
/// exists.  The terminal belongs to the game while it runs, so if `path` is
/// `None`, nothing is logged at all.
///
/// The filter is read from the [`LOG_ENV_VAR`][consts::LOG_ENV_VAR]
/// environment variable, defaulting to
/// [`DEFAULT_LOG_FILTER`][consts::DEFAULT_LOG_FILTER].
pub(crate) fn init(path: Option<&Path>) -> Result<(), LoggingError> {
    let Some(path) = path else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LoggingError::Mkdir)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LoggingError::Open)?;
    let filter = EnvFilter::try_from_env(consts::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(consts::DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Logging started");
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to create log file's parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install logger")]
    Init(#[from] TryInitError),
}
