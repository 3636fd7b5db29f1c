//! Logging to a file
//!
//! The game takes over the whole terminal, so there's nowhere on screen for
//! log messages to go.  They're only emitted at all when a log file is
//! requested on the command line.
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{filter::ParseError, EnvFilter};

/// Name of the environment variable for configuring which messages are logged
pub(crate) const LOG_ENV_VAR: &str = "SNAKEBITE_LOG";

/// Filter to use when [`LOG_ENV_VAR`] is not set
const DEFAULT_FILTER: &str = "snakebite=info";

/// Start sending log messages to the file at `path`, truncating it if it
/// already exists
pub(crate) fn init(path: &Path) -> Result<(), LogError> {
    let filter = env_filter(std::env::var(LOG_ENV_VAR).ok())?;
    let file = fs_err::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(LogError::Init)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}

fn env_filter(directives: Option<String>) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directives.as_deref().unwrap_or(DEFAULT_FILTER))
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to open log file")]
    Open(#[from] std::io::Error),
    #[error("invalid SNAKEBITE_LOG value")]
    Filter(#[from] ParseError),
    #[error("failed to install log subscriber")]
    Init(#[source] Box<dyn std::error::Error + Send + Sync>),
}
