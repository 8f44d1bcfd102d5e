use etc_gateway::{ConnectionError, TransportError};
use etc_strategy::StrategyConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Could not connect to the exchange: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Lost the exchange connection: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Invalid strategy config: {0}")]
    Strategy(#[from] StrategyConfigError),
}

/// Failure persisting the end-of-session report
#[derive(Debug, Error)]
pub enum ReportWriteError {
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report encoding error: {0}")]
    Csv(#[from] csv::Error),
}
