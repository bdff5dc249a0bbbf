//! Logger construction errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or reconfiguring a [`Logger`](super::Logger).
#[derive(Debug, Error)]
pub enum LoggerError {
    /// A transport with the same name is already attached.
    #[error("Transport already attached: {name}")]
    DuplicateTransport { name: String },

    /// A file transport could not open its destination.
    #[error("Failed to open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A level name did not match any known severity.
    #[error("Unknown log level: {0}")]
    InvalidLevel(String),
}

/// Result type for logger operations.
pub type LoggerResult<T> = Result<T, LoggerError>;
