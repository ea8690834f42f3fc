use std::path::PathBuf;

/// Failures at the I/O edge. Parsing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error reading {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error reading stdin: {0}")]
    Io(#[from] std::io::Error),
    #[error("error serializing result: {0}")]
    SerializeFailed(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
