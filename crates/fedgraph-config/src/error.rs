//! Error types for settings and snapshot loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported snapshot format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid snapshot {source_name}: {message}")]
    InvalidSnapshot {
        source_name: String,
        message: String,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
