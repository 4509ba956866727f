//! Error handling for the fedgraph CLI.
//!
//! `CliError` is what commands return. Configuration problems (settings
//! file, snapshot file) go through [`ConfigError`], which carries a hint for
//! the user. Everything is turned into a miette report in `main`.
//!
//! # Example
//!
//! ```rust,no_run
//! use fedgraph_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_snapshot(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod report;

pub use report::cli_error_to_miette;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A built graph failed verification or could not be serialized
    #[error("Graph error: {0}")]
    Graph(#[from] fedgraph_core::Error),

    #[error("Node not found: {id}\n\nHint: {hint}")]
    NodeNotFound { id: String, hint: String },

    /// `check --strict` found warnings
    #[error("Check failed: {0}")]
    CheckFailed(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

/// Errors from loading `fedgraph.toml` or a config snapshot.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File not found: {}\n\nHint: Check the path, or run from the directory that holds it", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported snapshot format: {0}\n\nHint: Snapshots must be .json or .toml files")]
    UnsupportedFormat(String),

    #[error("Invalid snapshot {source_name}: {message}\n\nHint: The top level must map each project root to a list of application configs")]
    InvalidSnapshot { source_name: String, message: String },

    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<fedgraph_config::ConfigError> for ConfigError {
    fn from(err: fedgraph_config::ConfigError) -> Self {
        use fedgraph_config::ConfigError as Source;

        match err {
            Source::NotFound(path) => ConfigError::NotFound(path),
            Source::UnsupportedFormat(format) => ConfigError::UnsupportedFormat(format),
            Source::InvalidSnapshot {
                source_name,
                message,
            } => ConfigError::InvalidSnapshot {
                source_name,
                message,
            },
            Source::InvalidValue(value) => ConfigError::InvalidValue {
                field: "settings".to_string(),
                value,
                hint: "Check fedgraph.toml and FEDGRAPH_* environment variables".to_string(),
            },
            Source::Io(e) => ConfigError::Io(e),
        }
    }
}

impl From<fedgraph_config::ConfigError> for CliError {
    fn from(err: fedgraph_config::ConfigError) -> Self {
        CliError::Config(err.into())
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Attach context to fallible operations.
pub trait ResultExt<T> {
    /// Report a missing file as [`CliError::FileNotFound`] and prefix other
    /// failures with the path.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint for the user.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error with what was being attempted.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let path = path.as_ref();
            match e.into() {
                CliError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.to_path_buf())
                }
                other => CliError::Custom(format!("{}: {}", path.display(), other)),
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| CliError::Custom(format!("{}\n\nHint: {}", e.into(), hint)))
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| CliError::Custom(format!("{}: {}", msg, e.into())))
    }
}
