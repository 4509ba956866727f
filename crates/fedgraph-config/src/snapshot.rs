//! Config snapshot loading.
//!
//! A snapshot maps each project root to the applications found under it:
//!
//! ```json
//! {
//!   "/workspace/shop": [
//!     { "name": "shell", "configType": "webpack", "remotes": [{ "name": "cart" }] }
//!   ]
//! }
//! ```
//!
//! The same shape is accepted as TOML, one array of tables per root:
//!
//! ```toml
//! [["/workspace/shop"]]
//! name = "shell"
//! configType = "webpack"
//! remotes = [{ name = "cart" }]
//! ```

use std::fmt;
use std::path::Path;

use fedgraph_core::ConfigSnapshot;
use tracing::debug;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Toml,
}

impl SnapshotFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(SnapshotFormat::Json),
            Some("toml") => Ok(SnapshotFormat::Toml),
            Some(other) => Err(ConfigError::UnsupportedFormat(format!(".{other}"))),
            None => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotFormat::Json => f.write_str("json"),
            SnapshotFormat::Toml => f.write_str("toml"),
        }
    }
}

/// Parse snapshot text. `source_name` only shows up in error messages.
pub fn parse_snapshot(
    content: &str,
    format: SnapshotFormat,
    source_name: &str,
) -> Result<ConfigSnapshot> {
    let invalid = |message: String| ConfigError::InvalidSnapshot {
        source_name: source_name.to_string(),
        message,
    };

    match format {
        SnapshotFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string())),
        SnapshotFormat::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string())),
    }
}

/// Read and parse a snapshot file.
///
/// The extension is checked before the file is touched.
pub async fn load_snapshot(path: &Path) -> Result<ConfigSnapshot> {
    let format = SnapshotFormat::from_path(path)?;

    let content = tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io(e),
    })?;

    let snapshot = parse_snapshot(&content, format, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        %format,
        roots = snapshot.len(),
        applications = snapshot.values().map(Vec::len).sum::<usize>(),
        "loaded config snapshot"
    );
    Ok(snapshot)
}
