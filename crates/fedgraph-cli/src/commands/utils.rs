//! Shared helpers for command implementations.

use std::path::Path;

use fedgraph_config::Settings;
use fedgraph_core::{ConfigSnapshot, DependencyGraph, GraphBuilder};

use crate::error::{CliError, Result, ResultExt};

pub(crate) fn build_graph(snapshot: &ConfigSnapshot, settings: &Settings) -> DependencyGraph {
    GraphBuilder::new(settings.build_options()).build(snapshot)
}

/// Write command output, creating parent directories as needed.
pub(crate) async fn write_output(path: &Path, contents: &str) -> Result<()> {
    if path.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "output path {} is a directory",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.with_path(parent)?;
    }
    tokio::fs::write(path, contents).await.with_path(path)
}
