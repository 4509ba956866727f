use std::path::PathBuf;

use fedgraph_config::SnapshotFormat;

/// Accept only paths with a snapshot extension, so a wrong file is rejected
/// before anything is read.
pub fn parse_snapshot_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    SnapshotFormat::from_path(&path)
        .map(|_| path)
        .map_err(|_| format!("'{s}' is not a snapshot file (expected .json or .toml)"))
}
