//! Snapshot linting.
//!
//! Building never rejects a snapshot; records it cannot use are skipped or
//! merged. This pass reports those records so the CLI can point them out.

use std::collections::HashSet;
use std::fmt;

use fedgraph_core::{ConfigSnapshot, ConfigType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotWarning {
    /// A root key with no applications under it.
    EmptyRoot { root: String },
    /// Application with a blank name; it is left out of the graph.
    AnonymousApplication { root: String, index: usize },
    /// Same name and config type under the same root; only the last one is kept.
    DuplicateApplication {
        root: String,
        name: String,
        config_type: ConfigType,
    },
    /// A remote with a blank name; it is ignored.
    BlankRemote { root: String, application: String },
    /// An expose with a blank name; no module node is created for it.
    BlankExpose { root: String, application: String },
    /// `rootPath` disagrees with the key the record is filed under. The
    /// record's own `rootPath` is used for its id.
    RootPathMismatch {
        root: String,
        application: String,
        root_path: String,
    },
}

impl fmt::Display for SnapshotWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotWarning::EmptyRoot { root } => {
                write!(f, "{root}: no applications")
            }
            SnapshotWarning::AnonymousApplication { root, index } => {
                write!(f, "{root}: application #{index} has no name and is skipped")
            }
            SnapshotWarning::DuplicateApplication {
                root,
                name,
                config_type,
            } => write!(
                f,
                "{root}: '{name}' ({config_type}) is declared more than once; the last declaration wins"
            ),
            SnapshotWarning::BlankRemote { root, application } => {
                write!(f, "{root}: '{application}' declares a remote with no name")
            }
            SnapshotWarning::BlankExpose { root, application } => {
                write!(f, "{root}: '{application}' exposes a module with no name")
            }
            SnapshotWarning::RootPathMismatch {
                root,
                application,
                root_path,
            } => write!(
                f,
                "{root}: '{application}' has rootPath '{root_path}', which is used instead"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotReport {
    pub roots: usize,
    pub applications: usize,
    pub warnings: Vec<SnapshotWarning>,
}

impl SnapshotReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Walk a snapshot and collect everything the builder would skip or merge.
pub fn validate_snapshot(snapshot: &ConfigSnapshot) -> SnapshotReport {
    let mut report = SnapshotReport {
        roots: snapshot.len(),
        ..SnapshotReport::default()
    };

    for (root, apps) in snapshot {
        if apps.is_empty() {
            report.warnings.push(SnapshotWarning::EmptyRoot { root: root.clone() });
            continue;
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for (index, app) in apps.iter().enumerate() {
            if app.is_anonymous() {
                report.warnings.push(SnapshotWarning::AnonymousApplication {
                    root: root.clone(),
                    index,
                });
                continue;
            }
            report.applications += 1;

            let key = (app.name.as_str(), app.config_type);
            if !seen.insert(key) && reported.insert(key) {
                report.warnings.push(SnapshotWarning::DuplicateApplication {
                    root: root.clone(),
                    name: app.name.clone(),
                    config_type: app.config_type,
                });
            }

            if app.remotes.iter().any(|r| r.name.trim().is_empty()) {
                report.warnings.push(SnapshotWarning::BlankRemote {
                    root: root.clone(),
                    application: app.name.clone(),
                });
            }
            if app.exposes.iter().any(|e| e.name.trim().is_empty()) {
                report.warnings.push(SnapshotWarning::BlankExpose {
                    root: root.clone(),
                    application: app.name.clone(),
                });
            }
            if !app.root_path.is_empty() && app.root_path != *root {
                report.warnings.push(SnapshotWarning::RootPathMismatch {
                    root: root.clone(),
                    application: app.name.clone(),
                    root_path: app.root_path.clone(),
                });
            }
        }
    }

    report
}
