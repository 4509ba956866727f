//! Capability classification of local applications.
//!
//! Classification looks at each application on its own: does it declare
//! remotes, does it expose modules. Cross-references between applications
//! are resolved later by the builder.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationConfig, ConfigSnapshot};
use crate::node::NodeGroup;
use crate::node_id::NodeId;

/// What one application can do, judged from its own config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    pub has_remotes: bool,
    pub has_exposes: bool,
    pub config: ApplicationConfig,
}

impl Capability {
    fn new(config: ApplicationConfig) -> Self {
        Self {
            has_remotes: !config.remotes.is_empty(),
            has_exposes: !config.exposes.is_empty(),
            config,
        }
    }
}

/// Classified applications keyed by their derived id, in snapshot order.
pub type Classification = IndexMap<NodeId, Capability>;

/// Classify every named application in the snapshot.
///
/// Blank names are skipped. Records that derive the same id (same root,
/// name and build tool) collapse into one entry; the last one read wins
/// but keeps the position of the first.
pub fn classify(snapshot: &ConfigSnapshot) -> Classification {
    let mut classified = Classification::new();

    for (root_key, configs) in snapshot {
        for config in configs {
            if config.is_anonymous() {
                debug!(root = %root_key, "skipping application without a name");
                continue;
            }

            let root = if config.root_path.is_empty() {
                root_key.as_str()
            } else {
                config.root_path.as_str()
            };
            let id = NodeId::app(root, &config.name, config.config_type);

            let mut config = config.clone();
            if config.root_path.is_empty() {
                config.root_path = root_key.clone();
            }

            if classified.insert(id.clone(), Capability::new(config)).is_some() {
                debug!(%id, "duplicate application config collapsed into one node");
            }
        }
    }

    classified
}

/// Role an application plays once cross-references are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    /// Consumes remotes and is not a provider.
    Host,
    /// Provides code (exposes modules or is consumed) without consuming.
    Remote,
    /// Consumes remotes and provides code.
    Bidirectional,
    /// Neither consumes nor provides.
    Standalone,
}

impl AppRole {
    pub fn derive(has_remotes: bool, has_exposes: bool, consumed: bool) -> Self {
        match (has_remotes, has_exposes || consumed) {
            (true, true) => AppRole::Bidirectional,
            (true, false) => AppRole::Host,
            (false, true) => AppRole::Remote,
            (false, false) => AppRole::Standalone,
        }
    }

    /// Presentation group for a local application with this role.
    pub fn group(self) -> NodeGroup {
        match self {
            AppRole::Host | AppRole::Standalone => NodeGroup::Hosts,
            AppRole::Bidirectional => NodeGroup::Bidirectional,
            AppRole::Remote => NodeGroup::Remotes,
        }
    }
}
