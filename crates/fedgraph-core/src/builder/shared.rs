//! Shared-dependency clustering.

use indexmap::IndexMap;
use tracing::debug;

use super::BuildState;
use crate::application::{ConfigType, SharedDependencyRef};
use crate::edge::{DependencyGraphEdge, EdgeType};
use crate::node::{DependencyGraphNode, NodeGroup, NodeType};
use crate::node_id::NodeId;

const SHARES_STRENGTH: f64 = 0.5;

/// A library is only worth a node when more than one application shares it.
const MIN_SHARING_APPS: usize = 2;

struct SharedUsage {
    /// Sharing application -> version it declared.
    users: IndexMap<NodeId, Option<String>>,
    most_detailed: SharedDependencyRef,
    config_type: ConfigType,
}

impl BuildState {
    pub(super) fn cluster_shared_dependencies(&mut self, dynamic_sentinel: &str) {
        let mut usage: IndexMap<String, SharedUsage> = IndexMap::new();

        for (app_id, capability) in &self.classified {
            for declared in &capability.config.shared {
                let name = declared.name.trim();
                if name.is_empty() {
                    continue;
                }
                if name == dynamic_sentinel {
                    debug!(app = %app_id, "dynamic shared set, not clustered");
                    continue;
                }

                let entry = usage.entry(name.to_string()).or_insert_with(|| SharedUsage {
                    users: IndexMap::new(),
                    most_detailed: declared.clone(),
                    config_type: capability.config.config_type,
                });
                if declared.detail_score() > entry.most_detailed.detail_score() {
                    entry.most_detailed = declared.clone();
                }
                entry
                    .users
                    .entry(app_id.clone())
                    .or_insert_with(|| declared.version.clone());
            }
        }

        for (name, shared) in usage {
            if shared.users.len() < MIN_SHARING_APPS {
                debug!(dependency = %name, "shared by a single application, not clustered");
                continue;
            }

            let shared_id = NodeId::shared(&name);
            if self.nodes.contains_key(&shared_id) {
                continue;
            }

            let mut node = DependencyGraphNode::new(
                shared_id.clone(),
                name,
                NodeType::SharedDependency,
                shared.config_type,
                NodeGroup::Shared,
            )
            .with_size(shared.users.len());
            node.version = shared.most_detailed.version;
            self.nodes.insert(shared_id.clone(), node);
            self.shared_dependency_count += 1;

            for (app_id, version) in shared.users {
                self.edges.push(
                    DependencyGraphEdge::new(
                        app_id,
                        shared_id.clone(),
                        EdgeType::Shares,
                        SHARES_STRENGTH,
                    )
                    .with_label(version)
                    .bidirectional(true),
                );
            }
        }
    }
}
