use tracing::debug;

use super::BuildState;
use crate::edge::{DependencyGraphEdge, EdgeType};
use crate::node::{DependencyGraphNode, NodeGroup, NodeType};
use crate::node_id::NodeId;

const EXPOSES_STRENGTH: f64 = 1.0;

impl BuildState {
    /// One child node per exposed module, clustered under its owner.
    pub(super) fn expand_exposed_modules(&mut self) {
        for (owner_id, capability) in &self.classified {
            if !capability.has_exposes {
                continue;
            }

            // modules are pulled by whoever consumes the owner
            let consumer_count = self.consumers.get(owner_id).map_or(0, |c| c.len());

            for expose in &capability.config.exposes {
                if expose.name.trim().is_empty() {
                    debug!(owner = %owner_id, "ignoring exposed module without a name");
                    continue;
                }

                let module_id = NodeId::exposed_module(owner_id, &expose.name);
                if self.nodes.contains_key(&module_id) {
                    continue;
                }

                let node = DependencyGraphNode::new(
                    module_id.clone(),
                    expose.name.clone(),
                    NodeType::ExposedModule,
                    capability.config.config_type,
                    NodeGroup::Owner(owner_id.clone()),
                )
                .with_size(consumer_count);
                self.nodes.insert(module_id.clone(), node);

                let path = (!expose.path.is_empty()).then(|| expose.path.clone());
                self.edges.push(
                    DependencyGraphEdge::new(
                        owner_id.clone(),
                        module_id,
                        EdgeType::Exposes,
                        EXPOSES_STRENGTH,
                    )
                    .with_label(path),
                );
                self.exposed_module_count += 1;
            }
        }
    }
}
