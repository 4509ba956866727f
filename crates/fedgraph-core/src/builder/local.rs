use super::BuildState;
use crate::classify::AppRole;
use crate::node::{DependencyGraphNode, NodeType};

impl BuildState {
    /// Exactly one `host` node per classified application.
    ///
    /// Must run after [`BuildState::resolve_remotes`]: the group comes from
    /// the application's role, and "is consumed by someone" is only known
    /// once remotes are resolved.
    pub(super) fn materialize_local_nodes(&mut self) {
        for (id, capability) in &self.classified {
            let consumed = self
                .consumers
                .get(id)
                .is_some_and(|consumers| !consumers.is_empty());
            let role = AppRole::derive(capability.has_remotes, capability.has_exposes, consumed);
            let config = &capability.config;

            let mut node = DependencyGraphNode::new(
                id.clone(),
                config.name.clone(),
                NodeType::Host,
                config.config_type,
                role.group(),
            )
            .with_size(config.remotes.len() + config.exposes.len() + config.shared.len());

            // same names the module pass turns into nodes
            let exposed: Vec<String> = config
                .exposes
                .iter()
                .filter(|e| !e.name.trim().is_empty())
                .map(|e| e.name.clone())
                .collect();
            if !exposed.is_empty() {
                node.exposed_modules = Some(exposed);
            }
            if !config.shared.is_empty() {
                node.shared_dependencies =
                    Some(config.shared.iter().map(|s| s.name.clone()).collect());
            }

            self.nodes.insert(id.clone(), node);
        }
    }
}
