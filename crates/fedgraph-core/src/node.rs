use std::fmt;

use serde::{Deserialize, Serialize};

use crate::application::ConfigType;
use crate::node_id::NodeId;

/// Kind of node in the federation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeType {
    /// A local application, whatever role it plays.
    Host,
    /// A remote that does not resolve to any local application.
    Remote,
    SharedDependency,
    ExposedModule,
}

impl NodeType {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Host => "host",
            NodeType::Remote => "remote",
            NodeType::SharedDependency => "shared-dependency",
            NodeType::ExposedModule => "exposed-module",
        }
    }

    /// Tag with hyphens replaced by spaces, for display.
    pub fn humanized(self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation cluster a node belongs to.
///
/// Exposed modules cluster under the application that owns them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeGroup {
    Hosts,
    Bidirectional,
    Remotes,
    Shared,
    Owner(NodeId),
}

impl NodeGroup {
    pub fn as_str(&self) -> &str {
        match self {
            NodeGroup::Hosts => "hosts",
            NodeGroup::Bidirectional => "bidirectional",
            NodeGroup::Remotes => "remotes",
            NodeGroup::Shared => "shared",
            NodeGroup::Owner(owner) => owner.as_str(),
        }
    }
}

impl fmt::Display for NodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for NodeGroup {
    fn from(value: String) -> Self {
        match value.as_str() {
            "hosts" => NodeGroup::Hosts,
            "bidirectional" => NodeGroup::Bidirectional,
            "remotes" => NodeGroup::Remotes,
            "shared" => NodeGroup::Shared,
            _ => NodeGroup::Owner(NodeId::from_raw(value)),
        }
    }
}

impl From<NodeGroup> for String {
    fn from(group: NodeGroup) -> Self {
        group.as_str().to_string()
    }
}

/// A node of the consolidated federation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyGraphNode {
    pub id: NodeId,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub config_type: ConfigType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposed_modules: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_dependencies: Option<Vec<String>>,
    /// Rough weight for presentation; always at least 1.
    pub size: usize,
    pub group: NodeGroup,
    /// Runtime status a caller may attach (e.g. "running"); never set while building.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl DependencyGraphNode {
    pub fn new(
        id: NodeId,
        label: impl Into<String>,
        node_type: NodeType,
        config_type: ConfigType,
        group: NodeGroup,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            node_type,
            config_type,
            url: None,
            version: None,
            exposed_modules: None,
            shared_dependencies: None,
            size: 1,
            group,
            status: None,
        }
    }

    /// Set the presentation weight, flooring at 1.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size.max(1);
        self
    }
}
