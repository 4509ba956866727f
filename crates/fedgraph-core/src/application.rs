//! Input records produced by the build-config extractor.
//!
//! These types mirror what the extractor hands over after parsing a
//! `webpack.config.js` or `vite.config.ts`: one [`ApplicationConfig`] per
//! federated application, grouped by the project root it was found under.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Build tool that produced an application's federation config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    Webpack,
    Vite,
}

impl ConfigType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigType::Webpack => "webpack",
            ConfigType::Vite => "vite",
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remote an application declares it consumes, identified by name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_type: Option<ConfigType>,
}

impl RemoteRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            config_type: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_config_type(mut self, config_type: ConfigType) -> Self {
        self.config_type = Some(config_type);
        self
    }
}

/// A module an application makes available to its consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposeRef {
    pub name: String,
    #[serde(default)]
    pub path: String,
}

impl ExposeRef {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// A library declared in an application's `shared` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedDependencyRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singleton: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eager: Option<bool>,
}

impl SharedDependencyRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Number of optional share hints that are populated.
    ///
    /// Used to pick the most informative declaration when several
    /// applications share the same library.
    pub fn detail_score(&self) -> usize {
        usize::from(self.version.is_some())
            + usize::from(self.singleton.is_some())
            + usize::from(self.required_version.is_some())
            + usize::from(self.eager.is_some())
    }
}

/// Federation settings of one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationConfig {
    #[serde(default)]
    pub name: String,
    pub config_type: ConfigType,
    #[serde(default)]
    pub remotes: Vec<RemoteRef>,
    #[serde(default)]
    pub exposes: Vec<ExposeRef>,
    #[serde(default)]
    pub shared: Vec<SharedDependencyRef>,
    /// Project root this application was discovered under. Empty means
    /// "the key this record is filed under in the snapshot".
    #[serde(default)]
    pub root_path: String,
}

impl ApplicationConfig {
    pub fn new(name: impl Into<String>, config_type: ConfigType) -> Self {
        Self {
            name: name.into(),
            config_type,
            remotes: Vec::new(),
            exposes: Vec::new(),
            shared: Vec::new(),
            root_path: String::new(),
        }
    }

    pub fn root(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = root_path.into();
        self
    }

    pub fn remote(mut self, remote: RemoteRef) -> Self {
        self.remotes.push(remote);
        self
    }

    pub fn expose(mut self, expose: ExposeRef) -> Self {
        self.exposes.push(expose);
        self
    }

    pub fn share(mut self, shared: SharedDependencyRef) -> Self {
        self.shared.push(shared);
        self
    }

    /// Whether the name is blank and the record must be ignored.
    pub fn is_anonymous(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// All application configs, keyed by the project root they were found in.
///
/// Insertion order is kept so repeated builds over the same snapshot emit
/// nodes and edges in the same order.
pub type ConfigSnapshot = IndexMap<String, Vec<ApplicationConfig>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let json = r#"{
            "name": "shell",
            "configType": "webpack",
            "remotes": [{ "name": "cart", "url": "http://localhost:3001/remoteEntry.js" }],
            "shared": [{ "name": "react", "requiredVersion": "^18.0.0", "singleton": true }]
        }"#;

        let config: ApplicationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.name, "shell");
        assert_eq!(config.config_type, ConfigType::Webpack);
        assert_eq!(config.remotes.len(), 1);
        assert_eq!(config.remotes[0].config_type, None);
        assert!(config.exposes.is_empty());
        assert_eq!(config.shared[0].required_version.as_deref(), Some("^18.0.0"));
        assert!(config.root_path.is_empty());
    }

    #[test]
    fn detail_score_counts_populated_hints() {
        assert_eq!(SharedDependencyRef::new("react").detail_score(), 0);
        let mut dep = SharedDependencyRef::new("react").with_version("18.2.0");
        assert_eq!(dep.detail_score(), 1);
        dep.singleton = Some(true);
        dep.eager = Some(false);
        assert_eq!(dep.detail_score(), 3);
    }

    #[test]
    fn blank_names_are_anonymous() {
        assert!(ApplicationConfig::new("   ", ConfigType::Vite).is_anonymous());
        assert!(!ApplicationConfig::new("host", ConfigType::Vite).is_anonymous());
    }
}
