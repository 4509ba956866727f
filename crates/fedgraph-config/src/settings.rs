//! Tool settings, layered from defaults, `fedgraph.toml`, the environment
//! and command-line overrides.

use std::path::Path;

use fedgraph_core::{BuildOptions, DEFAULT_DYNAMIC_SHARED_SENTINEL, ResolutionPolicy};
use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Prefix for environment overrides. Nested keys use a double underscore,
/// e.g. `FEDGRAPH_GRAPH__RESOLUTION=exact`.
pub const ENV_PREFIX: &str = "FEDGRAPH_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    pub resolution: ResolutionPolicy,
    pub dynamic_shared_sentinel: String,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            resolution: ResolutionPolicy::default(),
            dynamic_shared_sentinel: DEFAULT_DYNAMIC_SHARED_SENTINEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub graph: GraphSettings,
    pub log_level: Option<String>,
}

/// Values given on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub resolution: Option<ResolutionPolicy>,
    pub dynamic_shared_sentinel: Option<String>,
}

impl Settings {
    /// Layered provider without command-line overrides.
    ///
    /// Priority: environment > settings file > defaults. A missing settings
    /// file is skipped.
    pub fn figment(settings_file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(path) = settings_file {
            debug!(path = %path.display(), "layering settings file");
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load settings from every layer.
    ///
    /// Priority: command line > environment > settings file > defaults.
    pub fn load(settings_file: Option<&Path>, overrides: &SettingsOverrides) -> Result<Self> {
        if let Some(path) = settings_file.filter(|path| !path.exists()) {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let mut figment = Self::figment(settings_file);

        if let Some(resolution) = overrides.resolution {
            figment = figment.merge(Serialized::default("graph.resolution", resolution));
        }
        if let Some(sentinel) = &overrides.dynamic_shared_sentinel {
            figment = figment.merge(Serialized::default("graph.dynamic_shared_sentinel", sentinel));
        }

        figment
            .extract()
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Options for the graph builder.
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            resolution: self.graph.resolution,
            dynamic_shared_sentinel: self.graph.dynamic_shared_sentinel.clone(),
        }
    }
}
