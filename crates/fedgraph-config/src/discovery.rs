//! Settings file discovery for CLI use.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::settings::{Settings, SettingsOverrides};

pub const SETTINGS_FILE_NAME: &str = "fedgraph.toml";

/// Looks for `fedgraph.toml` in a directory.
///
/// # Example
///
/// ```no_run
/// use fedgraph_config::SettingsDiscovery;
///
/// let settings = SettingsDiscovery::new(".").load().unwrap();
/// println!("{}", settings.graph.resolution);
/// ```
pub struct SettingsDiscovery {
    root: PathBuf,
}

impl SettingsDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the settings file, if the root has one.
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(SETTINGS_FILE_NAME);
        path.is_file().then_some(path)
    }

    /// Load settings, using the discovered file when there is one.
    ///
    /// Unlike an explicit path, a missing file is not an error.
    pub fn load(&self) -> Result<Settings> {
        self.load_with(&SettingsOverrides::default())
    }

    pub fn load_with(&self, overrides: &SettingsOverrides) -> Result<Settings> {
        Settings::load(self.find().as_deref(), overrides)
    }
}

/// Discover and load settings from the current directory.
pub fn discover(overrides: &SettingsOverrides) -> Result<Settings> {
    let root = std::env::current_dir()?;
    SettingsDiscovery::new(&root).load_with(overrides)
}
