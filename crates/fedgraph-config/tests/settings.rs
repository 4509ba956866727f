//! Tests for settings layering: defaults < fedgraph.toml < environment < command line.

use fedgraph_config::{ConfigError, Settings, SettingsDiscovery, SettingsOverrides};
use fedgraph_core::ResolutionPolicy;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write_settings(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("fedgraph.toml"), content).unwrap();
}

#[test]
#[serial]
fn discovered_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    write_settings(
        &dir,
        r#"
log_level = "debug"

[graph]
resolution = "case-insensitive"
"#,
    );

    let settings = SettingsDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(settings.graph.resolution, ResolutionPolicy::CaseInsensitive);
    assert_eq!(settings.graph.dynamic_shared_sentinel, "<dynamic>");
    assert_eq!(settings.log_level.as_deref(), Some("debug"));
}

#[test]
#[serial]
fn missing_discovered_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = SettingsDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
#[serial]
fn command_line_overrides_file() {
    let dir = TempDir::new().unwrap();
    write_settings(
        &dir,
        r#"
[graph]
resolution = "fuzzy"
dynamic_shared_sentinel = "@dynamic"
"#,
    );

    let overrides = SettingsOverrides {
        resolution: Some(ResolutionPolicy::Exact),
        dynamic_shared_sentinel: None,
    };
    let settings = SettingsDiscovery::new(dir.path())
        .load_with(&overrides)
        .unwrap();
    assert_eq!(settings.graph.resolution, ResolutionPolicy::Exact);
    assert_eq!(settings.graph.dynamic_shared_sentinel, "@dynamic");
}

#[test]
#[serial]
fn environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, "[graph]\nresolution = \"fuzzy\"\n");

    unsafe {
        std::env::set_var("FEDGRAPH_GRAPH__RESOLUTION", "exact");
    }
    let result = SettingsDiscovery::new(dir.path()).load();
    unsafe {
        std::env::remove_var("FEDGRAPH_GRAPH__RESOLUTION");
    }

    assert_eq!(result.unwrap().graph.resolution, ResolutionPolicy::Exact);
}

#[test]
#[serial]
fn unknown_resolution_is_invalid_value() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, "[graph]\nresolution = \"telepathic\"\n");

    let result = SettingsDiscovery::new(dir.path()).load();
    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
}

#[test]
#[serial]
fn build_options_carry_settings() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, "[graph]\ndynamic_shared_sentinel = \"*\"\n");

    let options = SettingsDiscovery::new(dir.path())
        .load()
        .unwrap()
        .build_options();
    assert_eq!(options.resolution, ResolutionPolicy::Fuzzy);
    assert_eq!(options.dynamic_shared_sentinel, "*");
}
