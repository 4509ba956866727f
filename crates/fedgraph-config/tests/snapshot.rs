//! Tests for loading config snapshots from disk.

use fedgraph_config::{ConfigError, load_snapshot, validate_snapshot};
use fedgraph_core::{ConfigType, build_dependency_graph};
use std::fs;
use tempfile::TempDir;

const SHOP_JSON: &str = r#"{
  "/workspace/shop": [
    {
      "name": "shell",
      "configType": "webpack",
      "remotes": [{ "name": "cart", "url": "http://localhost:3001/remoteEntry.js" }],
      "shared": [{ "name": "react", "version": "^18.2.0" }]
    },
    {
      "name": "cart",
      "configType": "webpack",
      "exposes": [{ "name": "./Cart", "path": "./src/Cart.tsx" }],
      "shared": [{ "name": "react" }]
    }
  ]
}"#;

#[tokio::test]
async fn loads_json_snapshot_and_builds_graph() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(&path, SHOP_JSON).unwrap();

    let snapshot = load_snapshot(&path).await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot["/workspace/shop"][1].config_type, ConfigType::Webpack);

    let graph = build_dependency_graph(&snapshot);
    assert_eq!(graph.metadata.total_hosts, 2);
    assert_eq!(graph.metadata.total_shared_deps, 1);
    assert_eq!(graph.metadata.total_exposed_modules, 1);
    assert!(validate_snapshot(&snapshot).is_clean());
}

#[tokio::test]
async fn loads_toml_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.toml");
    fs::write(
        &path,
        r#"
[["/workspace/admin"]]
name = "admin"
configType = "vite"
remotes = [{ name = "reports" }]
"#,
    )
    .unwrap();

    let snapshot = load_snapshot(&path).await.unwrap();
    let graph = build_dependency_graph(&snapshot);
    assert_eq!(graph.metadata.total_hosts, 1);
    assert_eq!(graph.metadata.total_remotes, 1);
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    assert!(matches!(load_snapshot(&path).await, Err(ConfigError::NotFound(p)) if p == path));
}

#[tokio::test]
async fn unknown_extension_is_rejected_before_reading() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.yaml");
    assert!(matches!(
        load_snapshot(&path).await,
        Err(ConfigError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn missing_config_type_is_invalid_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(&path, r#"{ "/a": [{ "name": "shell" }] }"#).unwrap();

    let err = load_snapshot(&path).await.unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSnapshot { .. }));
    assert!(err.to_string().contains("configType"));
}
