//! Configuration Module Tests
//!
//! Tests for BridgeConfig defaults and layered loading through ConfigManager.

use canvas_bridge::{BridgeConfig, BridgeError, CanvasBridge, ConfigManager};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).expect("config file should be writable");
}

#[test]
fn config_has_expected_defaults() {
    let config = BridgeConfig::default();

    assert_eq!(config.context_type, "2d");
    assert!(!config.warn_on_overwrite);
    assert_eq!(config.initial_capacity, 16);
    assert!(config.logging.level.is_none());
    assert!(!config.logging.json);
}

#[test]
fn config_loads_defaults_from_empty_directory() {
    let dir = TempDir::new().unwrap();

    let manager =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test")
            .expect("empty directory should fall back to defaults");

    assert_eq!(manager.config().context_type, "2d");
    assert_eq!(manager.environment(), "test");
    assert_eq!(manager.config_directory(), dir.path());
}

#[test]
fn config_applies_environment_overrides() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        "canvas-bridge.yaml",
        "context_type: 2d\nwarn_on_overwrite: false\nlogging:\n  level: info\n",
    );
    write_config(
        &dir,
        "canvas-bridge.production.yaml",
        "warn_on_overwrite: true\nlogging:\n  json: true\n",
    );

    let development =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "development")
            .unwrap();
    assert!(!development.config().warn_on_overwrite);
    assert!(!development.config().logging.json);

    let production =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "production")
            .unwrap();
    assert!(production.config().warn_on_overwrite);
    assert!(production.config().logging.json);
    assert_eq!(production.config().logging.level.as_deref(), Some("info"));
}

#[test]
fn config_rejects_empty_context_type() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "canvas-bridge.yaml", "context_type: \"\"\n");

    let err = ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test")
        .unwrap_err();

    assert!(matches!(err, BridgeError::ConfigurationError(_)));
}

#[test]
fn config_rejects_malformed_yaml() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "canvas-bridge.yaml", "context_type: [unterminated\n");

    let result =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test");

    assert!(matches!(result, Err(BridgeError::ConfigurationError(_))));
}

#[test]
fn config_environment_variables_win() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "canvas-bridge.yaml", "initial_capacity: 4\n");

    std::env::set_var("CANVAS_BRIDGE__INITIAL_CAPACITY", "64");
    let result =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test");
    std::env::remove_var("CANVAS_BRIDGE__INITIAL_CAPACITY");

    assert_eq!(result.unwrap().config().initial_capacity, 64);
}

#[test]
fn config_debug_rendering_is_json() {
    let dir = TempDir::new().unwrap();
    let manager =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test")
            .unwrap();

    let rendered = manager.debug_config();
    assert_eq!(rendered["context_type"], "2d");
}

#[test]
fn loaded_config_drives_bridge() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "canvas-bridge.yaml", "context_type: webgl\n");

    let config =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test")
            .unwrap()
            .into_config();
    let bridge: CanvasBridge<()> = CanvasBridge::new(config);

    assert_eq!(bridge.config().context_type, "webgl");
}
