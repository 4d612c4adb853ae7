//! Integration tests for Settings config loading.
//!
//! These tests pass an explicit config file instead of the global one, so
//! they never read the user's `$XDG_CONFIG_HOME/mobile/mobile.toml`.
//! Environment overrides are passed as explicit maps, so no test mutates
//! the process environment.

use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;

use mobile::application::ApplicationError;
use mobile::config::Settings;

#[test]
fn given_no_config_file_when_load_then_tree_defaults_to_false() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_from(Some(dir.path().join("missing.toml").as_path())).unwrap();
    assert!(!settings.tree);
}

#[test]
fn given_config_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mobile.toml");
    fs::write(&path, "tree = true\n").unwrap();

    let settings = Settings::load_from(Some(path.as_path())).unwrap();

    assert!(settings.tree);
}

#[test]
fn given_malformed_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mobile.toml");
    fs::write(&path, "tree = [not toml").unwrap();

    let result = Settings::load_from(Some(path.as_path()));

    match result {
        Err(ApplicationError::Config { message }) => assert!(message.contains("parse")),
        other => panic!("expected config error, got {:?}", other),
    }
}

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn given_env_override_when_load_then_env_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mobile.toml");
    fs::write(&path, "color = true\n").unwrap();

    let settings =
        Settings::load_with(Some(path.as_path()), env(&[("MOBILE_COLOR", "false")])).unwrap();

    assert!(!settings.color);
}

#[test]
fn given_non_boolean_env_value_when_load_then_config_error() {
    let result = Settings::load_with(None, env(&[("MOBILE_COLOR", "nope")]));

    match result {
        Err(ApplicationError::Config { message }) => assert!(message.contains("MOBILE_COLOR")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn given_empty_env_when_load_then_defaults() {
    let settings = Settings::load_with(None, env(&[])).unwrap();
    assert_eq!(settings, Settings::default());
}
