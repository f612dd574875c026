//! Integration tests for Settings loading from explicit config files.
//!
//! Note: environment overrides live in `config_env_test.rs` so that setting
//! `BALTREE_*` variables cannot leak into these tests.

use std::fs;

use tempfile::TempDir;

use baltree::application::ApplicationError;
use baltree::config::{DisplayStyle, Settings};

#[test]
fn given_partial_config_file_when_load_then_missing_keys_use_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("baltree.toml");
    fs::write(
        &path,
        r#"
[demo]
size = 25
seed = 1234
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.demo.size, 25);
    assert_eq!(settings.demo.seed, Some(1234));
    assert_eq!(settings.demo.max, 100);
    assert_eq!(settings.demo.inserts, 5);
    assert_eq!(settings.style, DisplayStyle::Sideways);
}

#[test]
fn given_style_in_config_file_when_load_then_style_applied() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("baltree.toml");
    fs::write(&path, "style = \"termtree\"\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.style, DisplayStyle::Termtree);
}

#[test]
fn given_invalid_value_in_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("baltree.toml");
    fs::write(&path, "style = \"diagonal\"\n").unwrap();

    let result = Settings::load(Some(&path));

    assert!(
        matches!(result, Err(ApplicationError::Config { .. })),
        "expected config error, got {:?}",
        result
    );
}

#[test]
fn given_missing_config_file_when_load_then_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::ConfigNotFound(p)) if p == path));
}

#[test]
fn given_loaded_settings_when_to_toml_then_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("baltree.toml");
    fs::write(&path, "[demo]\ninserts = 8\ninsert_max = 40\n").unwrap();
    let settings = Settings::load(Some(&path)).expect("load settings");

    let rendered = settings.to_toml().expect("serialize");
    let again = dir.path().join("again.toml");
    fs::write(&again, rendered).unwrap();

    assert_eq!(Settings::load(Some(&again)).expect("reload"), settings);
}
