//! Environment variable overrides (own test binary: env vars are process-wide)

use std::env;
use std::fs;

use tempfile::TempDir;

use baltree::config::Settings;

#[test]
fn given_env_vars_when_load_then_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("baltree.toml");
    fs::write(&path, "[demo]\nsize = 25\nmax = 50\n").unwrap();

    env::set_var("BALTREE_DEMO__SIZE", "40");
    env::set_var("BALTREE_STYLE", "termtree");
    let settings = Settings::load(Some(&path));
    env::remove_var("BALTREE_DEMO__SIZE");
    env::remove_var("BALTREE_STYLE");

    let settings = settings.expect("load settings");
    assert_eq!(settings.demo.size, 40);
    assert_eq!(settings.demo.max, 50);
    assert_eq!(settings.style, baltree::config::DisplayStyle::Termtree);
}
