//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `-C <path>` if given, else `$XDG_CONFIG_HOME/baltree/baltree.toml`
//! 3. Environment variables: `BALTREE_*` prefix, `__` between sections
//!    (e.g. `BALTREE_DEMO__SIZE=20`)
//!
//! Command line flags override the loaded settings in the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;

/// How trees are rendered on the terminal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// Right subtree above, left subtree below
    #[default]
    Sideways,
    /// Top-down with children indented under their parent
    Termtree,
}

/// Parameters of the demonstration run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of random values in the initial array
    pub size: usize,
    /// Exclusive upper bound of the initial values
    pub max: i64,
    /// Number of random values inserted after the build
    pub inserts: usize,
    /// Exclusive upper bound of the inserted values
    pub insert_max: i64,
    /// Fixed RNG seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: 10,
            max: 100,
            inserts: 5,
            insert_max: 20,
            seed: None,
        }
    }
}

/// Unified configuration for baltree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default rendering for `show` and `demo`
    pub style: DisplayStyle,
    /// Demonstration run parameters
    pub demo: DemoConfig,
}

/// Get the XDG config directory for baltree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "baltree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("baltree.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// An explicit `config_path` must exist; the global file is optional.
    #[instrument(level = "debug")]
    pub fn load(config_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut builder = Config::builder();

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ApplicationError::ConfigNotFound(path.to_path_buf()));
                }
                debug!("using config file {}", path.display());
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        debug!("using global config {}", global_path.display());
                        builder = builder.add_source(File::from(global_path).required(false));
                    }
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("BALTREE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
