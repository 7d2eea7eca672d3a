//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/karytree/karytree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `KARYTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::TraversalOrder;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid setting {key}: {message}")]
    Invalid { key: String, message: String },
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::Config {
        message: e.to_string(),
    }
}

/// Unified configuration for karytree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Branching factor used when the command line does not give one
    pub arity: usize,
    /// Traversals printed by `walk` when none are requested
    pub orders: Vec<TraversalOrder>,
    /// Separator between printed values
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arity: 2,
            orders: TraversalOrder::ALL.to_vec(),
            separator: ", ".into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub arity: Option<usize>,
    pub orders: Option<Vec<TraversalOrder>>,
    pub separator: Option<String>,
}

/// Get the XDG config directory for karytree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "karytree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("karytree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| SettingsError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            arity: overlay.arity.unwrap_or(self.arity),
            orders: overlay
                .orders
                .clone()
                .unwrap_or_else(|| self.orders.clone()),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; unlike the global file it must exist
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply KARYTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, SettingsError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("KARYTREE")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("orders")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Some(val) = Self::env_arity(&config)? {
            settings.arity = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("orders") {
            settings.orders = val
                .iter()
                .map(|name| name.parse::<TraversalOrder>())
                .collect::<Result<_, _>>()
                .map_err(|e| SettingsError::Invalid {
                    key: "orders".into(),
                    message: e.to_string(),
                })?;
        }
        if let Ok(val) = config.get_string("separator") {
            settings.separator = val;
        }

        Ok(settings)
    }

    /// `KARYTREE_ARITY`, if set. A value that is present but not a non-negative integer is an error.
    fn env_arity(config: &Config) -> Result<Option<usize>, SettingsError> {
        let invalid = |message: String| SettingsError::Invalid {
            key: "arity".into(),
            message,
        };
        match config.get_int("arity") {
            Ok(val) => usize::try_from(val)
                .map(Some)
                .map_err(|_| invalid(format!("{val} is not a valid arity"))),
            Err(ConfigError::NotFound(_)) => Ok(None),
            Err(e) => Err(invalid(e.to_string())),
        }
    }

    /// Render as TOML, as shown by `config show`.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Config {
            message: e.to_string(),
        })
    }
}
