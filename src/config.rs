//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/mobile/mobile.toml`
//! 3. Environment variables: `MOBILE_*` prefix
//!
//! Settings only affect presentation. The balance and equality tolerance is fixed.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for mobile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Colorize verdicts and errors (default: true)
    pub color: bool,
    /// Show the tree view in `show` without `--tree` (default: false)
    pub tree: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            tree: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub color: Option<bool>,
    pub tree: Option<bool>,
}

/// Get the XDG config directory for mobile.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mobile").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mobile.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            color: overlay.color.unwrap_or(self.color),
            tree: overlay.tree.unwrap_or(self.tree),
        }
    }

    /// Load settings from defaults, the config file at `config_path`
    /// (normally [`global_config_path`]) and `MOBILE_*` variables.
    ///
    /// A missing file is not an error, an unreadable or malformed one is.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with(config_path, None)
    }

    /// Like [`Settings::load_from`], reading `MOBILE_*` variables from `env`
    /// instead of the process environment when given.
    pub fn load_with(
        config_path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                debug!("Loading config: {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current, env)
    }

    /// Apply MOBILE_* environment variables as explicit overrides.
    ///
    /// A variable that is set but not a boolean is a config error.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("MOBILE").source(env))
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_bool(&config, "color")? {
            settings.color = val;
        }
        if let Some(val) = env_bool(&config, "tree")? {
            settings.tree = val;
        }

        Ok(settings)
    }

    /// Render as TOML, e.g. for `mobile config show`.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

fn env_bool(config: &Config, key: &str) -> Result<Option<bool>, ApplicationError> {
    match config.get_bool(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("MOBILE_{}: {}", key.to_uppercase(), e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_with_keeps_unspecified() {
        let base = Settings::default();
        let merged = base.merge_with(&RawSettings {
            color: None,
            tree: Some(true),
        });
        assert!(merged.color);
        assert!(merged.tree);
    }

    #[test]
    fn test_to_toml() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("color = true"));
        assert!(toml.contains("tree = false"));
    }
}
