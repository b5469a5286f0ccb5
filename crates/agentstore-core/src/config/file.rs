//! Application configuration (YAML file plus environment overrides)
//!
//! The user-level file lives at `~/.config/agentstore/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{ConfigResult, EnvSource};

/// Variable selecting the settings store backend
pub const SETTINGS_STORE_TYPE_VAR: &str = "SETTINGS_STORE_TYPE";
/// Variable selecting the secrets store backend
pub const SECRETS_STORE_TYPE_VAR: &str = "SECRETS_STORE_TYPE";
/// Variable holding the root path for file-backed stores
pub const FILE_STORE_PATH_VAR: &str = "FILE_STORE_PATH";

/// Backend name of the built-in in-memory stores
pub const MEMORY_BACKEND: &str = "memory";

fn default_backend() -> String {
    MEMORY_BACKEND.to_string()
}

/// Application configuration handed to store factories
///
/// The in-memory backends ignore its contents; other backends read the
/// fields they need (e.g. `file_store_path`).
///
/// # Example
///
/// ```no_run
/// use agentstore_core::config::{AppConfig, ProcessEnv};
///
/// let config = AppConfig::resolve(&ProcessEnv::new(), Some(&AppConfig::user_config_path())).unwrap();
/// println!("settings backend: {}", config.settings_store_type);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend name for settings stores
    pub settings_store_type: String,
    /// Backend name for secrets stores
    pub secrets_store_type: String,
    /// Root directory for file-backed stores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_store_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_store_type: default_backend(),
            secrets_store_type: default_backend(),
            file_store_path: None,
        }
    }
}

impl AppConfig {
    /// Path of the user-level config file
    pub fn user_config_path() -> PathBuf {
        // Use XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("agentstore").join("config.yaml")
    }

    /// Load config from a YAML file, defaults when the file doesn't exist
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a YAML file
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build config from environment variables alone
    pub fn from_env(env: &dyn EnvSource) -> Self {
        let mut config = Self::default();
        config.apply_env(env);
        config
    }

    /// Load the file (if any), then apply environment overrides
    pub fn resolve(env: &dyn EnvSource, path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env(env);
        Ok(config)
    }

    // An empty variable is not an override
    fn apply_env(&mut self, env: &dyn EnvSource) {
        if let Some(value) = env.non_empty(SETTINGS_STORE_TYPE_VAR) {
            self.settings_store_type = value.to_lowercase();
        }
        if let Some(value) = env.non_empty(SECRETS_STORE_TYPE_VAR) {
            self.secrets_store_type = value.to_lowercase();
        }
        if let Some(value) = env.non_empty(FILE_STORE_PATH_VAR) {
            self.file_store_path = Some(PathBuf::from(value));
        }
    }
}
