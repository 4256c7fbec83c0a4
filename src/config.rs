// ABOUTME: Configuration management for viecnong
// Layered TOML config (project, user, system) plus environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "VIECNONG_API_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Marketplace API connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Session persistence
    #[serde(default)]
    pub session: SessionConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the version prefix, e.g. http://localhost:8080/api/v1
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where the session file lives (default: ~/.viecnong/session.json)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Whether to show the step progress bar in the wizard header.
    /// Unset in a file means "inherit from the layer below".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_progress: Option<bool>,
}

impl UiPreferences {
    pub fn show_progress(&self) -> bool {
        self.show_progress.unwrap_or(true)
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("viecnong/{}", env!("CARGO_PKG_VERSION"))
}

impl AppConfig {
    /// Load configuration from default locations, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Lowest precedence first so later files win
        for path in Self::get_config_paths().into_iter().rev() {
            if path.exists() {
                debug!("Loading config from {}", path.display());
                config.merge(Self::load_from(&path)?);
            }
        }

        config.apply_env_overrides(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Load a single config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Get configuration file paths in order of precedence (highest first)
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".viecnong").join("config.toml"));
        }

        // 2. User config (~/.viecnong/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        // 3. System config
        paths.push(PathBuf::from("/etc/viecnong/config.toml"));

        paths
    }

    /// Base directory for config, session and logs
    pub fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".viecnong"))
    }

    /// Resolved session file path
    pub fn session_path(&self) -> Result<PathBuf> {
        match &self.session.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::get_user_config_dir()?.join("session.json")),
        }
    }

    /// Merge another config into this one. Values equal to the defaults don't override.
    fn merge(&mut self, other: AppConfig) {
        if other.api.base_url != default_base_url() {
            self.api.base_url = other.api.base_url;
        }
        if other.api.timeout_secs != default_timeout() {
            self.api.timeout_secs = other.api.timeout_secs;
        }
        if other.api.user_agent != default_user_agent() {
            self.api.user_agent = other.api.user_agent;
        }

        if other.session.path.is_some() {
            self.session.path = other.session.path;
        }

        if other.ui.show_progress.is_some() {
            self.ui.show_progress = other.ui.show_progress;
        }
    }

    fn apply_env_overrides(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            debug!("API URL overridden from {}", API_URL_ENV);
            self.api.base_url = url;
        }
    }
}
