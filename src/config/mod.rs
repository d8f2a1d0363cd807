// ABOUTME: Configuration management for the alert wizard
// Merges TOML config files from system, user and project locations plus environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const ENV_API_URL: &str = "ALERT_WIZARD_API_URL";
const ENV_API_KEY: &str = "ALERT_WIZARD_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the console backend, e.g. `https://console.example.com`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds. Unset means no client-side timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Redraw interval of the TUI in milliseconds (default: 250ms)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_base_url() -> String {
    "http://localhost:7071".to_string()
}

fn default_user_agent() -> String {
    format!("alert-wizard/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_tick_rate() -> u64 {
    250
}

impl AppConfig {
    /// Load configuration from the default locations, an optional explicit file
    /// and the process environment
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut paths = Self::get_config_paths();
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            paths.push(path.to_path_buf());
        }

        let mut config = Self::load_from(&paths)?;
        config.apply_env(&load_from_env());
        Ok(config)
    }

    /// Load and merge the given files in order; later files win. Missing files are skipped.
    pub fn load_from(paths: &[PathBuf]) -> Result<Self> {
        let mut config = Self::default();

        for path in paths {
            if path.exists() {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;

                let layer: ConfigLayer = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config from {}", path.display()))?;

                debug!("Merging config from {}", path.display());
                config.merge(layer);
            }
        }

        Ok(config)
    }

    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let config_path = dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(config_path)
    }

    /// Get configuration file paths, lowest precedence first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/alert-wizard/config.toml")];

        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".alert-wizard").join("config.toml"));
        }

        paths
    }

    /// Get user configuration directory (~/.alert-wizard)
    fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".alert-wizard"))
    }

    /// Directory for JSONL log files
    pub fn log_dir() -> PathBuf {
        Self::get_user_config_dir()
            .unwrap_or_else(|_| PathBuf::from(".alert-wizard"))
            .join("logs")
    }

    /// Merge one file's settings into this config. Every key the file sets wins,
    /// even when it restates the built-in default.
    fn merge(&mut self, layer: ConfigLayer) {
        // Version always comes from the binary
        if let Some(base_url) = layer.api.base_url {
            self.api.base_url = base_url;
        }
        if let Some(api_key) = layer.api.api_key {
            self.api.api_key = Some(api_key);
        }
        if let Some(timeout_secs) = layer.api.timeout_secs {
            self.api.timeout_secs = Some(timeout_secs);
        }
        if let Some(user_agent) = layer.api.user_agent {
            self.api.user_agent = user_agent;
        }
        if let Some(tick_rate_ms) = layer.ui.tick_rate_ms {
            self.ui.tick_rate_ms = tick_rate_ms;
        }
    }

    /// Apply `ALERT_WIZARD_*` overrides
    pub fn apply_env(&mut self, vars: &HashMap<String, String>) {
        if let Some(url) = vars.get(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(key) = vars.get(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.api.api_key = Some(key.trim().to_string());
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            api: ApiConfig::default(),
            ui: UiPreferences::default(),
        }
    }
}

/// Settings present in a single config file; absent keys stay `None`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    api: ApiLayer,
    ui: UiLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiLayer {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UiLayer {
    tick_rate_ms: Option<u64>,
}

/// Load configuration from environment
pub fn load_from_env() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(k, _)| k.starts_with("ALERT_WIZARD_"))
        .collect()
}
