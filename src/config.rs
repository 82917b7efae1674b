//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::params::{ImageFormat, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Public placeholder-image service.
pub const DEFAULT_BASE_URL: &str = "https://placehold.co";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Where and how to reach the placeholder service.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Default request values, used when the caller leaves them unset.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Placeholder service settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Host address mixed into generated filenames.
    pub server_addr: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: 30, server_addr: None }
    }
}

/// Default request values from the config file.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Default width in pixels.
    pub width: u32,
    /// Default height in pixels.
    pub height: u32,
    /// Default image format.
    pub format: ImageFormat,
    /// Render grayscale by default.
    pub grayscale: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            format: ImageFormat::default(),
            grayscale: false,
        }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Base URL of the placeholder service, preferring the environment variable.
    #[must_use]
    pub fn base_url(&self) -> String {
        std::env::var("PLACEHOLD_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.service.base_url.clone())
            .trim_end_matches('/')
            .to_string()
    }

    /// Host address for filename uniqueness, preferring the environment variable.
    #[must_use]
    pub fn server_addr(&self) -> Option<String> {
        std::env::var("PLACEHOLD_SERVER_ADDR")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.service.server_addr.clone())
    }

    /// HTTP request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_secs)
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `PLACEHOLD_CONFIG` environment variable
/// 3. `~/.config/placehold/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("PLACEHOLD_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/placehold/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/placehold/config.toml")
    } else {
        PathBuf::from("placehold.toml")
    }
}
