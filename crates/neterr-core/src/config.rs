use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Retry advice parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum attempts (including the first) while failures stay immediately retryable.
    #[serde(default = "default_max_immediate_attempts")]
    pub max_immediate_attempts: u32,
    /// Advise waiting for a connectivity change on disconnection/DNS failures.
    #[serde(default = "default_await_connectivity")]
    pub await_connectivity: bool,
}

fn default_max_immediate_attempts() -> u32 {
    3
}

fn default_await_connectivity() -> bool {
    true
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_immediate_attempts: default_max_immediate_attempts(),
            await_connectivity: default_await_connectivity(),
        }
    }
}

/// Global configuration loaded from `~/.config/neterr/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeterrConfig {
    /// Optional retry section; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl NeterrConfig {
    /// Retry section, falling back to defaults.
    pub fn retry_or_default(&self) -> RetryConfig {
        self.retry.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("neterr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NeterrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NeterrConfig {
            retry: Some(RetryConfig::default()),
        };
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<NeterrConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: NeterrConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
