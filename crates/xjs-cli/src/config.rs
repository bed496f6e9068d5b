use crate::types::ColorMode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "XJS_CONFIG";

pub const DEFAULT_REVISION_ENDPOINT: &str =
    "https://api.jujucharms.com/charmstore/v5/meta/id-revision";

/// Resolve the configuration file path based on priority:
/// 1. Explicit `--config` path
/// 2. XJS_CONFIG environment variable
/// 3. `<config_dir>/xjs/config.toml`
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|dir| dir.join("xjs").join("config.toml"))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevisionLookupConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for RevisionLookupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: DEFAULT_REVISION_ENDPOINT.to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub color: ColorMode,
    pub hide_scale_zero: bool,
    pub hide_subordinates: bool,
    pub revision_lookup: RevisionLookupConfig,
}

impl Config {
    /// Load from the resolved location; no file at all means defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }
}
