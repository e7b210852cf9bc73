//! Configuration loading and cache directory resolution

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use medsift_core::ExtractParams;
use serde::Deserialize;

/// Environment variable overriding the article cache directory.
pub const CACHE_DIR_ENV: &str = "MEDSIFT_CACHE_DIR";

/// On-disk configuration file (TOML). Every field is optional; a missing
/// file yields the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Article cache directory.
    pub cache_dir: Option<PathBuf>,
    /// Wikipedia endpoint overrides.
    pub wiki: WikiSection,
    /// Extraction heuristic overrides.
    pub extract: ExtractParams,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WikiSection {
    pub api_url: Option<String>,
    pub page_base_url: Option<String>,
}

/// Load the config file: an explicit path, else the platform config
/// directory (`<config>/medsift/config.toml`).
pub fn load(path: Option<&Path>) -> Result<FileConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(FileConfig::default()),
        },
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("medsift").join("config.toml"))
}

/// Cache directory resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. MEDSIFT_CACHE_DIR environment variable
/// 3. TOML config file
/// 4. Platform cache directory fallback
pub fn resolve_cache_dir(cli_arg: Option<&Path>, file: &FileConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var(CACHE_DIR_ENV) {
        return PathBuf::from(path);
    }
    if let Some(path) = &file.cache_dir {
        return path.clone();
    }
    dirs::cache_dir()
        .map(|dir| dir.join("medsift"))
        .unwrap_or_else(|| PathBuf::from("./medsift-cache"))
}
