//! # Configuration Loader
//!
//! Reads the TOML file and maps it into the [`AppConfig`] DTO.
//!
//! No validation and no defaults here: empty values are facts and are
//! resolved later by [`AppPaths`](na_app::app_paths::AppPaths) and wiring.

use std::path::{Path, PathBuf};

use anyhow::Context;
use na_core::config::AppConfig;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "NEWSAPP_CONFIG";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Explicit path first, then `NEWSAPP_CONFIG`.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

/// Load the resolved config file, or an empty config when none is named.
pub fn load_config_or_empty(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match resolve_config_path(explicit) {
        Some(path) => load_config(&path),
        None => Ok(AppConfig::empty()),
    }
}
