//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML -> DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation
//!
//! Empty values are facts ("not configured"); resolving them to concrete
//! paths and numbers is the job of the bootstrap layer.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root directory for preference files, the database and logs.
    pub data_dir: PathBuf,

    /// Name of the preference store (file stem).
    pub preferences_name: String,

    /// Name of the saved-articles database (file stem).
    pub database_name: String,

    /// News sources requested by the home feed.
    pub news_sources: Vec<String>,

    /// Articles per feed page. Zero means unset.
    pub page_size: u32,

    /// Upper bound for a single save/unsave toggle. Zero means unset.
    pub toggle_timeout_ms: u64,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// This method must NOT contain any validation or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let storage = toml_value.get("storage");
        let news = toml_value.get("news");

        Ok(Self {
            data_dir: PathBuf::from(
                storage
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            preferences_name: storage
                .and_then(|s| s.get("preferences_name"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            database_name: storage
                .and_then(|s| s.get("database_name"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            news_sources: news
                .and_then(|n| n.get("sources"))
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
            page_size: news
                .and_then(|n| n.get("page_size"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0) as u32,
            toggle_timeout_ms: toml_value
                .get("details")
                .and_then(|d| d.get("toggle_timeout_ms"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0) as u64,
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            preferences_name: String::new(),
            database_name: String::new(),
            news_sources: Vec::new(),
            page_size: 0,
            toggle_timeout_ms: 0,
        }
    }
}
