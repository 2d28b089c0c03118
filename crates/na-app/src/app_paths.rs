use std::path::PathBuf;

use na_core::app_dirs::AppDirs;
use na_core::onboarding::USER_SETTINGS;
use na_core::AppConfig;

pub const DEFAULT_DATABASE_NAME: &str = "news_db";

/// Concrete on-disk locations, derived from the data root and config facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub preferences_path: PathBuf,
    pub db_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self::build(dirs.app_data_root.clone(), USER_SETTINGS, DEFAULT_DATABASE_NAME)
    }

    /// Config values win when present; empty ones fall back to the defaults.
    pub fn resolve(config: &AppConfig, dirs: &AppDirs) -> Self {
        let data_dir = if config.data_dir.as_os_str().is_empty() {
            dirs.app_data_root.clone()
        } else {
            config.data_dir.clone()
        };
        let preferences_name = non_empty_or(&config.preferences_name, USER_SETTINGS);
        let database_name = non_empty_or(&config.database_name, DEFAULT_DATABASE_NAME);

        Self::build(data_dir, preferences_name, database_name)
    }

    fn build(data_dir: PathBuf, preferences_name: &str, database_name: &str) -> Self {
        Self {
            preferences_path: data_dir.join(format!("{preferences_name}.preferences.json")),
            db_path: data_dir.join(format!("{database_name}.db")),
            logs_dir: data_dir.join("logs"),
            data_dir,
        }
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}
