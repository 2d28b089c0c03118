//! # Dependency Injection
//!
//! Creates the infra adapters and hands them to the application as
//! `Arc<dyn Port>`. Assembly only: no business decisions, no config
//! validation. Empty config values are resolved to defaults here.
//!
//! This is the only place allowed to depend on `na-infra` and `na-app` at
//! the same time.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use na_app::app_paths::AppPaths;
use na_app::usecases::{DEFAULT_PAGE_SIZE, DEFAULT_TOGGLE_TIMEOUT};
use na_app::{AppDeps, GetNews};
use na_core::app_dirs::AppDirs;
use na_core::config::AppConfig;
use na_core::ports::*;
use na_infra::db::executor::DieselSqliteExecutor;
use na_infra::db::pool::{init_db_pool, DbPool};
use na_infra::db::repositories::DieselArticleRepository;
use na_infra::fs::DirsAppDirsAdapter;
use na_infra::{FilePreferenceStore, PreferenceOnboardingFlag};

pub type WiringResult<T> = Result<T, WiringError>;

/// Infrastructure initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Data directory resolution failed: {0}")]
    AppDirs(String),

    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
}

/// Resolve on-disk locations from config, falling back to the platform data
/// directory.
pub fn resolve_app_paths(config: &AppConfig) -> WiringResult<AppPaths> {
    if !config.data_dir.as_os_str().is_empty() {
        let configured = AppDirs {
            app_data_root: config.data_dir.clone(),
        };
        return Ok(AppPaths::resolve(config, &configured));
    }

    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .map_err(|e| WiringError::AppDirs(e.to_string()))?;
    Ok(AppPaths::resolve(config, &app_dirs))
}

fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {}", e)))
}

fn resolve_news_sources(config: &AppConfig) -> Vec<String> {
    if config.news_sources.is_empty() {
        GetNews::default_sources()
    } else {
        config.news_sources.clone()
    }
}

fn resolve_page_size(config: &AppConfig) -> u32 {
    if config.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        config.page_size
    }
}

fn resolve_toggle_timeout(config: &AppConfig) -> Duration {
    if config.toggle_timeout_ms == 0 {
        DEFAULT_TOGGLE_TIMEOUT
    } else {
        Duration::from_millis(config.toggle_timeout_ms)
    }
}

/// Wire every port for the given paths.
///
/// 1. Open (and migrate) the saved-articles database
/// 2. Create the preference store and the onboarding flag on top of it
/// 3. Resolve the news and details settings
pub fn wire_dependencies(config: &AppConfig, paths: &AppPaths) -> WiringResult<AppDeps> {
    let db_pool = create_db_pool(&paths.db_path)?;
    let executor = DieselSqliteExecutor::new(db_pool);
    let articles: Arc<dyn ArticleRepositoryPort> = Arc::new(DieselArticleRepository::new(executor));

    let preferences: Arc<dyn PreferenceStorePort> =
        Arc::new(FilePreferenceStore::new(paths.preferences_path.clone()));
    let onboarding_flag: Arc<dyn OnboardingFlagPort> =
        Arc::new(PreferenceOnboardingFlag::new(preferences.clone()));

    tracing::debug!(
        db = %paths.db_path.display(),
        preferences = %paths.preferences_path.display(),
        "dependencies wired"
    );

    Ok(AppDeps {
        onboarding_flag,
        articles,
        news_sources: resolve_news_sources(config),
        page_size: resolve_page_size(config),
        toggle_timeout: resolve_toggle_timeout(config),
    })
}
