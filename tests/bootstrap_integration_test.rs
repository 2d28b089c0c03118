//! # Bootstrap Integration Tests
//!
//! Config file, path resolution, wiring and command handlers together, the
//! way `main` runs them.

use std::fs;
use std::time::Duration;

use na_core::{DetailsEffect, StartDestination};
use newsapp_lib::bootstrap::{load_config, resolve_app_paths, wire_dependencies, AppRuntime};
use newsapp_lib::commands;
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let config_path = dir.path().join("newsapp.toml");
    fs::write(&config_path, body).unwrap();
    config_path
}

fn runtime_for(dir: &TempDir) -> AppRuntime {
    let data_dir = dir.path().join("data");
    let config_path = write_config(
        dir,
        &format!(
            r#"
            [storage]
            data_dir = "{}"
            preferences_name = "settings"
            database_name = "articles"

            [news]
            sources = ["bbc-news"]
            page_size = 10

            [details]
            toggle_timeout_ms = 2000
            "#,
            data_dir.display().to_string().replace('\\', "/")
        ),
    );

    let config = load_config(&config_path).unwrap();
    let paths = resolve_app_paths(&config).unwrap();
    let deps = wire_dependencies(&config, &paths).unwrap();
    AppRuntime::new(deps, paths)
}

#[test]
fn test_config_names_flow_into_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    let runtime = runtime_for(&dir);

    let data_dir = dir.path().join("data");
    assert_eq!(runtime.paths.data_dir, data_dir);
    assert_eq!(
        runtime.paths.preferences_path,
        data_dir.join("settings.preferences.json")
    );
    assert_eq!(runtime.paths.db_path, data_dir.join("articles.db"));
    assert!(runtime.paths.db_path.exists());

    assert_eq!(runtime.usecases().news_sources(), vec!["bbc-news".to_string()]);
    assert_eq!(runtime.deps.page_size, 10);
    assert_eq!(runtime.deps.toggle_timeout, Duration::from_millis(2000));
}

#[tokio::test]
async fn test_first_launch_then_restart() {
    let dir = TempDir::new().unwrap();

    let runtime = runtime_for(&dir);
    assert_eq!(
        commands::status(&runtime).await.unwrap().start_destination,
        StartDestination::Onboarding
    );
    commands::complete_onboarding(&runtime).await.unwrap();
    let effect = commands::toggle_save(
        &runtime,
        "https://example.com/a".to_string(),
        "A".to_string(),
    )
    .await
    .unwrap();
    assert_eq!(effect, DetailsEffect::Saved);
    drop(runtime);

    let restarted = runtime_for(&dir);
    let report = commands::status(&restarted).await.unwrap();
    assert_eq!(report.start_destination, StartDestination::Home);
    assert_eq!(report.saved_articles, 1);
    assert!(restarted.paths.preferences_path.exists());
}
