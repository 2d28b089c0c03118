use std::path::PathBuf;

use na_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "newsapp";

/// `NA_PROFILE=dev` keeps a separate data root (`newsapp-dev`) per profile.
fn resolved_app_dir_name() -> String {
    match std::env::var("NA_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

#[derive(Default)]
pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
        }
    }

    /// Adapter resolving under `base` instead of the platform data directory.
    #[cfg(test)]
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
        }
    }

    /// Overridden base directory if set, otherwise `dirs::data_local_dir()`.
    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(resolved_app_dir_name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static NA_PROFILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_na_profile<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = NA_PROFILE_ENV_LOCK.lock().unwrap();
        let previous = std::env::var("NA_PROFILE").ok();

        match value {
            Some(profile) => std::env::set_var("NA_PROFILE", profile),
            None => std::env::remove_var("NA_PROFILE"),
        }

        let result = f();

        match previous {
            Some(profile) => std::env::set_var("NA_PROFILE", profile),
            None => std::env::remove_var("NA_PROFILE"),
        }

        result
    }

    #[test]
    fn adapter_appends_newsapp_dir_name() {
        with_na_profile(None, || {
            let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
            let dirs = adapter.get_app_dirs().unwrap();
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/newsapp"));
        });
    }

    #[test]
    fn adapter_isolates_dirs_per_profile() {
        let dirs_a = with_na_profile(Some("a"), || {
            let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
            adapter.get_app_dirs().unwrap()
        });
        let dirs_b = with_na_profile(Some("b"), || {
            let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
            adapter.get_app_dirs().unwrap()
        });

        assert_eq!(dirs_a.app_data_root, PathBuf::from("/tmp/newsapp-a"));
        assert_eq!(dirs_b.app_data_root, PathBuf::from("/tmp/newsapp-b"));
    }
}
