//! File-based preference store
//!
//! Persists a flat `{ key: bool }` map as JSON in one file per named store
//! and fans changes out to observers through one `watch` channel per key.
//!
//! The file is loaded lazily on first use and then kept in memory; this
//! instance is assumed to be the only writer of the file.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt;
use na_core::onboarding::USER_SETTINGS;
use na_core::ports::{PreferenceError, PreferenceStorePort, PreferenceStream};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::{watch, Mutex, OnceCell};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info};

pub const PREFERENCES_FILE_SUFFIX: &str = "preferences.json";

struct Preferences {
    values: BTreeMap<String, bool>,
    channels: HashMap<String, watch::Sender<bool>>,
}

impl Preferences {
    fn current(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }
}

pub struct FilePreferenceStore {
    path: PathBuf,
    // Held across the file write, so writes reach disk in call order.
    preferences: OnceCell<Mutex<Preferences>>,
}

impl FilePreferenceStore {
    /// Create store backed by an explicit file path
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            preferences: OnceCell::new(),
        }
    }

    /// Create store `<base_dir>/<store_name>.preferences.json`
    pub fn with_base_dir(base_dir: PathBuf, store_name: impl AsRef<str>) -> Self {
        let file_name = format!("{}.{}", store_name.as_ref(), PREFERENCES_FILE_SUFFIX);
        Self::new(base_dir.join(file_name))
    }

    /// Create the `user_settings` store under `base_dir`
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::with_base_dir(base_dir, USER_SETTINGS)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn preferences(&self) -> Result<&Mutex<Preferences>, PreferenceError> {
        self.preferences
            .get_or_try_init(|| async {
                let values = self.load_from_disk().await?;
                debug!(path = %self.path.display(), keys = values.len(), "preferences loaded");
                Ok::<_, PreferenceError>(Mutex::new(Preferences {
                    values,
                    channels: HashMap::new(),
                }))
            })
            .await
    }

    async fn load_from_disk(&self) -> Result<BTreeMap<String, bool>, PreferenceError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(PreferenceError::Read(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| PreferenceError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    /// Write the full map to a sibling temp file, fsync it, then rename over
    /// the target. A failed attempt removes its temp file.
    async fn persist(&self, values: &BTreeMap<String, bool>) -> Result<(), PreferenceError> {
        let write_err = |what: &str, e: std::io::Error| {
            PreferenceError::Write(format!("{} {}: {}", what, self.path.display(), e))
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| write_err("create dir for", e))?;
        }

        let json = serde_json::to_string_pretty(values)
            .map_err(|e| PreferenceError::Write(format!("serialize preferences: {}", e)))?;

        let tmp_path = self.path.with_extension("json.tmp");
        let written = async {
            let mut file = fs::File::create(&tmp_path)
                .await
                .map_err(|e| write_err("create temp for", e))?;
            file.write_all(json.as_bytes())
                .await
                .map_err(|e| write_err("write temp for", e))?;
            file.sync_all()
                .await
                .map_err(|e| write_err("sync temp for", e))?;
            drop(file);

            fs::rename(&tmp_path, &self.path)
                .await
                .map_err(|e| write_err("rename temp onto", e))
        }
        .await;

        if written.is_err() {
            if let Err(e) = fs::remove_file(&tmp_path).await {
                debug!(path = %tmp_path.display(), error = %e, "temp preferences file not removed");
            }
        }
        written
    }
}

#[async_trait]
impl PreferenceStorePort for FilePreferenceStore {
    #[tracing::instrument(name = "infra.preferences.write", skip(self))]
    async fn write(&self, key: &str, value: bool) -> Result<(), PreferenceError> {
        let mut preferences = self.preferences().await?.lock().await;

        let mut next = preferences.values.clone();
        next.insert(key.to_string(), value);
        self.persist(&next).await?;
        preferences.values = next;

        if let Some(sender) = preferences.channels.get(key) {
            sender.send_if_modified(|current| {
                if *current == value {
                    return false;
                }
                *current = value;
                true
            });
        }

        info!(key, value, "preference written");
        Ok(())
    }

    async fn observe(&self, key: &str) -> Result<PreferenceStream, PreferenceError> {
        let mut preferences = self.preferences().await?.lock().await;

        let current = preferences.current(key);
        let receiver = preferences
            .channels
            .entry(key.to_string())
            .or_insert_with(|| watch::channel(current).0)
            .subscribe();

        debug!(key, current, "preference observer subscribed");
        Ok(WatchStream::new(receiver).boxed())
    }
}
