//! File-backed key/value store
//!
//! Persists every key into a single JSON object file in the application
//! data directory. Writes go to a temporary sibling file first and are then
//! renamed over the live file, so a crash never leaves a half-written store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use hf_core::ports::KeyValueStorePort;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const DEFAULT_LOCAL_STORE_FILE: &str = "local_storage.json";

type Entries = BTreeMap<String, String>;

pub struct FileKeyValueStore {
    store_file_path: PathBuf,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create store with custom file path
    pub fn new(store_file_path: PathBuf) -> Self {
        Self {
            store_file_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_LOCAL_STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.store_file_path
    }

    async fn read_entries(&self) -> anyhow::Result<Entries> {
        if !fs::try_exists(&self.store_file_path).await.unwrap_or(false) {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.store_file_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to read local store: {}",
                    self.store_file_path.display()
                )
            })?;

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse local store: {}",
                self.store_file_path.display()
            )
        })
    }

    /// Entries to base a write on. A file that no longer parses is moved
    /// aside to `<name>.json.corrupt` and the store starts over empty.
    async fn entries_for_write(&self) -> anyhow::Result<Entries> {
        match self.read_entries().await {
            Ok(entries) => Ok(entries),
            Err(err) if err.downcast_ref::<serde_json::Error>().is_some() => {
                let corrupt_path = self.store_file_path.with_extension("json.corrupt");
                warn!(
                    error = %format!("{err:#}"),
                    moved_to = %corrupt_path.display(),
                    "Local store is corrupted, starting over"
                );
                if let Err(rename_err) = fs::rename(&self.store_file_path, &corrupt_path).await {
                    warn!(error = %rename_err, "Failed to move corrupted local store aside");
                }
                Ok(Entries::new())
            }
            Err(err) => Err(err),
        }
    }

    async fn write_entries(&self, entries: &Entries) -> anyhow::Result<()> {
        if let Some(parent) = self.store_file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json =
            serde_json::to_string_pretty(entries).context("Failed to serialize local store")?;
        let tmp_path = self.store_file_path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp_path)
            .await
            .with_context(|| format!("Failed to create temp file: {}", tmp_path.display()))?;
        file.write_all(json.as_bytes())
            .await
            .context("Failed to write local store")?;
        file.sync_all()
            .await
            .context("Failed to sync local store")?;
        drop(file);

        fs::rename(&tmp_path, &self.store_file_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to replace local store: {}",
                    self.store_file_path.display()
                )
            })?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let _guard = self.write_lock.lock().await;
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.entries_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await?;
        debug!(key, bytes = value.len(), "local store item written");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.entries_for_write().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
            debug!(key, "local store item removed");
        }
        Ok(())
    }
}
