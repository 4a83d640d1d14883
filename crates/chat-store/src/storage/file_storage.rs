//! File-backed storage: one JSON document per key.
//!
//! Values are written with the atomic write pattern:
//!
//! 1. Write to a temp file next to the target
//! 2. Sync to disk (fsync)
//! 3. Atomic rename over the target
//!
//! A crash mid-write leaves either the old document or the new one, never a mix.

use crate::storage::{
    KeyValueStorage,
    error::{Result as StorageResult, StorageError},
};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;

const FILE_EXTENSION: &str = "json";
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Distinguishes temp files of concurrent writes within one process.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document holding `key`.
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() {
            return Err(StorageError::invalid_key(key, "key must not be empty"));
        }
        if key
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        {
            return Err(StorageError::invalid_key(
                key,
                "key may only contain ASCII letters, digits, '_' and '-'",
            ));
        }

        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }

    /// Moves an undecodable document aside to `<key>.json.corrupted.<timestamp>`.
    ///
    /// Returns `None` when there is no document for `key`.
    pub async fn backup_corrupted(&self, key: &str) -> StorageResult<Option<PathBuf>> {
        let path = self.path_for(key)?;

        if !fs::try_exists(&path)
            .await
            .map_err(|e| StorageError::file_read(path.clone(), e))?
        {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{key}.{FILE_EXTENSION}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path)
            .await
            .map_err(|e| StorageError::backup_failed(path.clone(), e))?;

        warn!("Backed up corrupted document to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No document at {path:?}");
                Ok(None)
            }
            Err(e) => Err(StorageError::file_read(path, e)),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self.dir.join(format!(
            "{key}.{FILE_EXTENSION}.tmp.{}.{}",
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(e) = write_synced(&temp_path, value).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::file_write(temp_path, e));
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::atomic_rename(temp_path, final_path, e));
        }

        debug!("Wrote {} bytes to {final_path:?}", value.len());
        Ok(())
    }
}

async fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(value.as_bytes()).await?;
    file.sync_all().await
}
