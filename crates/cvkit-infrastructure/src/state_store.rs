//! The durable key-value collaborator behind the resume repository.
//!
//! The document layer treats persistence as an external key-value store: a
//! string blob per key, written on every mutation, read once at startup.
//! `FileStateStore` is the shipping implementation (one JSON file per key,
//! atomic writes); `MemoryStateStore` backs tests and embedding.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use cvkit_core::{CvError, Result};

use crate::paths::CvkitPaths;

/// Durable key-value storage for serialized state blobs.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Reads the blob stored under `key`. `None` if the key has never been
    /// written (or the stored blob is empty).
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes the blob under `key`, replacing any previous value. The write
    /// is all-or-nothing: a failed write leaves the previous value intact.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed state store: one file per key under a base directory.
///
/// Writes go through a temporary file plus atomic rename, guarded by an
/// exclusive lock file, so a crash mid-write never corrupts the stored
/// blob.
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    /// Creates a store writing to the platform state directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: CvkitPaths::state_dir()?,
        })
    }

    /// Creates a store writing to a custom directory (for testing).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn write_atomic(path: &Path, value: &str) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| CvError::storage("state path has no parent directory"))?;
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        let _lock = FileLock::acquire(path)?;

        let file_name = path
            .file_name()
            .ok_or_else(|| CvError::storage("state path has no file name"))?;
        let tmp_path = parent.join(format!(".{}.tmp", file_name.to_string_lossy()));

        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(value.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let value = value.to_string();
        tokio::task::spawn_blocking(move || Self::write_atomic(&path, &value))
            .await
            .map_err(|e| CvError::internal(format!("state write task failed: {e}")))?
    }
}

/// A lock guard that releases its lock file when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| CvError::storage(format!("failed to acquire state lock: {e}")))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped; removing the
        // lock file is best effort.
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// In-memory state store for tests and embedding.
#[derive(Default)]
pub struct MemoryStateStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStateStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CvError::internal("state store mutex poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CvError::internal("state store mutex poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStateStore::with_dir(temp_dir.path().to_path_buf());
        assert!(store.get("resume-storage").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_and_get_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStateStore::with_dir(temp_dir.path().to_path_buf());
        store.set("resume-storage", r#"{"resume":{}}"#).await.unwrap();
        let loaded = store.get("resume-storage").await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"resume":{}}"#));
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStateStore::with_dir(temp_dir.path().to_path_buf());
        store.set("key", "first").await.unwrap();
        store.set("key", "second").await.unwrap();
        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStateStore::with_dir(temp_dir.path().to_path_buf());
        store.set("key", "value").await.unwrap();
        assert!(!temp_dir.path().join(".key.json.tmp").exists());
        assert!(temp_dir.path().join("key.json").exists());
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStateStore::new();
        assert!(store.get("key").await.unwrap().is_none());
        store.set("key", "value").await.unwrap();
        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("value"));
    }
}
