// File-backed content cache: one JSON document per key.
//
// Writes go through a temp file and a rename so a power cut mid-write
// leaves the previous document intact. Keys are the fixed, short names the
// store uses ("config", "properties"), so they map to filenames directly.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::error::CacheError;
use crate::ports::ContentCache;

/// Persistent key-value cache under a single directory.
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory documents are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl ContentCache for FileCache {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CacheError> {
        let bytes = match fs::read(self.entry_path(key)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::Io(e)),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir).await?;

        let path = self.entry_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        let bytes = serde_json::to_vec(value)?;

        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.entry_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::Io(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path());

        let value = json!({ "duration": 7, "refresh": 7200 });
        cache.set("config", &value).await.unwrap();

        assert_eq!(cache.get("config").await.unwrap(), Some(value));
    }

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path());

        assert_eq!(cache.get("properties").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path());

        cache.set("config", &json!({ "duration": 1 })).await.unwrap();
        cache.set("config", &json!({ "duration": 2 })).await.unwrap();

        assert_eq!(
            cache.get("config").await.unwrap(),
            Some(json!({ "duration": 2 }))
        );
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path());

        cache.set("config", &json!(1)).await.unwrap();
        cache.remove("config").await.unwrap();
        cache.remove("config").await.unwrap();

        assert_eq!(cache.get("config").await.unwrap(), None);
    }

    #[tokio::test]
    async fn survives_reopening_the_directory() {
        let dir = tempfile::tempdir().unwrap();

        {
            let cache = FileCache::new(dir.path());
            cache.set("properties", &json!([{ "images": [] }])).await.unwrap();
        }

        let reopened = FileCache::new(dir.path());
        assert_eq!(
            reopened.get("properties").await.unwrap(),
            Some(json!([{ "images": [] }]))
        );
    }
}
