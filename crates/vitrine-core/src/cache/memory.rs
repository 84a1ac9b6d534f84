// In-memory content cache, for tests and cache-less kiosk setups.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::CacheError;
use crate::ports::ContentCache;

/// A `ContentCache` that lives and dies with the process.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CacheError> {
        Ok(self
            .entries
            .lock()
            .map_err(|_| poisoned())?
            .get(key)
            .cloned())
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), CacheError> {
        self.entries
            .lock()
            .map_err(|_| poisoned())?
            .insert(key.to_owned(), value.clone());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().map_err(|_| poisoned())?.remove(key);
        Ok(())
    }
}

fn poisoned() -> CacheError {
    CacheError::Io(std::io::Error::other("cache mutex poisoned"))
}
