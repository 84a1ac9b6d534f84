// ── Collaborator ports ──
//
// The rotation store talks to the outside world through three narrow
// interfaces. Production wiring uses the HTTP clients from vitrine-api and
// the file cache; tests script these ports directly.

mod http;

use async_trait::async_trait;

use crate::error::{CacheError, DirectoryError, PreloadError};
use crate::model::{Configuration, Property};

/// Cache key for the persisted display configuration.
pub const CONFIG_KEY: &str = "config";
/// Cache key for the persisted property list.
pub const PROPERTIES_KEY: &str = "properties";

/// Async key-value store that survives process restarts.
#[async_trait]
pub trait ContentCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CacheError>;
    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), CacheError>;
    async fn remove(&self, key: &str) -> Result<(), CacheError>;
}

/// The remote directory service. Rejection is its only error signal.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    async fn get_configuration(
        &self,
        branch_id: Option<u64>,
        tv_id: Option<&str>,
    ) -> Result<Configuration, DirectoryError>;

    async fn get_properties(
        &self,
        branch_id: Option<u64>,
        tv_id: Option<&str>,
    ) -> Result<Vec<Property>, DirectoryError>;
}

/// Fetches and readies one image before it is shown.
#[async_trait]
pub trait ImagePreloader: Send + Sync {
    async fn preload(&self, url: &str) -> Result<(), PreloadError>;
}
