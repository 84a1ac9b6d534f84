// ── Core error types ──
//
// The only routine that surfaces an error to its caller is
// `RotationStore::advance` -- every other routine absorbs failures and keeps
// showing what was already cached. An always-on display must fall behind,
// never crash.

use thiserror::Error;

/// Error from the local content cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error from the remote directory service.
///
/// Rejection is the only error signal the service has -- there is no
/// partial-success shape, so a message string carries everything.
#[derive(Debug, Error)]
#[error("directory service error: {message}")]
pub struct DirectoryError {
    pub message: String,
}

impl From<vitrine_api::Error> for DirectoryError {
    fn from(err: vitrine_api::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// An image could not be preloaded (unreachable or empty).
#[derive(Debug, Error)]
#[error("failed to preload image {url}: {message}")]
pub struct PreloadError {
    pub url: String,
    pub message: String,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// `advance` was called with no properties loaded. Guarded rather than
    /// computing an index into an empty list.
    #[error("cannot advance an empty rotation")]
    EmptyRotation,

    #[error(transparent)]
    Preload(#[from] PreloadError),
}
