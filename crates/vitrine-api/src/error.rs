use thiserror::Error;

/// Top-level error type for the `vitrine-api` crate.
///
/// Covers every failure mode of the directory service and the image
/// preloader. `vitrine-core` maps these into its own port errors -- callers
/// above the core never see this type directly.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Non-success HTTP status from the directory service or image host.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// An image URL resolved to an empty body; nothing to display.
    #[error("Image at {url} was empty")]
    EmptyImage { url: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying on the
    /// next refresh cycle.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
