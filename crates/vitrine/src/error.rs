use thiserror::Error;

/// Errors that abort the binary before (or instead of) entering the
/// player loop. Once the player is running, nothing is fatal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] vitrine_config::ConfigError),

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("HTTP client setup failed: {0}")]
    Api(#[from] vitrine_api::Error),

    #[error(transparent)]
    Core(#[from] vitrine_core::CoreError),
}
