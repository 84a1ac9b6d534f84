//! On-disk configuration for Vitrine displays.
//!
//! A display is provisioned once with a TOML file (service URL and
//! identifiers) and from then on runs unattended. Every field can also be
//! supplied through a `VITRINE_`-prefixed environment variable, which is
//! how container deployments inject per-screen identity.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config struct ───────────────────────────────────────────────────

/// Display configuration, loaded from TOML + environment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Directory service base URL (e.g. `https://directory.example.com/api/v1/`).
    pub service_url: Option<String>,

    /// Branch whose content set this display shows.
    pub branch_id: Option<u64>,

    /// Screen identifier within the branch.
    pub tv_id: Option<String>,

    /// Where to persist cached configuration and content. Defaults to the
    /// platform data directory.
    pub cache_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: None,
            branch_id: None,
            tv_id: None,
            cache_dir: None,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "vitrine", "vitrine")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default directory for the local content cache.
pub fn default_cache_dir() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback().join("cache"),
        |dirs| dirs.data_dir().join("cache"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("vitrine");
    p
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load configuration from the given file (or the platform default path)
/// plus `VITRINE_`-prefixed environment variables. A missing file is fine;
/// defaults and environment carry the day.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("VITRINE_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Saving ──────────────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path` (or the canonical
/// location). Used when provisioning a new display.
pub fn save_config(cfg: &Config, path: Option<&Path>) -> Result<(), ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(Some(Path::new("/nonexistent/vitrine.toml"))).unwrap();
        assert_eq!(config.service_url, None);
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn toml_file_is_loaded() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "service_url = \"https://directory.example.com/\"\nbranch_id = 7\ntv_id = \"lobby\"\ntimeout = 5"
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(
            config.service_url.as_deref(),
            Some("https://directory.example.com/")
        );
        assert_eq!(config.branch_id, Some(7));
        assert_eq!(config.tv_id.as_deref(), Some("lobby"));
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            service_url: Some("https://directory.example.com/".into()),
            branch_id: Some(3),
            tv_id: Some("window".into()),
            cache_dir: None,
            timeout: 10,
        };
        save_config(&config, Some(&path)).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.branch_id, Some(3));
        assert_eq!(loaded.tv_id.as_deref(), Some("window"));
        assert_eq!(loaded.timeout, 10);
    }
}
