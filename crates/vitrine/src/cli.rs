//! Clap derive structures for the `vitrine` binary.

use std::path::PathBuf;

use clap::Parser;

/// vitrine -- rotating digital-signage player
#[derive(Debug, Parser)]
#[command(
    name = "vitrine",
    version,
    about = "Rotating slideshow client for branch display screens",
    long_about = "Fetches a display configuration and a list of properties from a\n\
        remote directory service, caches both locally, preloads images, and\n\
        cycles through the properties on a timer. Designed to run unattended\n\
        on always-on screens: every failure degrades to the cached content."
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, short = 'c', env = "VITRINE_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Directory service base URL (overrides the config file)
    #[arg(long, env = "VITRINE_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Branch identifier
    #[arg(long, env = "VITRINE_BRANCH_ID")]
    pub branch_id: Option<u64>,

    /// TV identifier
    #[arg(long, env = "VITRINE_TV_ID")]
    pub tv_id: Option<String>,

    /// Directory for the local content cache
    #[arg(long, env = "VITRINE_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k')]
    pub insecure: bool,

    /// Run one sync + advance cycle and exit (deployment smoke test)
    #[arg(long)]
    pub once: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}
