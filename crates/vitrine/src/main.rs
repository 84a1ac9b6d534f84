mod cli;
mod error;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

use vitrine_api::{DirectoryClient, ImageClient, TransportConfig};
use vitrine_core::{FileCache, Player, RotationStore};

use crate::cli::Cli;
use crate::error::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("vitrine: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = vitrine_config::load_config(cli.config.as_deref())?;

    let service_url = cli
        .service_url
        .or(config.service_url)
        .ok_or_else(|| AppError::Validation {
            field: "service_url".into(),
            reason: "not set in config file, environment, or flags".into(),
        })?;
    let base_url: Url = service_url.parse().map_err(|_| AppError::Validation {
        field: "service_url".into(),
        reason: format!("invalid URL: {service_url}"),
    })?;

    let branch_id = cli.branch_id.or(config.branch_id);
    let tv_id = cli.tv_id.or(config.tv_id);

    let transport = TransportConfig {
        timeout: Duration::from_secs(cli.timeout.unwrap_or(config.timeout)),
        accept_invalid_certs: cli.insecure,
    };

    let directory = Arc::new(DirectoryClient::new(base_url, &transport)?);
    let images = Arc::new(ImageClient::new(&transport)?);
    let cache_dir = cli
        .cache_dir
        .or(config.cache_dir)
        .unwrap_or_else(vitrine_config::default_cache_dir);
    info!(cache_dir = %cache_dir.display(), "using local content cache");
    let cache = Arc::new(FileCache::new(cache_dir));

    let store = Arc::new(RotationStore::new(cache, directory, images));
    let player = Player::new(Arc::clone(&store));

    if cli.once {
        return run_once(&store, branch_id, tv_id).await;
    }

    player.start(branch_id, tv_id).await;

    // Stand-in for the rendering layer: log whatever the display would show.
    let mut state_rx = store.subscribe();
    tokio::spawn(async move {
        while state_rx.changed().await.is_ok() {
            let state = state_rx.borrow_and_update().clone();
            if let Some(property) = &state.current_property {
                info!(
                    index = state.current,
                    name = property.name().unwrap_or("<unnamed>"),
                    images = property.images.len(),
                    "now showing"
                );
            }
        }
    });

    tokio::signal::ctrl_c().await.ok();
    info!("shutting down");
    player.stop().await;

    Ok(())
}

/// One full cache-load + sync + advance cycle, for smoke-testing a
/// deployment. Exits nonzero if the rotation cannot advance.
async fn run_once(
    store: &RotationStore,
    branch_id: Option<u64>,
    tv_id: Option<String>,
) -> Result<(), AppError> {
    store.load_cached_properties().await;
    store.synchronize_configuration(branch_id, tv_id).await;
    store.refresh_properties().await;

    store.advance().await?;

    let state = store.snapshot();
    if !state.ready {
        warn!("no properties available from service or cache");
    }
    info!(
        properties = state.properties.len(),
        current = state.current,
        "single cycle complete"
    );
    Ok(())
}
