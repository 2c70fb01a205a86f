//! Gapdash Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Optional `gapdash.toml` (config dir, /etc/gapdash, or CWD) plus
//! environment overrides:
//! - `GAPDASH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `GAPDASH_PORT`: Port to listen on (default: 8080)
//! - `GAPDASH_LOG_LEVEL`: Log level (default: info)
//! - `GAPDASH_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: full filter, takes precedence over the level above

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gapdash::api::{serve, ApiConfig, AppState};
use gapdash::config::{Config, LoggingConfig};
use gapdash::dataset::{Dataset, Subsets};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting gapdash v{}", env!("CARGO_PKG_VERSION"));

    let dataset = Dataset::load().context("loading bundled dataset")?;
    tracing::info!("Loaded {} dataset records", dataset.len());

    let subsets = Arc::new(Subsets::derive(&dataset));
    tracing::info!(
        profile_rows = subsets.germany.len(),
        comparison_rows = subsets.countries.len(),
        "Derived view subsets"
    );

    let api_config = ApiConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(subsets, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Gapdash stopped");
    Ok(())
}

/// Initialize tracing from the logging config. `RUST_LOG` wins when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "gapdash={},tower_http=info",
            logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
