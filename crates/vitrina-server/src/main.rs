//! Vitrina Catalog Server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vitrina_server::cache::CacheConfig;
use vitrina_server::metrics::init_metrics;
use vitrina_server::{AppState, run_server_with_state};
use vitrina_store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get server configuration from environment
    let host = std::env::var("VITRINA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("VITRINA_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .context("VITRINA_PORT must be a valid port number")?;

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid address")?;

    // Cache configuration from environment
    let cache_config = CacheConfig {
        ttl_seconds: env_u64("VITRINA_CACHE_TTL", 300),
        max_capacity: env_u64("VITRINA_CACHE_MAX_ENTRIES", 10_000),
        tti_seconds: std::env::var("VITRINA_CACHE_TTI")
            .ok()
            .and_then(|v| v.parse().ok()),
    };

    // Install the Prometheus recorder before any metric is touched
    let prometheus_handle = init_metrics();

    tracing::info!(
        "Starting Vitrina Catalog Server v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!(
        ttl = cache_config.ttl_seconds,
        max_entries = cache_config.max_capacity,
        "Cache configuration"
    );

    // Explicit composition: the store and both cache regions are built
    // once here and injected into the catalog service.
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store, cache_config);

    run_server_with_state(addr, state, prometheus_handle).await?;

    Ok(())
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
