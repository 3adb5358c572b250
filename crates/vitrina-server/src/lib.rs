//! Vitrina Server - HTTP server for the Vitrina catalog.
//!
//! Axum-based HTTP layer over the catalog service: two moka cache
//! regions with explicit invalidation, the orchestrating
//! [`CatalogService`], request routing, query-parameter parsing,
//! middleware and Prometheus metrics.

pub mod cache;
pub mod catalog;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod state;

// Re-exports
pub use cache::{CacheConfig, CacheRegion, PageCacheKey};
pub use catalog::CatalogService;
pub use error::AppError;
pub use server::{create_router, create_router_with_state, run_server_with_state};
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
