use std::net::SocketAddr;

use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::handlers::{
    health::health_check,
    invalidate::{invalidate_all, invalidate_item, invalidate_items, invalidate_pages},
    items::{add_item, get_item, list_items, update_stock},
    metrics::metrics_handler,
};
use crate::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the application router with the given state.
///
/// The /metrics endpoint is not included here; tests drive this router
/// without installing a metrics recorder.
pub fn create_router(state: AppState) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(logging_middleware));

    Router::new()
        .route("/health", get(health_check))
        // Item routes
        .route("/items", post(add_item).get(list_items))
        .route("/items/{name}", get(get_item))
        .route("/items/{name}/stock", put(update_stock))
        // Cache invalidation routes
        .route("/cache", delete(invalidate_all))
        .route("/cache/items", delete(invalidate_items))
        .route("/cache/pages", delete(invalidate_pages))
        .route("/cache/items/{name}", delete(invalidate_item))
        .with_state(state)
        // HTTP metrics middleware
        .layer(from_fn(crate::metrics::http::http_metrics_middleware))
        .layer(middleware_stack)
        .layer(CorsLayer::permissive())
}

/// Creates the full router including the Prometheus /metrics endpoint.
pub fn create_router_with_state(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    create_router(state).merge(metrics_router)
}

/// Runs the server with the given state and metrics handle.
pub async fn run_server_with_state(
    addr: SocketAddr,
    state: AppState,
    prometheus_handle: PrometheusHandle,
) -> Result<(), std::io::Error> {
    let app = create_router_with_state(state, prometheus_handle);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
