//! Cache invalidation endpoint handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::state::AppState;

/// Response para operaciones de invalidación.
#[derive(Debug, Serialize)]
pub struct InvalidateResponse {
    /// Número de entries invalidadas (aproximado).
    pub invalidated: u64,
    /// Mensaje descriptivo.
    pub message: String,
}

/// DELETE /cache
/// Vacia ambas regiones de cache.
#[instrument(skip_all)]
pub async fn invalidate_all(State(state): State<AppState>) -> Json<InvalidateResponse> {
    let count = state.service().evict_all();

    info!(count = count, "All cache entries invalidated");

    Json(InvalidateResponse {
        invalidated: count,
        message: format!("Invalidated all {} cache entries", count),
    })
}

/// DELETE /cache/items
/// Vacia la region de items.
#[instrument(skip_all)]
pub async fn invalidate_items(State(state): State<AppState>) -> Json<InvalidateResponse> {
    let count = state.service().evict_items();

    info!(count = count, "Item cache entries invalidated");

    Json(InvalidateResponse {
        invalidated: count,
        message: format!("Invalidated {} item cache entries", count),
    })
}

/// DELETE /cache/pages
/// Vacia la region de paginas.
#[instrument(skip_all)]
pub async fn invalidate_pages(State(state): State<AppState>) -> Json<InvalidateResponse> {
    let count = state.service().evict_pages();

    info!(count = count, "Page cache entries invalidated");

    Json(InvalidateResponse {
        invalidated: count,
        message: format!("Invalidated {} page cache entries", count),
    })
}

/// DELETE /cache/items/{name}
/// Evicta la entry puntual de un item.
#[instrument(skip_all, fields(name = %name))]
pub async fn invalidate_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<InvalidateResponse> {
    state.service().evict_item(&name).await;

    info!(name = %name, "Item cache entry invalidated");

    Json(InvalidateResponse {
        invalidated: 1,
        message: format!("Invalidated cache entry for item '{}'", name),
    })
}
