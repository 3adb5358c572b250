//! Item endpoint handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use vitrina_core::NewItem;

use crate::error::AppError;
use crate::extractors::ListParams;
use crate::handlers::response::{ItemPageResponse, ItemResponse};
use crate::state::AppState;

/// Handler for POST /items.
#[instrument(skip_all, fields(name = %request.name))]
pub async fn add_item(
    State(state): State<AppState>,
    Json(request): Json<NewItem>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = state.service().add_item(request).await?;
    Ok(Json(item))
}

/// Handler for GET /items.
#[instrument(skip_all, fields(page = query.page(), size = query.size()))]
pub async fn list_items(
    State(state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<Json<ItemPageResponse>, AppError> {
    let page = state.service().list_items(&query).await?;
    Ok(Json(page))
}

/// Handler for GET /items/{name}.
#[instrument(skip_all, fields(name = %name))]
pub async fn get_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = state.service().get_item(&name).await?;
    Ok(Json(item))
}

/// Request body para PUT /items/{name}/stock.
#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    /// Nueva cantidad en stock
    pub stock: u32,
}

/// Handler for PUT /items/{name}/stock.
#[instrument(skip_all, fields(name = %name, stock = request.stock))]
pub async fn update_stock(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<UpdateStockRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = state.service().update_stock(&name, request.stock).await?;
    Ok(Json(item))
}
