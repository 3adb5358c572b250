//! Test helpers para vitrina-server.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use vitrina_server::cache::CacheConfig;
use vitrina_server::{AppState, create_router};
use vitrina_store::MemoryStore;

/// Router completo respaldado por un MemoryStore vacio.
pub fn app() -> Router {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store, CacheConfig::default());
    create_router(state)
}

/// Envia una request y retorna (status, body JSON).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

/// Alta de un item via POST /items.
pub async fn add_item(app: &Router, name: &str, price: f64, stock: u32) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/items",
        Some(json!({"name": name, "price": price, "stock": stock})),
    )
    .await
}
