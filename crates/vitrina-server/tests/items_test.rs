mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{add_item, app, send};

#[tokio::test]
async fn added_item_can_be_fetched_by_name() {
    let app = app();

    let (status, body) = add_item(&app, "Apple", 1.99, 50).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Apple");

    let (status, body) = send(&app, "GET", "/items/Apple", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Apple");
    assert_eq!(body["price"], 1.99);
    assert_eq!(body["stock"], 50);
}

#[tokio::test]
async fn listing_sorts_by_name_ascending() {
    let app = app();
    add_item(&app, "Apple", 1.99, 50).await;
    add_item(&app, "Banana", 0.99, 10).await;

    let (status, body) = send(&app, "GET", "/items?page=0&size=10&sort=name,asc", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"][0]["name"], "Apple");
    assert_eq!(body["content"][1]["name"], "Banana");
    assert_eq!(body["totalElements"], 2);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["page"], 0);
    assert_eq!(body["size"], 10);
}

#[tokio::test]
async fn listing_defaults_to_first_page_by_name() {
    let app = app();
    add_item(&app, "Banana", 0.99, 10).await;
    add_item(&app, "Apple", 1.99, 50).await;

    let (status, body) = send(&app, "GET", "/items", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"][0]["name"], "Apple");
    assert_eq!(body["size"], 10);
}

#[tokio::test]
async fn listing_supports_descending_price() {
    let app = app();
    add_item(&app, "Apple", 1.99, 50).await;
    add_item(&app, "Banana", 0.99, 10).await;
    add_item(&app, "Cherry", 4.50, 5).await;

    let (_, body) = send(&app, "GET", "/items?sort=price,desc", None).await;

    assert_eq!(body["content"][0]["name"], "Cherry");
    assert_eq!(body["content"][2]["name"], "Banana");
}

#[tokio::test]
async fn listing_after_add_includes_the_new_item() {
    let app = app();
    add_item(&app, "Apple", 1.99, 50).await;

    let (_, before) = send(&app, "GET", "/items?sort=price,desc", None).await;
    assert_eq!(before["totalElements"], 1);

    add_item(&app, "Banana", 0.99, 10).await;

    let (_, after) = send(&app, "GET", "/items?sort=price,desc", None).await;
    assert_eq!(after["totalElements"], 2);
}

#[tokio::test]
async fn invalid_sort_field_is_rejected() {
    let app = app();

    let (status, body) = send(&app, "GET", "/items?sort=bogus", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid sort field: bogus");
}

#[tokio::test]
async fn malformed_direction_is_reported_as_invalid_field() {
    let app = app();

    let (status, body) = send(&app, "GET", "/items?sort=name,bogus", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid sort field: bogus");
}

#[tokio::test]
async fn zero_page_size_is_rejected() {
    let app = app();

    let (status, _) = send(&app, "GET", "/items?size=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_item_is_not_found() {
    let app = app();

    let (status, body) = send(&app, "GET", "/items/Ghost", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item not found: Ghost");
}

#[tokio::test]
async fn update_stock_is_visible_on_next_get() {
    let app = app();
    add_item(&app, "Apple", 1.99, 50).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/items/Apple/stock",
        Some(json!({"stock": 14})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stock"], 14);

    let (_, body) = send(&app, "GET", "/items/Apple", None).await;
    assert_eq!(body["stock"], 14);
}

#[tokio::test]
async fn update_stock_on_unknown_item_is_not_found() {
    let app = app();

    let (status, body) = send(
        &app,
        "PUT",
        "/items/Apple/stock",
        Some(json!({"stock": 14})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item not found: Apple");
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let app = app();

    let (status, body) = add_item(&app, "   ", 1.99, 50).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Item name cannot be blank");
}

#[tokio::test]
async fn oversized_name_is_rejected() {
    let app = app();

    let (status, body) = add_item(&app, &"x".repeat(101), 1.99, 50).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid item name size");
}

#[tokio::test]
async fn non_positive_price_is_rejected() {
    let app = app();

    let (status, body) = add_item(&app, "Apple", 0.0, 50).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Price must be a positive number");
}

#[tokio::test]
async fn duplicate_name_is_a_store_failure() {
    let app = app();
    add_item(&app, "Apple", 1.99, 50).await;

    let (status, body) = add_item(&app, "Apple", 2.99, 1).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "duplicate item name: Apple");
}

#[tokio::test]
async fn listing_paginates() {
    let app = app();
    for (name, price) in [("A", 1.0), ("B", 2.0), ("C", 3.0)] {
        add_item(&app, name, price, 1).await;
    }

    let (_, body) = send(&app, "GET", "/items?page=1&size=2&sort=name,asc", None).await;

    assert_eq!(body["content"][0]["name"], "C");
    assert_eq!(body["totalElements"], 3);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["page"], 1);
}
