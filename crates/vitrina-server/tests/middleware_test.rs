mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use helpers::app;

#[tokio::test]
async fn responses_carry_a_generated_request_id() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let request_id = response.headers().get("x-request-id").unwrap();
    assert!(!request_id.to_str().unwrap().is_empty());
}

#[tokio::test]
async fn provided_request_id_is_echoed() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "test-id-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let request_id = response.headers().get("x-request-id").unwrap();
    assert_eq!(request_id, "test-id-123");
}
