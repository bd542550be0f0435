//! Shared helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use merchant_product_service::config::Config;
use merchant_product_service::router::build_app_router;
use merchant_product_service::store::create_store;

/// Configuration pointing the docs route at the crate's `assets/` directory.
pub fn test_config() -> Config {
    Config {
        docs_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/assets").to_string(),
        ..Config::default()
    }
}

/// Full application router over a fresh, empty store.
pub fn build_test_app() -> Router {
    build_app_router(create_store(), &test_config())
}

/// Send one request and return the status with the parsed JSON body
/// (`Value::Null` when the body is empty or not JSON).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Send one request with a raw body and no `Content-Type` header.
pub async fn send_untyped(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Create a product for `merchant` and return its generated id.
pub async fn create_product(app: &Router, merchant: &str, body: &str) -> String {
    let (status, json) = send(
        app,
        Method::POST,
        &format!("/products?merchantId={merchant}"),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_str().expect("created product has an id").to_string()
}

pub const TEST_PRODUCT: &str =
    r#"{"name":"Test Product","description":"This is a test","price":100}"#;
