//! Integration tests for the health check, documentation and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{TEST_PRODUCT, build_test_app, create_product, send};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn health_check_reports_product_count() {
    let app = build_test_app();

    let (status, json) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["products"], 0);
    assert!(json["timestamp"].is_string());

    create_product(&app, "silas", TEST_PRODUCT).await;

    let (_, json) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(json["products"], 1);
}

#[tokio::test]
async fn docs_are_served_from_assets() {
    let app = build_test_app();

    let request = Request::builder()
        .uri("/api/docs/index.html")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/products"));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app();

    let (status, _) = send(&app, Method::GET, "/this-route-does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_preflight_allows_patch() {
    let app = build_test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/products")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("Missing Access-Control-Allow-Origin header"),
        "*"
    );
    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PATCH"),
        "Allow-Methods should contain PATCH, got: {allow_methods}"
    );
    assert!(
        !allow_methods.contains("PUT"),
        "no route accepts PUT, got: {allow_methods}"
    );
}
