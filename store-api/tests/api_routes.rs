//! 路由层集成测试: 直接驱动 Router, 不依赖数据库
//! (校验在获取连接之前短路, 400 路径可以离线覆盖)

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use store_api::config::Config;
use store_api::infrastructure::database::mysql::ConnectionManager;
use store_api::server::{AppState, create_app};

fn test_app() -> Router {
    let config = Config::load().expect("load default config");
    let db = ConnectionManager::new(&config.database);
    create_app(AppState { config, db })
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn index_lists_all_endpoints() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let endpoints = body["endpoints"].as_object().unwrap();
    for endpoint in [
        "GET /health",
        "GET /products",
        "POST /products",
        "POST /orders",
        "GET /orders",
    ] {
        assert!(endpoints.contains_key(endpoint), "missing {endpoint}");
    }
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = test_app()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn add_product_without_price_is_rejected() {
    let response = test_app()
        .oneshot(post_json("/products", &json!({ "name": "Widget" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Name and price are required");
}

#[tokio::test]
async fn add_product_with_non_numeric_price_is_rejected() {
    let response = test_app()
        .oneshot(post_json(
            "/products",
            &json!({ "name": "Widget", "price": "cheap" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Price must be a number");
}

#[tokio::test]
async fn create_order_without_data_is_rejected() {
    let response = test_app()
        .oneshot(post_json("/orders", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn create_order_reports_first_missing_field() {
    let response = test_app()
        .oneshot(post_json(
            "/orders",
            &json!({ "customer_email": "a@x.com", "items": [{ "id": 1 }] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Missing required field: customer_name");
}

#[tokio::test]
async fn create_order_with_empty_items_is_rejected() {
    let response = test_app()
        .oneshot(post_json(
            "/orders",
            &json!({
                "customer_name": "A",
                "customer_email": "a@x.com",
                "customer_address": "1 St",
                "total_amount": 19.99,
                "items": []
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Items must be a non-empty list");
}
