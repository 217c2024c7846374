use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::Connection;

use crate::server::AppState;

/// GET / : 可用端点描述
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "E-Commerce Backend API is running!",
        "endpoints": {
            "GET /health": "Health check",
            "GET /products": "Get all products",
            "POST /products": "Add new product",
            "POST /orders": "Create new order",
            "GET /orders": "Get all orders"
        }
    }))
}

/// GET /health : 实际获取一次数据库连接探活
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.db.acquire().await {
        Ok(conn) => {
            let _ = conn.close().await;
            (
                StatusCode::OK,
                Json(json!({ "status": "healthy", "database": "connected" })),
            )
        }
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "status": "unhealthy", "error": err.to_string() })),
        ),
    }
}
