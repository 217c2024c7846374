use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use serde_json::Value;

use crate::domain::models::order::{ORDER_STATUS_PENDING, OrderRecord};
use crate::domain::services::order_service::OrderService;
use crate::error::AppError;
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/orders", get(list_orders).post(create_order))
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub order_id: u64,
    pub message: String,
    pub status: String,
}

async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OrderRecord>>, AppError> {
    let orders = OrderService::new(&state.db).list().await?;

    Ok(Json(orders))
}

async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Json<CreateOrderResponse>, AppError> {
    tracing::debug!("Received order data: {payload}");

    let order_id = OrderService::new(&state.db).create(&payload).await?;

    Ok(Json(CreateOrderResponse {
        order_id,
        message: "Order created successfully".to_string(),
        status: ORDER_STATUS_PENDING.to_string(),
    }))
}
