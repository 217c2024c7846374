use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use serde_json::Value;

use crate::domain::models::product::Product;
use crate::domain::services::product_service::ProductService;
use crate::error::AppError;
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/products", get(list_products).post(add_product))
}

#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
    pub message: String,
    pub product_id: u64,
}

async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::new(&state.db).list().await?;

    Ok(Json(products))
}

async fn add_product(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Json<CreateProductResponse>, AppError> {
    let product_id = ProductService::new(&state.db).add(&payload).await?;

    Ok(Json(CreateProductResponse {
        message: "Product added successfully".to_string(),
        product_id,
    }))
}
