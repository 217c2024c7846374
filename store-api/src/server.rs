use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{home, orders, products};
use crate::config::Config;
use crate::infrastructure::database::mysql::ConnectionManager;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: ConnectionManager,
}

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home::index))
        .route("/health", get(home::health))
        .merge(products::routes())
        .merge(orders::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}
