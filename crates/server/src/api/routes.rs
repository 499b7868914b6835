use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::middleware::metrics_middleware;
use super::{handlers, plates};
use crate::state::AppState;

/// Largest accepted request body (uploaded images included).
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Greetings
        .route("/", get(handlers::hello))
        .route("/greeting", post(handlers::greeting))
        // Plate recognition
        .route("/readPlateNumber", post(plates::read_plate_number))
        .route(
            "/externalReadPlateNumber",
            get(plates::external_read_plate_number),
        )
        .route(
            "/externalBatchReadPlateNumbers",
            post(plates::external_batch_read_plate_numbers),
        )
        // Health and metrics
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
