use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, create_rental, extend_rental, get_rental, notify_overdue};

/// Creates the API router with all rental endpoints
///
/// - POST /rentals - Rent movies
/// - GET /rentals/:id - Get rental details
/// - POST /rentals/:id/extend - Extend a rental
/// - POST /rentals/overdue-notifications - Notify customers with overdue rentals
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/rentals", post(create_rental))
        .route("/rentals/overdue-notifications", post(notify_overdue))
        .route("/rentals/:id", get(get_rental))
        .route("/rentals/:id/extend", post(extend_rental))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
