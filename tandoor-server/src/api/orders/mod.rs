//! Order API module

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

/// Public storefront routes
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/orders", post(handler::create))
}

/// Dashboard routes, mounted under `/api/admin`
pub fn admin_router() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::list))
        .route("/orders/{id}/status", patch(handler::update_status))
}
