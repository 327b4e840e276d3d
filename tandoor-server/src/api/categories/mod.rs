//! Category API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Public storefront routes
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/categories", get(handler::list_with_items))
}

/// Dashboard CRUD, mounted under `/api/admin`
pub fn admin_router() -> Router<ServerState> {
    Router::new()
        .route("/categories", post(handler::create))
        .route(
            "/categories/{id}",
            put(handler::update).delete(handler::delete),
        )
}
