//! Menu item API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Public storefront routes
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu-items", get(handler::list))
}

/// Dashboard CRUD, mounted under `/api/admin`
pub fn admin_router() -> Router<ServerState> {
    Router::new()
        .route("/menu-items", post(handler::create))
        .route(
            "/menu-items/{id}",
            put(handler::update).delete(handler::delete),
        )
}
