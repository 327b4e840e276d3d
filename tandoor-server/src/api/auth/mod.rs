//! Authentication API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/login", post(handler::login))
        .route("/api/logout", post(handler::logout))
        .route("/api/user", get(handler::current_user))
}
