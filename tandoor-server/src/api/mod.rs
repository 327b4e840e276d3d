//! API routing
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`auth`] - login, logout, session lookup
//! - [`categories`] - catalog categories (public list, admin CRUD)
//! - [`menu_items`] - menu items (public list, admin CRUD)
//! - [`orders`] - storefront checkout, dashboard list and status
//! - [`reservations`] - table bookings, dashboard list and status
//!
//! Public routes live under `/api`; everything under `/api/admin`
//! passes through the session middleware first.

pub mod auth;
pub mod categories;
pub mod health;
pub mod menu_items;
pub mod orders;
pub mod reservations;

use axum::{Router, http::Method, http::header, middleware};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::middleware::require_operator;
use crate::core::ServerState;

/// Assemble the full application router
pub fn build_router(state: ServerState) -> Router {
    let admin = Router::new()
        .merge(categories::admin_router())
        .merge(menu_items::admin_router())
        .merge(orders::admin_router())
        .merge(reservations::admin_router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_operator,
        ));

    // Cookies require a concrete origin, so the wildcard is out
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(categories::router())
        .merge(menu_items::router())
        .merge(orders::router())
        .merge(reservations::router())
        .nest("/api/admin", admin)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
