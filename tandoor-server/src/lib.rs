//! Tandoor Server - ordering and reservation backend for a single restaurant
//!
//! # Module structure
//!
//! ```text
//! tandoor-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── auth/          # Session-cookie authentication (JWT + argon2)
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Embedded SurrealDB models and repositories
//! └── utils/         # Errors, logging, validation helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, SessionService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use utils::logger::init_logger;

/// Load `.env` and initialize logging. Called once from `main`.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    init_logger();
}
