//! Repository module
//!
//! CRUD access to the SurrealDB tables. Table names match the API
//! surface (`users`, `categories`, `menu_items`, `orders`,
//! `reservations`).
//!
//! # ID convention
//!
//! API ids are the full `"table:key"` string form of a `RecordId`.
//! Repositories accept either form and normalize with [`record_key`].

pub mod category;
pub mod menu_item;
pub mod order;
pub mod reservation;
pub mod user;

pub use category::CategoryRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use reservation::ReservationRepository;
pub use user::UserRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Extract the bare key from an API id that may carry a `"table:"` prefix
pub fn record_key<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

/// Build a `RecordId` from an API id in either form
pub fn record_id(table: &str, id: &str) -> RecordId {
    RecordId::from_table_key(table, record_key(table, id))
}

/// Base repository holding the database handle
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_key_strips_only_own_table_prefix() {
        assert_eq!(record_key("orders", "orders:abc123"), "abc123");
        assert_eq!(record_key("orders", "abc123"), "abc123");
        // A foreign prefix is left intact rather than misparsed
        assert_eq!(record_key("orders", "reservations:abc"), "reservations:abc");
    }
}
