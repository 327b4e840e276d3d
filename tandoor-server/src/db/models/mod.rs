//! Database row models
//!
//! Internal storage representations with `RecordId` identities. Each row
//! type converts into its `shared` API counterpart, where ids travel as
//! `table:key` strings.

pub mod serde_helpers;

mod category;
mod menu_item;
mod order;
mod reservation;
mod user;

pub use category::Category;
pub use menu_item::MenuItem;
pub use order::Order;
pub use reservation::Reservation;
pub use user::User;

use surrealdb::RecordId;

/// API form of a row id; empty only for rows that were never stored
pub(crate) fn api_id(id: &Option<RecordId>) -> String {
    id.as_ref().map(|r| r.to_string()).unwrap_or_default()
}
