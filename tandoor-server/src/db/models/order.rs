//! Order row
//!
//! `items` is an immutable snapshot embedded in the row; after creation
//! only `status` is ever updated.

use super::{api_id, serde_helpers};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{Order as SharedOrder, OrderLine, OrderType, Status};
use surrealdb::RecordId;

pub type OrderId = RecordId;

/// Order row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OrderId>,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: Option<String>,
    pub order_type: OrderType,
    pub items: Vec<OrderLine>,
    pub total_amount: u32,
    #[serde(default)]
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for SharedOrder {
    fn from(row: Order) -> Self {
        SharedOrder {
            id: api_id(&row.id),
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            customer_address: row.customer_address,
            order_type: row.order_type,
            items: row.items,
            total_amount: row.total_amount,
            status: row.status,
            created_at: row.created_at,
        }
    }
}
