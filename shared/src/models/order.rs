//! Order model
//!
//! Orders carry an immutable snapshot of the purchased lines; after
//! creation only `status` ever changes, and only through the operator
//! transition endpoint.

use super::{Portion, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the order is fulfilled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "dine-in")]
    DineIn,
    #[serde(rename = "takeaway")]
    Takeaway,
    #[serde(rename = "delivery")]
    Delivery,
}

impl OrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::DineIn => "dine-in",
            OrderType::Takeaway => "takeaway",
            OrderType::Delivery => "delivery",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One purchased line: item name, the per-unit price actually charged
/// (the selected portion's price at add-time), quantity and portion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: u32,
    pub quantity: u32,
    pub portion: Portion,
}

impl OrderLine {
    /// Price times quantity; `None` when the product does not fit in a
    /// `u32`
    pub fn line_total(&self) -> Option<u32> {
        self.price.checked_mul(self.quantity)
    }
}

/// Order as served by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub items: Vec<OrderLine>,
    pub total_amount: u32,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Checkout payload: the cart snapshot plus customer info. `status` and
/// `createdAt` are always set server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub items: Vec<OrderLine>,
    pub total_amount: u32,
}

impl OrderCreate {
    /// Sum of line totals; must equal `total_amount` for the create
    /// request to be accepted. `None` when the sum overflows.
    pub fn computed_total(&self) -> Option<u32> {
        self.items
            .iter()
            .try_fold(0u32, |acc, line| acc.checked_add(line.line_total()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderType::DineIn).unwrap(),
            "\"dine-in\""
        );
        let t: OrderType = serde_json::from_str("\"delivery\"").unwrap();
        assert_eq!(t, OrderType::Delivery);
    }

    #[test]
    fn computed_total_sums_line_totals() {
        let create = OrderCreate {
            customer_name: "Asha".to_string(),
            customer_phone: "9876500000".to_string(),
            customer_address: None,
            order_type: OrderType::Takeaway,
            items: vec![
                OrderLine {
                    name: "Paneer Tikka".to_string(),
                    price: 160,
                    quantity: 2,
                    portion: Portion::Half,
                },
                OrderLine {
                    name: "Paneer Tikka".to_string(),
                    price: 280,
                    quantity: 1,
                    portion: Portion::Full,
                },
            ],
            total_amount: 600,
        };
        assert_eq!(create.computed_total(), Some(600));
    }

    #[test]
    fn computed_total_detects_overflow() {
        let create = OrderCreate {
            customer_name: "Asha".to_string(),
            customer_phone: "9876500000".to_string(),
            customer_address: None,
            order_type: OrderType::Takeaway,
            items: vec![OrderLine {
                name: "Paneer Tikka".to_string(),
                price: 100_000,
                quantity: 100_000,
                portion: Portion::Full,
            }],
            total_amount: 0,
        };
        assert_eq!(create.computed_total(), None);
    }
}
