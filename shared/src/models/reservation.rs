//! Table reservation model

use super::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Party size bounds accepted on the reservation form
pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 20;

/// Reservation as served by the API
///
/// `date` and `time` are plain calendar fields chosen by the customer;
/// they are not validated against restaurant hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Reservation booking payload; `status` and `createdAt` are set
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub customer_name: String,
    pub customer_phone: String,
    pub date: String,
    pub time: String,
    pub guests: u32,
}
