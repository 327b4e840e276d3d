//! Reservation row

use super::{api_id, serde_helpers};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{Reservation as SharedReservation, Status};
use surrealdb::RecordId;

pub type ReservationId = RecordId;

/// Reservation row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<ReservationId>,
    pub customer_name: String,
    pub customer_phone: String,
    pub date: String,
    pub time: String,
    pub guests: u32,
    #[serde(default)]
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for SharedReservation {
    fn from(row: Reservation) -> Self {
        SharedReservation {
            id: api_id(&row.id),
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            date: row.date,
            time: row.time,
            guests: row.guests,
            status: row.status,
            created_at: row.created_at,
        }
    }
}
