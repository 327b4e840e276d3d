//! Reservation repository

use super::{BaseRepository, RepoError, RepoResult, record_id, record_key};
use crate::db::models::Reservation;
use chrono::Utc;
use shared::models::{ReservationCreate, Status};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "reservations";

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All reservations, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservations ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(reservations)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let key = record_key(TABLE, id);
        let reservation: Option<Reservation> = self.base.db().select((TABLE, key)).await?;
        Ok(reservation)
    }

    /// Persist a new booking in `pending` status
    pub async fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        let reservation = Reservation {
            id: None,
            customer_name: data.customer_name,
            customer_phone: data.customer_phone,
            date: data.date,
            time: data.time,
            guests: data.guests,
            status: Status::Pending,
            created_at: Utc::now(),
        };

        let created: Option<Reservation> =
            self.base.db().create(TABLE).content(reservation).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// Transition the reservation status through the same lifecycle
    /// table that orders use
    pub async fn update_status(&self, id: &str, next: Status) -> RepoResult<Reservation> {
        let key = record_key(TABLE, id);
        let existing = self
            .find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))?;

        existing
            .status
            .transition_to(next)
            .map_err(|e| RepoError::Validation(e.to_string()))?;

        let thing = record_id(TABLE, key);
        self.base
            .db()
            .query("UPDATE $thing SET status = $status")
            .bind(("thing", thing))
            .bind(("status", next))
            .await?;

        self.find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn booking() -> ReservationCreate {
        ReservationCreate {
            customer_name: "Ravi".to_string(),
            customer_phone: "9876511111".to_string(),
            date: "2025-08-30".to_string(),
            time: "19:30".to_string(),
            guests: 4,
        }
    }

    #[tokio::test]
    async fn created_reservations_start_pending() {
        let db = db::connect_memory().await.unwrap();
        let repo = ReservationRepository::new(db);

        let res = repo.create(booking()).await.unwrap();
        assert_eq!(res.status, Status::Pending);
        assert_eq!(res.guests, 4);
    }

    #[tokio::test]
    async fn cancelled_reservation_stays_cancelled() {
        let db = db::connect_memory().await.unwrap();
        let repo = ReservationRepository::new(db);

        let res = repo.create(booking()).await.unwrap();
        let id = res.id.as_ref().unwrap().to_string();

        repo.update_status(&id, Status::Confirmed).await.unwrap();
        repo.update_status(&id, Status::Cancelled).await.unwrap();

        let err = repo.update_status(&id, Status::Completed).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }
}
