//! Order repository
//!
//! Orders are written once at checkout; the only mutation afterwards is
//! a status transition, validated against the lifecycle table before
//! the row is touched.

use super::{BaseRepository, RepoError, RepoResult, record_id, record_key};
use crate::db::models::Order;
use chrono::Utc;
use shared::models::{OrderCreate, Status};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let key = record_key(TABLE, id);
        let order: Option<Order> = self.base.db().select((TABLE, key)).await?;
        Ok(order)
    }

    /// Persist a new order in `pending` status with a server-side
    /// creation timestamp
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let order = Order {
            id: None,
            customer_name: data.customer_name,
            customer_phone: data.customer_phone,
            customer_address: data.customer_address,
            order_type: data.order_type,
            items: data.items,
            total_amount: data.total_amount,
            status: Status::Pending,
            created_at: Utc::now(),
        };

        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Transition the order status; illegal transitions are rejected
    /// before any write
    pub async fn update_status(&self, id: &str, next: Status) -> RepoResult<Order> {
        let key = record_key(TABLE, id);
        let existing = self
            .find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

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
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use shared::models::{OrderLine, OrderType, Portion};

    fn takeaway_order(total: u32) -> OrderCreate {
        OrderCreate {
            customer_name: "Asha".to_string(),
            customer_phone: "9876500000".to_string(),
            customer_address: None,
            order_type: OrderType::Takeaway,
            items: vec![OrderLine {
                name: "Paneer Tikka".to_string(),
                price: total,
                quantity: 1,
                portion: Portion::Full,
            }],
            total_amount: total,
        }
    }

    #[tokio::test]
    async fn created_orders_start_pending() {
        let db = db::connect_memory().await.unwrap();
        let repo = OrderRepository::new(db);

        let order = repo.create(takeaway_order(280)).await.unwrap();
        assert_eq!(order.status, Status::Pending);
        assert_eq!(order.total_amount, 280);
        assert!(order.id.is_some());
    }

    #[tokio::test]
    async fn status_walks_the_lifecycle() {
        let db = db::connect_memory().await.unwrap();
        let repo = OrderRepository::new(db);

        let order = repo.create(takeaway_order(280)).await.unwrap();
        let id = order.id.as_ref().unwrap().to_string();

        let confirmed = repo.update_status(&id, Status::Confirmed).await.unwrap();
        assert_eq!(confirmed.status, Status::Confirmed);

        let completed = repo.update_status(&id, Status::Completed).await.unwrap();
        assert_eq!(completed.status, Status::Completed);
    }

    #[tokio::test]
    async fn terminal_orders_reject_transitions() {
        let db = db::connect_memory().await.unwrap();
        let repo = OrderRepository::new(db);

        let order = repo.create(takeaway_order(280)).await.unwrap();
        let id = order.id.as_ref().unwrap().to_string();

        repo.update_status(&id, Status::Cancelled).await.unwrap();
        let err = repo.update_status(&id, Status::Confirmed).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        // Status remains untouched
        let unchanged = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(unchanged.status, Status::Cancelled);
    }

    #[tokio::test]
    async fn repeated_accept_is_rejected_not_ignored() {
        let db = db::connect_memory().await.unwrap();
        let repo = OrderRepository::new(db);

        let order = repo.create(takeaway_order(280)).await.unwrap();
        let id = order.id.as_ref().unwrap().to_string();

        repo.update_status(&id, Status::Confirmed).await.unwrap();
        let err = repo.update_status(&id, Status::Confirmed).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let db = db::connect_memory().await.unwrap();
        let repo = OrderRepository::new(db);
        let err = repo
            .update_status("orders:missing", Status::Confirmed)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
