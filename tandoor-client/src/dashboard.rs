//! Dashboard live feed
//!
//! The operator dashboard shows orders and reservations refreshed by
//! polling. [`LiveFeed`] wraps the HTTP client with the two dashboard
//! behaviors that are not plain fetches:
//!
//! - a missing or expired session yields an empty snapshot instead of
//!   an error, so the dashboard renders "not logged in" rather than
//!   crashing mid-poll;
//! - when the pending count (orders plus reservations) rises between
//!   refreshes, the alert sink fires (best effort; a failed alert
//!   never fails the refresh).

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{Order, Reservation, Status};

use crate::{ClientError, ClientResult, HttpClient};

/// One refresh worth of dashboard data
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub orders: Vec<Order>,
    pub reservations: Vec<Reservation>,
}

impl Snapshot {
    /// Orders and reservations awaiting operator action
    pub fn pending_count(&self) -> usize {
        self.orders
            .iter()
            .filter(|o| o.status == Status::Pending)
            .count()
            + self
                .reservations
                .iter()
                .filter(|r| r.status == Status::Pending)
                .count()
    }
}

/// Notification channel for newly arrived pending work
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn play(&self);
}

/// Detects a rise in the pending count between refreshes.
///
/// The first observation only establishes the baseline; an alert fires
/// from the second observation on, and only on an increase.
#[derive(Debug, Default)]
pub struct PendingWatch {
    last_count: Option<usize>,
}

impl PendingWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a count; returns true when it rose over the previous one
    pub fn observe(&mut self, count: usize) -> bool {
        let rose = matches!(self.last_count, Some(prev) if count > prev);
        self.last_count = Some(count);
        rose
    }
}

/// Polled dashboard state
pub struct LiveFeed {
    client: HttpClient,
    watch: PendingWatch,
    alert: Option<Arc<dyn AlertSink>>,
}

impl LiveFeed {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            watch: PendingWatch::new(),
            alert: None,
        }
    }

    /// Attach an alert sink fired on new pending orders or reservations
    pub fn with_alert(mut self, alert: Arc<dyn AlertSink>) -> Self {
        self.alert = Some(alert);
        self
    }

    /// Fetch the current orders and reservations.
    ///
    /// `Unauthorized` maps to an empty snapshot; every other error is
    /// passed through.
    pub async fn refresh(&mut self) -> ClientResult<Snapshot> {
        let orders = match self.client.admin_orders().await {
            Ok(orders) => orders,
            Err(ClientError::Unauthorized) => {
                tracing::debug!("no session; rendering empty dashboard");
                return Ok(Snapshot::default());
            }
            Err(e) => return Err(e),
        };
        let reservations = match self.client.admin_reservations().await {
            Ok(reservations) => reservations,
            Err(ClientError::Unauthorized) => return Ok(Snapshot::default()),
            Err(e) => return Err(e),
        };

        let snapshot = Snapshot {
            orders,
            reservations,
        };

        if self.watch.observe(snapshot.pending_count())
            && let Some(alert) = &self.alert
        {
            tracing::debug!(pending = snapshot.pending_count(), "new pending work");
            alert.play().await;
        }

        Ok(snapshot)
    }

    /// Advance an order to its next forward status ("Accept" on a
    /// pending order, "Complete & Bill" on a confirmed one), then
    /// refresh immediately rather than waiting for the next poll.
    pub async fn advance_order(&mut self, order: &Order) -> ClientResult<Snapshot> {
        let next = order
            .status
            .next_forward()
            .ok_or_else(|| ClientError::Validation(format!(
                "order in status '{}' has no next step",
                order.status
            )))?;
        self.client.update_order_status(&order.id, next).await?;
        self.refresh().await
    }

    /// Cancel an order and refresh
    pub async fn cancel_order(&mut self, id: &str) -> ClientResult<Snapshot> {
        self.client
            .update_order_status(id, Status::Cancelled)
            .await?;
        self.refresh().await
    }

    /// Advance a reservation to its next forward status
    pub async fn advance_reservation(
        &mut self,
        reservation: &Reservation,
    ) -> ClientResult<Snapshot> {
        let next = reservation
            .status
            .next_forward()
            .ok_or_else(|| ClientError::Validation(format!(
                "reservation in status '{}' has no next step",
                reservation.status
            )))?;
        self.client
            .update_reservation_status(&reservation.id, next)
            .await?;
        self.refresh().await
    }

    /// Cancel a reservation and refresh
    pub async fn cancel_reservation(&mut self, id: &str) -> ClientResult<Snapshot> {
        self.client
            .update_reservation_status(id, Status::Cancelled)
            .await?;
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{OrderLine, OrderType, Portion};

    fn order(status: Status) -> Order {
        Order {
            id: "orders:x".to_string(),
            customer_name: "Asha".to_string(),
            customer_phone: "9876500000".to_string(),
            customer_address: None,
            order_type: OrderType::Takeaway,
            items: vec![OrderLine {
                name: "Paneer Tikka".to_string(),
                price: 280,
                quantity: 1,
                portion: Portion::Full,
            }],
            total_amount: 280,
            status,
            created_at: Utc::now(),
        }
    }

    fn reservation(status: Status) -> Reservation {
        Reservation {
            id: "reservations:x".to_string(),
            customer_name: "Asha".to_string(),
            customer_phone: "9876500000".to_string(),
            date: "2026-09-01".to_string(),
            time: "19:30".to_string(),
            guests: 4,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn first_observation_never_alerts() {
        let mut watch = PendingWatch::new();
        assert!(!watch.observe(3));
        assert!(!watch.observe(3));
        assert!(watch.observe(4));
        assert!(!watch.observe(2));
        // Back up past a dip still alerts
        assert!(watch.observe(3));
    }

    #[test]
    fn pending_count_counts_only_pending() {
        let snapshot = Snapshot {
            orders: vec![
                order(Status::Pending),
                order(Status::Confirmed),
                order(Status::Pending),
                order(Status::Completed),
            ],
            reservations: vec![
                reservation(Status::Pending),
                reservation(Status::Cancelled),
            ],
        };
        assert_eq!(snapshot.pending_count(), 3);
    }

    #[test]
    fn new_pending_reservation_alerts() {
        let mut watch = PendingWatch::new();
        let mut snapshot = Snapshot {
            orders: vec![order(Status::Pending)],
            reservations: Vec::new(),
        };
        assert!(!watch.observe(snapshot.pending_count()));

        // A reservation arriving raises the count even with no new order
        snapshot.reservations.push(reservation(Status::Pending));
        assert!(watch.observe(snapshot.pending_count()));
    }
}
