//! Tandoor Client - HTTP client and front-of-house logic
//!
//! Typed access to the ordering API plus the client-side pieces the
//! storefront and dashboard share: the cart engine, the polling loop,
//! the dashboard live feed with its pending-order alert, and the
//! revenue day-grouping used by order history.

pub mod cart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod poll;
pub mod revenue;

pub use cart::{Cart, CartLine, CartStore, FileCartStore, MemoryCartStore};
pub use config::ClientConfig;
pub use dashboard::{AlertSink, LiveFeed, PendingWatch, Snapshot};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use poll::{POLL_INTERVAL, Poller};
pub use revenue::{DayGroup, group_order_history};

// Re-export shared types for convenience
pub use shared::models::{
    Category, MenuItem, Order, OrderCreate, Portion, Reservation, ReservationCreate, Status,
    UserInfo,
};
