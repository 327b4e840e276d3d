//! Shared types for the Tandoor ordering platform
//!
//! Common API models used by both the server and the client crates:
//! catalog types, the portion price map, order/reservation types, the
//! status lifecycle state machine, and auth DTOs.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Category, CategoryCreate, CategoryUpdate, ItemPrices, LoginRequest, MenuItem, MenuItemCreate,
    MenuItemUpdate, MessageResponse, Order, OrderCreate, OrderLine, OrderType, Portion,
    Reservation, ReservationCreate, Status, StatusUpdateRequest, UserInfo,
};
