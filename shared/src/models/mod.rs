//! API data models
//!
//! All types serialize to the camelCase JSON wire format used by the HTTP
//! surface. Identifiers travel as `table:key` record-id strings.

mod category;
mod menu_item;
mod order;
mod reservation;
mod status;
mod user;

pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use menu_item::{ItemPrices, MenuItem, MenuItemCreate, MenuItemUpdate, Portion, PricesError};
pub use order::{Order, OrderCreate, OrderLine, OrderType};
pub use reservation::{MAX_GUESTS, MIN_GUESTS, Reservation, ReservationCreate};
pub use status::{Status, StatusUpdateRequest, TransitionError};
pub use user::{LoginRequest, MessageResponse, UserInfo};
