//! Utility module - errors, logging, validation helpers

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
