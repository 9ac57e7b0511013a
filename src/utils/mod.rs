//! Utility module - shared error types and helpers
//!
//! - [`AppError`] / [`AppResult`] - application-level error handling
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - business-timezone date helpers
//! - [`validation`] - input validation helpers

pub mod error;
pub mod logger;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResponse, AppResult};
