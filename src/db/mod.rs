//! Database module
//!
//! Embedded SurrealDB models and repositories.

pub mod models;
pub mod repository;
