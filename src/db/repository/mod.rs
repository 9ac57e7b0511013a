//! Repository module
//!
//! CRUD operations over the embedded SurrealDB tables. Records with
//! deterministic business keys (email, store code, `{storeId}_{date}`) are
//! addressed through `RecordId::from_table_key`, so existence checks and
//! upserts never need a scan.

pub mod attendance;
pub mod rokar;
pub mod store;
pub mod user_profile;

pub use attendance::AttendanceRepository;
pub use rokar::{RokarRepository, UpsertOutcome};
pub use store::StoreRepository;
pub use user_profile::UserProfileRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
