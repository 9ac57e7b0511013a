//! Storeops - back-office server for a multi-store retail chain
//!
//! # Architecture overview
//!
//! The server is the single writer behind the chain's back-office screens:
//! attendance tracking, the daily rokar ledger, bulk spreadsheet import and
//! user-role administration. Identity is established by an upstream auth
//! gateway; this process only loads the stored profile and resolves what the
//! caller may see and do.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/     # Config, state, HTTP server bootstrap
//! ├── auth/     # Roles, capability tables, access resolver, extractor
//! ├── db/       # Embedded SurrealDB models and repositories
//! ├── import/   # Bulk rokar importer: parse → normalize → preview → upsert
//! ├── api/      # HTTP routes and handlers
//! └── utils/    # Errors, logging, time helpers, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod import;
pub mod utils;

// Re-export public types
pub use auth::{AccessView, CurrentUser, Role};
pub use crate::core::{Config, Server, ServerState};
pub use import::{ImportPreview, ImportSummary};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
