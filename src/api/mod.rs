//! API route modules
//!
//! One module per resource, each exposing a `router()` in the same shape:
//!
//! - [`health`] - liveness
//! - [`me`] - resolved access view for the calling profile
//! - [`users`] - user-role administration
//! - [`stores`] - store directory (read-only)
//! - [`rokar`] - daily ledger queries and manual entry
//! - [`attendance`] - per-store daily attendance
//! - [`import`] - bulk spreadsheet import (preview + commit)

pub mod attendance;
pub mod health;
pub mod import;
pub mod me;
pub mod rokar;
pub mod stores;
pub mod users;

use axum::Router;

use crate::core::ServerState;

/// Compose the full API router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(me::router())
        .merge(users::router())
        .merge(stores::router())
        .merge(rokar::router())
        .merge(attendance::router())
        .merge(import::router())
}
