//! Rokar ledger API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Rokar router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/rokar", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).put(handler::upsert))
        .route("/{store_id}/{date}", get(handler::get_by_key))
}
