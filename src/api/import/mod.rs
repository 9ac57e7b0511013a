//! Bulk import API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Import router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/import", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/preview", post(handler::preview))
        .route("/commit", post(handler::commit))
}
