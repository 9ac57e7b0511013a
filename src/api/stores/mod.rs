//! Store directory API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Store router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stores", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{code}", get(handler::get_by_code))
}
