//! Attendance API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Attendance router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/attendance", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list).post(handler::save))
}
