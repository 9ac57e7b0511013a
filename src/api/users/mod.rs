//! User administration API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// User router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/users", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{email}", get(handler::get_by_email))
        .route("/{email}/permissions", put(handler::set_permissions))
        .route("/{email}/active", put(handler::set_active))
}
