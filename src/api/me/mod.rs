//! Resolved access view for the calling profile
//!
//! Every screen asks the resolver the same questions; this endpoint answers
//! them all at once so clients never re-implement role logic.

use axum::{Json, Router, routing::get};

use crate::auth::{AccessView, CurrentUser};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/me", get(me))
}

async fn me(user: CurrentUser) -> Json<AccessView> {
    Json(AccessView::resolve(&user.profile))
}
