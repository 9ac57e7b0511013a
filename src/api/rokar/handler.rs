//! Rokar ledger handlers
//!
//! Reads require `rokar:view`, manual entry requires `rokar:edit`; both are
//! additionally scoped by the caller's store filter. Manual entry shares the
//! importer's keyed upsert, so a manual save and a re-import behave
//! identically on conflict.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::auth::permissions::{ROKAR_EDIT, ROKAR_VIEW};
use crate::core::ServerState;
use crate::db::models::{RokarData, RokarEntry};
use crate::db::repository::{RokarRepository, StoreRepository, UpsertOutcome};
use crate::utils::{AppError, AppResult, time};

#[derive(Debug, Deserialize)]
pub struct RokarQuery {
    pub store_id: String,
    pub from: String,
    pub to: String,
}

/// Ledger days for one store in an inclusive date range
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<RokarQuery>,
) -> AppResult<Json<Vec<RokarEntry>>> {
    user.require_capability(ROKAR_VIEW)?;
    user.require_store(&query.store_id)?;
    time::parse_date(&query.from)?;
    time::parse_date(&query.to)?;

    let repo = RokarRepository::new(state.db.clone());
    let entries = repo
        .find_range(&query.store_id, &query.from, &query.to)
        .await?;
    Ok(Json(entries))
}

/// One ledger day by its composite key
pub async fn get_by_key(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path((store_id, date)): Path<(String, String)>,
) -> AppResult<Json<RokarEntry>> {
    user.require_capability(ROKAR_VIEW)?;
    user.require_store(&store_id)?;

    let repo = RokarRepository::new(state.db.clone());
    let entry = repo
        .find_by_key(&store_id, &date)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No rokar for {store_id} on {date}")))?;
    Ok(Json(entry))
}

#[derive(Debug, Deserialize)]
pub struct RokarUpsertRequest {
    pub store_id: String,
    #[serde(default)]
    pub overwrite: bool,
    pub data: RokarData,
}

#[derive(Debug, serde::Serialize)]
pub struct RokarUpsertResponse {
    pub outcome: &'static str,
}

/// Manual single-day entry with the same conflict semantics as the importer
pub async fn upsert(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<RokarUpsertRequest>,
) -> AppResult<Json<RokarUpsertResponse>> {
    user.require_capability(ROKAR_EDIT)?;
    user.require_store(&payload.store_id)?;
    let date = time::parse_date(&payload.data.date)?;
    time::validate_not_future(date, state.config.timezone)?;

    let stores = StoreRepository::new(state.db.clone());
    if stores.find_by_code(&payload.store_id).await?.is_none() {
        return Err(AppError::not_found(format!(
            "Store {} not found",
            payload.store_id
        )));
    }

    let repo = RokarRepository::new(state.db.clone());
    let outcome = repo
        .upsert_entry(
            &payload.store_id,
            payload.data,
            payload.overwrite,
            &user.profile.email,
        )
        .await?;

    let outcome = match outcome {
        UpsertOutcome::Inserted => "inserted",
        UpsertOutcome::Overwritten => "overwritten",
        UpsertOutcome::Skipped => "skipped",
    };
    Ok(Json(RokarUpsertResponse { outcome }))
}
