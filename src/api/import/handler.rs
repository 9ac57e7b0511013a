//! Bulk import handlers
//!
//! Two-step flow: the operator uploads the workbook once for a preview, then
//! again with the target store and overwrite choice to commit. Input errors
//! (bad file, no store selected) are rejected before any write; per-row
//! failures during commit are tallied, never fatal.

use axum::{
    Json,
    extract::{Multipart, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::auth::permissions::ROKAR_IMPORT;
use crate::core::ServerState;
use crate::db::repository::{RokarRepository, StoreRepository};
use crate::import::{self, ImportPreview, ImportSummary};
use crate::utils::{AppError, AppResult};

/// Pull the uploaded workbook bytes out of the multipart body
async fn read_upload(multipart: &mut Multipart) -> AppResult<Vec<u8>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let bytes = field.bytes().await?;
            if bytes.is_empty() {
                return Err(AppError::validation("Uploaded file is empty".to_string()));
            }
            return Ok(bytes.to_vec());
        }
    }
    Err(AppError::validation(
        "Multipart body has no 'file' field".to_string(),
    ))
}

/// Parse and normalize without writing; returns the first 50 rows
pub async fn preview(
    user: CurrentUser,
    mut multipart: Multipart,
) -> AppResult<Json<ImportPreview>> {
    user.require_capability(ROKAR_IMPORT)?;

    let bytes = read_upload(&mut multipart).await?;
    let grid = import::parse_workbook(&bytes)?;
    let rows = import::normalize_rows(&grid)?;
    Ok(Json(import::preview(&rows)))
}

#[derive(Debug, Deserialize)]
pub struct CommitQuery {
    #[serde(default)]
    pub store_id: String,
    #[serde(default)]
    pub overwrite: bool,
}

/// Normalize and upsert every row against the selected store
pub async fn commit(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<CommitQuery>,
    mut multipart: Multipart,
) -> AppResult<Json<ImportSummary>> {
    user.require_capability(ROKAR_IMPORT)?;

    // Refuse before reading the body: no store, no writes.
    if query.store_id.trim().is_empty() {
        return Err(AppError::validation("No store selected".to_string()));
    }
    user.require_store(&query.store_id)?;

    let stores = StoreRepository::new(state.db.clone());
    if stores.find_by_code(&query.store_id).await?.is_none() {
        return Err(AppError::not_found(format!(
            "Store {} not found",
            query.store_id
        )));
    }

    let bytes = read_upload(&mut multipart).await?;
    let grid = import::parse_workbook(&bytes)?;
    let rows = import::normalize_rows(&grid)?;

    tracing::info!(
        store_id = %query.store_id,
        rows = rows.len(),
        overwrite = query.overwrite,
        importer = %user.profile.email,
        "Starting rokar import"
    );

    let repo = RokarRepository::new(state.db.clone());
    let summary = import::import_rows(
        &repo,
        &query.store_id,
        rows,
        query.overwrite,
        &user.profile.email,
    )
    .await;

    tracing::info!(
        store_id = %query.store_id,
        inserted = summary.inserted,
        overwritten = summary.overwritten,
        skipped = summary.skipped,
        errors = summary.errors,
        "Rokar import finished"
    );

    Ok(Json(summary))
}
