//! Store directory handlers
//!
//! Reads are filtered through the caller's store scope; an empty filter
//! means unrestricted per the resolver's sentinel convention. Provisioning
//! new stores requires `stores:manage`.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::permissions::STORES_MANAGE;
use crate::auth::{CurrentUser, access};
use crate::core::ServerState;
use crate::db::models::{Store, StoreCreate};
use crate::db::repository::StoreRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// List stores visible to the caller
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Store>>> {
    let repo = StoreRepository::new(state.db.clone());
    let stores = repo.find_all().await?;

    let filter = access::store_filter(Some(&user.profile));
    let visible = if filter.is_empty() {
        stores
    } else {
        stores
            .into_iter()
            .filter(|store| filter.contains(&store.code))
            .collect()
    };
    Ok(Json(visible))
}

/// Provision a store (chain administration)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<StoreCreate>,
) -> AppResult<Json<Store>> {
    user.require_capability(STORES_MANAGE)?;
    validate_required_text(&payload.code, "code", MAX_NAME_LEN)?;
    validate_required_text(&payload.brand, "brand", MAX_NAME_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.city, "city", MAX_NAME_LEN)?;

    let repo = StoreRepository::new(state.db.clone());
    let store = repo.create(payload).await?;
    Ok(Json(store))
}

/// Get one store by code
pub async fn get_by_code(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(code): Path<String>,
) -> AppResult<Json<Store>> {
    user.require_store(&code)?;
    let repo = StoreRepository::new(state.db.clone());
    let store = repo
        .find_by_code(&code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Store {code} not found")))?;
    Ok(Json(store))
}
