//! User administration handlers
//!
//! All routes require the `users:manage` capability. Accounts are never
//! deleted; deactivation keeps attendance and ledger history attributable.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::auth::permissions::USERS_MANAGE;
use crate::core::ServerState;
use crate::db::models::{UserProfile, UserProfileCreate};
use crate::db::repository::UserProfileRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_email, validate_required_text};
use crate::utils::{AppError, AppResult};

/// List all profiles, active and deactivated
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<UserProfile>>> {
    user.require_capability(USERS_MANAGE)?;
    let repo = UserProfileRepository::new(state.db.clone());
    let profiles = repo.find_all().await?;
    Ok(Json(profiles))
}

/// Get one profile by email
pub async fn get_by_email(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(email): Path<String>,
) -> AppResult<Json<UserProfile>> {
    user.require_capability(USERS_MANAGE)?;
    let repo = UserProfileRepository::new(state.db.clone());
    let profile = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {email} not found")))?;
    Ok(Json(profile))
}

/// Create a profile, attributed to the creator
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<UserProfileCreate>,
) -> AppResult<Json<UserProfile>> {
    user.require_capability(USERS_MANAGE)?;
    validate_email(&payload.email)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let repo = UserProfileRepository::new(state.db.clone());
    let profile = repo.create(payload, &user.profile.email).await?;
    Ok(Json(profile))
}

#[derive(Debug, Deserialize)]
pub struct PermissionsUpdate {
    pub permissions: HashMap<String, bool>,
}

/// Replace a profile's explicit permission map
pub async fn set_permissions(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(email): Path<String>,
    Json(payload): Json<PermissionsUpdate>,
) -> AppResult<Json<UserProfile>> {
    user.require_capability(USERS_MANAGE)?;
    let repo = UserProfileRepository::new(state.db.clone());
    let profile = repo.set_permissions(&email, payload.permissions).await?;
    Ok(Json(profile))
}

#[derive(Debug, Deserialize)]
pub struct ActiveUpdate {
    pub is_active: bool,
}

/// Activate or deactivate an account
pub async fn set_active(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(email): Path<String>,
    Json(payload): Json<ActiveUpdate>,
) -> AppResult<Json<UserProfile>> {
    user.require_capability(USERS_MANAGE)?;
    if email == user.profile.email && !payload.is_active {
        return Err(AppError::validation(
            "Cannot deactivate your own account".to_string(),
        ));
    }
    let repo = UserProfileRepository::new(state.db.clone());
    let profile = repo.set_active(&email, payload.is_active).await?;
    Ok(Json(profile))
}
