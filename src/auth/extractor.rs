//! Current user extractor
//!
//! Identity is established by the upstream auth gateway, which forwards the
//! verified account email in the `x-user-email` header. The extractor loads
//! the stored profile for that email and rejects unknown or deactivated
//! accounts; handlers then consult the access resolver through the helper
//! methods.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::access;
use crate::core::ServerState;
use crate::db::models::UserProfile;
use crate::db::repository::UserProfileRepository;
use crate::utils::AppError;

/// Header set by the auth gateway after verifying the session
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// The profile behind the current request
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub profile: UserProfile,
}

impl CurrentUser {
    /// Fail with 403 unless the effective permission map grants `capability`.
    pub fn require_capability(&self, capability: &str) -> Result<(), AppError> {
        if access::has_permission(Some(&self.profile), capability) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Missing capability: {capability}"
            )))
        }
    }

    /// Fail with 403 unless the store filter admits `store_id`.
    pub fn require_store(&self, store_id: &str) -> Result<(), AppError> {
        if access::is_store_allowed(Some(&self.profile), store_id) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Store {store_id} is outside your scope"
            )))
        }
    }
}

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(USER_EMAIL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(AppError::Unauthorized)?;

        let repo = UserProfileRepository::new(state.db.clone());
        let profile = repo
            .find_by_email(email)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or(AppError::Unauthorized)?;

        if !profile.is_active {
            return Err(AppError::forbidden("Account is deactivated".to_string()));
        }

        Ok(Self { profile })
    }
}
